use anyhow::Result;

use super::Config;
use super::ConfigKey;
use crate::application::cli;

#[test]
fn it_serializes_to_valid_toml() {
    let res = Config::serialize_default(cli::build());
    let toml_res = res.parse::<toml_edit::Document>();
    assert!(toml_res.is_ok());
    assert!(res.contains("service-url = \"http://localhost:5000\""));
}

#[test]
fn it_defaults_the_service_url() {
    assert_eq!(
        Config::default(ConfigKey::ServiceUrl),
        "http://localhost:5000"
    );
}

#[test]
fn it_returns_empty_for_unset_keys() {
    assert_eq!(Config::get(ConfigKey::JiraToken), "");
}

#[tokio::test]
async fn it_loads_config_from_file() -> Result<()> {
    let matches =
        cli::build().try_get_matches_from(vec!["caseforge", "-c", "./config.example.toml"])?;
    Config::load(vec![&matches]).await?;

    assert_eq!(
        Config::get(ConfigKey::ServiceUrl),
        "http://localhost:5000"
    );

    return Ok(());
}

#[tokio::test]
async fn it_fails_to_load_a_malformed_config() -> Result<()> {
    let matches =
        cli::build().try_get_matches_from(vec!["caseforge", "-c", "./test/bad-config.toml"])?;
    let res = Config::load(vec![&matches]).await;
    assert!(res.is_err());

    return Ok(());
}
