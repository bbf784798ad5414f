use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::application::ui::help_text;
use crate::configuration::Config;
use crate::configuration::ConfigKey;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if !config_file_path.parent().unwrap().exists() {
        fs::create_dir_all(config_file_path.parent().unwrap()).await?;
    }

    let mut file = fs::File::create(config_file_path.clone()).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    let config_path_display = config_file_path.as_os_str().to_str().unwrap();
    println!("Created default config file at {config_path_display}");
    return Ok(());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn arg_service_url() -> Arg {
    return Arg::new(ConfigKey::ServiceUrl.to_string())
        .short('s')
        .long(ConfigKey::ServiceUrl.to_string())
        .env("CASEFORGE_SERVICE_URL")
        .num_args(1)
        .help(format!(
            "URL of the test case generation service. [default: {}]",
            Config::default(ConfigKey::ServiceUrl)
        ));
}

fn arg_model() -> Arg {
    return Arg::new(ConfigKey::Model.to_string())
        .short('m')
        .long(ConfigKey::Model.to_string())
        .env("CASEFORGE_MODEL")
        .num_args(1)
        .help("The AI model the service should use. Defaults to the service's advertised default if not set.");
}

fn arg_jira_url() -> Arg {
    return Arg::new(ConfigKey::JiraUrl.to_string())
        .long(ConfigKey::JiraUrl.to_string())
        .env("CASEFORGE_JIRA_URL")
        .num_args(1)
        .help("Jira base URL used to prefill the generation form.");
}

fn arg_jira_username() -> Arg {
    return Arg::new(ConfigKey::JiraUsername.to_string())
        .long(ConfigKey::JiraUsername.to_string())
        .env("CASEFORGE_JIRA_USERNAME")
        .num_args(1)
        .help("Jira username used to prefill the generation form.");
}

fn arg_jira_token() -> Arg {
    return Arg::new(ConfigKey::JiraToken.to_string())
        .long(ConfigKey::JiraToken.to_string())
        .env("CASEFORGE_JIRA_TOKEN")
        .num_args(1)
        .help("Jira API token used to prefill the generation form. Prefer the environment variable over the flag.");
}

fn arg_custom_prompt() -> Arg {
    return Arg::new(ConfigKey::CustomPrompt.to_string())
        .long(ConfigKey::CustomPrompt.to_string())
        .env("CASEFORGE_CUSTOM_PROMPT")
        .num_args(1)
        .help("Extra guidance appended to every generation request.");
}

fn arg_config_file() -> Arg {
    return Arg::new(ConfigKey::ConfigFile.to_string())
        .short('c')
        .long(ConfigKey::ConfigFile.to_string())
        .env("CASEFORGE_CONFIG_FILE")
        .num_args(1)
        .help(format!(
            "Path to configuration file. [default: {}]",
            Config::default(ConfigKey::ConfigFile)
        ));
}

pub fn build() -> Command {
    let commands_text = help_text()
        .split('\n')
        .map(|line| {
            if line.starts_with('-') {
                return format!("  {line}");
            }
            return line.to_string();
        })
        .collect::<Vec<String>>()
        .join("\n");

    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    return Command::new("caseforge")
        .about(about)
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(commands_text)
        .arg_required_else_help(false)
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .arg(arg_service_url())
        .arg(arg_model())
        .arg(arg_jira_url())
        .arg(arg_jira_username())
        .arg(arg_jira_token())
        .arg(arg_custom_prompt())
        .arg(arg_config_file());
}

/// Returns true when the session loop should start, false when a
/// subcommand handled everything already.
pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
            return Ok(false);
        }
        Some(("config", subcmd_matches)) => {
            match subcmd_matches.subcommand() {
                Some(("create", _)) => {
                    create_config_file().await?;
                }
                Some(("default", _)) => {
                    println!("{}", Config::serialize_default(build()));
                }
                Some(("path", _)) => {
                    println!("{}", Config::default(ConfigKey::ConfigFile));
                }
                _ => {}
            }
            return Ok(false);
        }
        _ => {}
    }

    Config::load(vec![&matches]).await?;

    return Ok(true);
}
