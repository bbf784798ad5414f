use super::GenerationForm;
use crate::domain::models::SessionError;

fn valid_form() -> GenerationForm {
    return GenerationForm {
        jira_url: "https://x.atlassian.net".to_string(),
        jira_username: "u".to_string(),
        jira_password: "p".to_string(),
        jira_story_id: "PROJ-1".to_string(),
        custom_prompt: "".to_string(),
        model: "gpt-5".to_string(),
    };
}

fn validation_message(form: &GenerationForm) -> String {
    match form.validate() {
        Err(SessionError::Validation(msg)) => return msg,
        _ => panic!("expected a validation error"),
    }
}

#[test]
fn it_accepts_a_complete_form() {
    assert!(valid_form().validate().is_ok());
}

#[test]
fn it_allows_empty_optional_fields() {
    let mut form = valid_form();
    form.custom_prompt = "".to_string();
    form.model = "".to_string();
    assert!(form.validate().is_ok());
}

#[test]
fn it_rejects_a_missing_url() {
    let mut form = valid_form();
    form.jira_url = "".to_string();
    assert!(validation_message(&form).contains("Jira URL"));
}

#[test]
fn it_rejects_a_missing_username() {
    let mut form = valid_form();
    form.jira_username = "".to_string();
    assert!(validation_message(&form).contains("Jira username"));
}

#[test]
fn it_rejects_a_missing_token() {
    let mut form = valid_form();
    form.jira_password = "".to_string();
    assert!(validation_message(&form).contains("Jira API token"));
}

#[test]
fn it_rejects_a_missing_story_id() {
    let mut form = valid_form();
    form.jira_story_id = "".to_string();
    assert!(validation_message(&form).contains("story ID"));
}

#[test]
fn it_rejects_whitespace_only_fields() {
    let mut form = valid_form();
    form.jira_story_id = "   ".to_string();
    assert!(validation_message(&form).contains("story ID"));
}

#[test]
fn it_names_every_missing_field() {
    let msg = validation_message(&GenerationForm::default());
    assert!(msg.contains("Jira URL"));
    assert!(msg.contains("Jira username"));
    assert!(msg.contains("Jira API token"));
    assert!(msg.contains("story ID"));
}
