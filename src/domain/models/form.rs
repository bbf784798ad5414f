#[cfg(test)]
#[path = "form_test.rs"]
mod tests;

use super::SessionError;

/// Everything a generation request needs. Credentials are forwarded to the
/// service per request and never stored beyond the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationForm {
    pub jira_url: String,
    pub jira_username: String,
    pub jira_password: String,
    pub jira_story_id: String,
    pub custom_prompt: String,
    pub model: String,
}

impl GenerationForm {
    /// Local check only. A failing form must never reach the network.
    pub fn validate(&self) -> Result<(), SessionError> {
        let mut missing: Vec<&str> = vec![];
        if self.jira_url.trim().is_empty() {
            missing.push("Jira URL");
        }
        if self.jira_username.trim().is_empty() {
            missing.push("Jira username");
        }
        if self.jira_password.trim().is_empty() {
            missing.push("Jira API token");
        }
        if self.jira_story_id.trim().is_empty() {
            missing.push("story ID");
        }

        if !missing.is_empty() {
            return Err(SessionError::Validation(format!(
                "Please fill in all required Jira fields. Missing: {}.",
                missing.join(", ")
            )));
        }

        return Ok(());
    }
}
