#[cfg(test)]
#[path = "message_test.rs"]
mod tests;
use chrono::Local;
use chrono::SecondsFormat;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::JiraStory;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    User,
    Assistant,
    Error,
}

/// A single conversation turn as returned by the service. Messages are
/// immutable once appended; the client only ever renders them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub content: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jira_story: Option<JiraStory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_prompt: Option<String>,
}

impl Message {
    pub fn new(kind: MessageKind, content: &str) -> Message {
        return Message {
            kind,
            content: content.to_string(),
            timestamp: Local::now().to_rfc3339_opts(SecondsFormat::Secs, false),
            jira_story: None,
            custom_prompt: None,
        };
    }

    /// The service sends empty strings for omitted custom prompts.
    pub fn custom_prompt_annotation(&self) -> Option<&str> {
        if let Some(prompt) = &self.custom_prompt {
            if !prompt.trim().is_empty() {
                return Some(prompt);
            }
        }

        return None;
    }
}
