#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::Message;
use super::MessageKind;
use super::Screen;

/// Sidebar entry. The list endpoint returns full conversation objects,
/// but the client only keeps what it displays.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl Conversation {
    pub fn summary(&self) -> ConversationSummary {
        return ConversationSummary {
            id: self.id.to_string(),
            title: self.title.to_string(),
            created_at: self.created_at.to_string(),
        };
    }

    /// Where the input loop lands when this conversation is reopened. Only
    /// an assistant turn at the tail means there is something to accept or
    /// refine; anything else drops back to collecting a generation request.
    pub fn resume_screen(&self) -> Screen {
        if let Some(last) = self.messages.last() {
            if last.kind == MessageKind::Assistant {
                return Screen::AwaitingDecision;
            }
        }

        return Screen::AwaitingInput;
    }
}
