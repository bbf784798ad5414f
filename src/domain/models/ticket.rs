#[cfg(test)]
#[path = "ticket_test.rs"]
mod tests;
use serde_derive::Deserialize;
use serde_derive::Serialize;

const COMMENT_PREVIEW_COUNT: usize = 3;
const COMMENT_PREVIEW_CHARS: usize = 100;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JiraComment {
    pub author: String,
    pub body: String,
}

/// The story record the service embeds in the first user message of a
/// generation, fetched from Jira on its side.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JiraStory {
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub issue_type: String,
    pub status: String,
    pub priority: String,
    pub assignee: String,
    #[serde(default)]
    pub comments: Vec<JiraComment>,
}

impl JiraStory {
    /// Plain-text block rendered above the message that carried the story.
    /// Caps comments at a short preview so long threads don't flood the
    /// transcript.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("{} - {}", self.key, self.issue_type),
            format!("Title: {}", self.title),
            format!("Status: {}", self.status),
            format!("Priority: {}", self.priority),
            format!("Assignee: {}", self.assignee),
        ];

        if !self.description.is_empty() {
            lines.push(format!("Description: {}", self.description));
        }

        if !self.comments.is_empty() {
            lines.push(format!("Comments ({}):", self.comments.len()));
            for comment in self.comments.iter().take(COMMENT_PREVIEW_COUNT) {
                lines.push(format!(
                    "  {}: {}",
                    comment.author,
                    preview(&comment.body)
                ));
            }
            if self.comments.len() > COMMENT_PREVIEW_COUNT {
                lines.push("  ... and more".to_string());
            }
        }

        return lines;
    }
}

fn preview(body: &str) -> String {
    if body.chars().count() <= COMMENT_PREVIEW_CHARS {
        return body.to_string();
    }

    let truncated = body.chars().take(COMMENT_PREVIEW_CHARS).collect::<String>();
    return format!("{truncated}...");
}
