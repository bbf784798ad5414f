use thiserror::Error;

/// Everything a session operation can fail with. Validation never reaches
/// the network, Backend carries the service's own `{error}` payload, and
/// Transport is anything below that (DNS, refused connection, bad JSON
/// framing).
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("{0}")]
    Validation(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Backend(String),
}

impl SessionError {
    /// Validation and Backend messages are precise and safe to show as-is.
    /// Transport details are collapsed into a generic connection hint.
    pub fn user_message(&self) -> String {
        match self {
            SessionError::Validation(msg) => return msg.to_string(),
            SessionError::Backend(msg) => return msg.to_string(),
            SessionError::Transport(_) => {
                return "The service could not be reached. Please check your connection and try again.".to_string();
            }
        }
    }
}
