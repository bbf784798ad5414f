use async_trait::async_trait;

use super::Conversation;
use super::ConversationSummary;
use super::GenerationForm;
use super::ModelCatalog;
use super::SessionError;

pub type GenerationApiBox = Box<dyn GenerationApi + Send + Sync>;

/// The service contract from the client's point of view. One implementation
/// talks HTTP; tests drive the session through the same seam.
#[async_trait]
pub trait GenerationApi {
    /// Sidebar summaries, newest first as the service returns them.
    async fn list_conversations(&self) -> Result<Vec<ConversationSummary>, SessionError>;

    /// Creates an empty conversation and returns it in full.
    async fn create_conversation(&self) -> Result<Conversation, SessionError>;

    async fn get_conversation(&self, id: &str) -> Result<Conversation, SessionError>;

    /// Asks the service to fetch the Jira story and produce test cases.
    /// Returns the whole updated conversation, including the new user and
    /// assistant turns.
    async fn generate(
        &self,
        id: &str,
        form: &GenerationForm,
    ) -> Result<Conversation, SessionError>;

    /// Asks the service to revise the latest assistant turn.
    async fn refine(
        &self,
        id: &str,
        prompt: &str,
        model: &str,
    ) -> Result<Conversation, SessionError>;

    async fn list_models(&self) -> Result<ModelCatalog, SessionError>;
}
