#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Conversation;
use crate::domain::models::ConversationSummary;
use crate::domain::models::GenerationApiBox;
use crate::domain::models::GenerationForm;
use crate::domain::models::ModelCatalog;
use crate::domain::models::Screen;
use crate::domain::models::SessionError;

/// Whether an operation actually ran. Gated calls (request already in
/// flight, nothing active, empty input) are skipped without touching state,
/// and the caller should not re-render for them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Submit {
    Done,
    Skipped,
}

/// The whole mutable state of the client in one value, so operations can be
/// exercised and asserted on without any rendering surface attached.
#[derive(Default)]
pub struct SessionState {
    pub active_id: Option<String>,
    pub conversation: Option<Conversation>,
    pub summaries: Vec<ConversationSummary>,
    pub screen: Screen,
    pub in_flight: bool,
}

pub struct Session {
    api: GenerationApiBox,
    pub state: SessionState,
}

impl Session {
    pub fn new(api: GenerationApiBox) -> Session {
        return Session {
            api,
            state: SessionState::default(),
        };
    }

    /// Replaces the cached sidebar list. A failure here is logged and
    /// swallowed; the previous cache stays usable.
    pub async fn refresh_conversations(&mut self) {
        match self.api.list_conversations().await {
            Ok(summaries) => {
                self.state.summaries = summaries;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to refresh conversation list");
            }
        }
    }

    /// Starts a fresh conversation and makes it active. Unlike the list
    /// refresh, a failure here is the caller's to show.
    pub async fn create_conversation(&mut self) -> Result<(), SessionError> {
        let conversation = self.api.create_conversation().await?;

        self.state.summaries.insert(0, conversation.summary());
        self.state.active_id = Some(conversation.id.to_string());
        self.state.conversation = Some(conversation);
        self.state.screen = Screen::AwaitingInput;

        return Ok(());
    }

    /// Loads a conversation's full history and resumes where it left off.
    /// Gated while a generation is outstanding so the in-flight response
    /// cannot land on the wrong conversation.
    pub async fn select_conversation(&mut self, id: &str) -> Result<Submit, SessionError> {
        if self.state.in_flight {
            return Ok(Submit::Skipped);
        }

        let conversation = self.api.get_conversation(id).await?;

        self.state.screen = conversation.resume_screen();
        self.state.active_id = Some(conversation.id.to_string());
        self.state.conversation = Some(conversation);

        return Ok(Submit::Done);
    }

    pub async fn submit_generation(
        &mut self,
        form: &GenerationForm,
    ) -> Result<Submit, SessionError> {
        if self.state.in_flight {
            return Ok(Submit::Skipped);
        }
        let id = match &self.state.active_id {
            Some(id) => id.to_string(),
            None => return Ok(Submit::Skipped),
        };

        form.validate()?;

        // The flag must drop no matter how the request resolves, so the
        // result is only inspected after clearing it.
        self.state.in_flight = true;
        let res = self.api.generate(&id, form).await;
        self.state.in_flight = false;

        self.adopt(res?);
        return Ok(Submit::Done);
    }

    pub async fn submit_refinement(&mut self, prompt: &str) -> Result<Submit, SessionError> {
        if self.state.in_flight {
            return Ok(Submit::Skipped);
        }
        let trimmed = prompt.trim();
        if trimmed.is_empty() {
            return Ok(Submit::Skipped);
        }
        let id = match &self.state.active_id {
            Some(id) => id.to_string(),
            None => return Ok(Submit::Skipped),
        };

        self.state.in_flight = true;
        let res = self
            .api
            .refine(&id, trimmed, &Config::get(ConfigKey::Model))
            .await;
        self.state.in_flight = false;

        self.adopt(res?);
        return Ok(Submit::Done);
    }

    pub fn request_refinement(&mut self) {
        if self.state.screen == Screen::AwaitingDecision {
            self.state.screen = Screen::AwaitingRefinementText;
        }
    }

    /// The catalog is presentation sugar; when the endpoint is missing or
    /// broken the hardcoded fallback keeps the client usable.
    pub async fn model_catalog(&self) -> ModelCatalog {
        match self.api.list_models().await {
            Ok(catalog) => return catalog,
            Err(err) => {
                tracing::warn!(error = %err, "failed to load model catalog, using fallback");
                return ModelCatalog::fallback();
            }
        }
    }

    /// Takes the service's updated view of the conversation after a
    /// generation or refinement. The service renames conversations after
    /// the first generation, so the cached summary follows along.
    fn adopt(&mut self, conversation: Conversation) {
        if let Some(summary) = self
            .state
            .summaries
            .iter_mut()
            .find(|e| return e.id == conversation.id)
        {
            summary.title = conversation.title.to_string();
        }

        self.state.screen = Screen::AwaitingDecision;
        self.state.conversation = Some(conversation);
    }
}
