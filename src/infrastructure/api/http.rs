#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

use async_trait::async_trait;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Conversation;
use crate::domain::models::ConversationSummary;
use crate::domain::models::GenerationApi;
use crate::domain::models::GenerationForm;
use crate::domain::models::ModelCatalog;
use crate::domain::models::SessionError;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct GenerateRequest {
    conversation_id: String,
    jira_story_id: String,
    jira_username: String,
    jira_password: String,
    jira_url: String,
    custom_prompt: String,
    ai_model: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct RefineRequest {
    conversation_id: String,
    refinement_prompt: String,
    ai_model: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct ConversationEnvelope {
    conversation: Conversation,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ErrorEnvelope {
    error: String,
}

pub struct HttpGenerationApi {
    url: String,
}

impl Default for HttpGenerationApi {
    fn default() -> HttpGenerationApi {
        return HttpGenerationApi {
            url: Config::get(ConfigKey::ServiceUrl),
        };
    }
}

impl HttpGenerationApi {
    pub fn new(url: &str) -> HttpGenerationApi {
        return HttpGenerationApi {
            url: url.to_string(),
        };
    }

    /// Non-2xx responses normally carry a structured `{error}` payload.
    /// Anything else collapses into a generic backend failure.
    async fn read_error(res: reqwest::Response) -> SessionError {
        let status = res.status().as_u16();
        if let Ok(payload) = res.json::<ErrorEnvelope>().await {
            if !payload.error.is_empty() {
                return SessionError::Backend(payload.error);
            }
        }

        tracing::error!(status = status, "service responded without an error payload");
        return SessionError::Backend(format!(
            "The service returned an unexpected error (HTTP {status})."
        ));
    }

    async fn unwrap_conversation(res: reqwest::Response) -> Result<Conversation, SessionError> {
        if !res.status().is_success() {
            return Err(HttpGenerationApi::read_error(res).await);
        }

        let envelope = res.json::<ConversationEnvelope>().await?;
        return Ok(envelope.conversation);
    }
}

#[async_trait]
impl GenerationApi for HttpGenerationApi {
    async fn list_conversations(&self) -> Result<Vec<ConversationSummary>, SessionError> {
        let res = reqwest::Client::new()
            .get(format!("{url}/api/conversations", url = self.url))
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(HttpGenerationApi::read_error(res).await);
        }

        let summaries = res.json::<Vec<ConversationSummary>>().await?;
        return Ok(summaries);
    }

    async fn create_conversation(&self) -> Result<Conversation, SessionError> {
        let res = reqwest::Client::new()
            .post(format!("{url}/api/conversations", url = self.url))
            .header("Content-Type", "application/json")
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(HttpGenerationApi::read_error(res).await);
        }

        let conversation = res.json::<Conversation>().await?;
        return Ok(conversation);
    }

    async fn get_conversation(&self, id: &str) -> Result<Conversation, SessionError> {
        let res = reqwest::Client::new()
            .get(format!("{url}/api/conversations/{id}", url = self.url))
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(HttpGenerationApi::read_error(res).await);
        }

        let conversation = res.json::<Conversation>().await?;
        return Ok(conversation);
    }

    async fn generate(
        &self,
        id: &str,
        form: &GenerationForm,
    ) -> Result<Conversation, SessionError> {
        let req = GenerateRequest {
            conversation_id: id.to_string(),
            jira_story_id: form.jira_story_id.to_string(),
            jira_username: form.jira_username.to_string(),
            jira_password: form.jira_password.to_string(),
            jira_url: form.jira_url.to_string(),
            custom_prompt: form.custom_prompt.to_string(),
            ai_model: form.model.to_string(),
        };

        let res = reqwest::Client::new()
            .post(format!(
                "{url}/api/conversations/{id}/messages",
                url = self.url
            ))
            .json(&req)
            .send()
            .await?;

        return HttpGenerationApi::unwrap_conversation(res).await;
    }

    async fn refine(
        &self,
        id: &str,
        prompt: &str,
        model: &str,
    ) -> Result<Conversation, SessionError> {
        let req = RefineRequest {
            conversation_id: id.to_string(),
            refinement_prompt: prompt.to_string(),
            ai_model: model.to_string(),
        };

        let res = reqwest::Client::new()
            .post(format!(
                "{url}/api/conversations/{id}/refine",
                url = self.url
            ))
            .json(&req)
            .send()
            .await?;

        return HttpGenerationApi::unwrap_conversation(res).await;
    }

    async fn list_models(&self) -> Result<ModelCatalog, SessionError> {
        let res = reqwest::Client::new()
            .get(format!("{url}/api/models", url = self.url))
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(HttpGenerationApi::read_error(res).await);
        }

        let catalog = res.json::<ModelCatalog>().await?;
        return Ok(catalog);
    }
}
