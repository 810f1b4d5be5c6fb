use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, info_span, instrument, trace, Instrument};

use crate::services::llm::{
    models::{
        chat::ChatRequest,
        errors::InferenceClientError,
        generate::GenerateRequest,
        ChatMessage, ChatResult, GenerationOptions, GenerationResult,
    },
    ClientConfig,
};

/// Client for the `/api/generate` and `/api/chat` endpoints of a local
/// inference server.
///
/// The configuration is fixed at construction. Clones share the underlying
/// connection pool, so one instance can serve any number of concurrent calls.
#[derive(Debug, Clone)]
pub struct InferenceClient {
    config: ClientConfig,
    client: Client,
}

impl InferenceClient {
    pub fn new(model: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self::from(ClientConfig {
            model: Some(model.into()),
            base_url: Some(base_url.into()),
        })
    }

    pub fn get_config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn model(&self) -> &str {
        self.config.model_or_default()
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url_or_default()
    }

    /// Single-turn completion.
    ///
    /// Sends `prompt` together with the merged `options` to `/api/generate`
    /// and returns the `response` field of the reply, or `Value::Null` when
    /// the reply has none.
    ///
    /// # Errors
    ///
    /// [`InferenceClientError::RequestFailure`] for a non-success status,
    /// [`InferenceClientError::Unclassified`] for anything else.
    pub async fn generate_text(
        &self,
        prompt: impl Into<String>,
        options: impl Into<GenerationOptions>,
    ) -> Result<GenerationResult, InferenceClientError> {
        let body = GenerateRequest {
            model: self.model().to_string(),
            prompt: prompt.into(),
            options: options.into(),
        }
        .into_body();

        let reply = self.post("/api/generate", &body).await?;
        Ok(take_field(reply, "response"))
    }

    /// Chat completion over an ordered conversation history.
    ///
    /// Sends `messages` in the given order to `/api/chat` and returns the
    /// `message` field of the reply, or `Value::Null` when the reply has none.
    ///
    /// # Errors
    ///
    /// Same as [`generate_text`](Self::generate_text).
    pub async fn generate_chat(
        &self,
        messages: Vec<ChatMessage>,
        options: impl Into<GenerationOptions>,
    ) -> Result<ChatResult, InferenceClientError> {
        let body = ChatRequest {
            model: self.model().to_string(),
            messages,
            options: options.into(),
        }
        .into_body()?;

        let reply = self.post("/api/chat", &body).await?;
        Ok(take_field(reply, "message"))
    }

    #[instrument(
        name = "inference.post",
        skip_all,
        fields(
            endpoint = %endpoint,
            model = %self.model(),
        )
    )]
    async fn post(&self, endpoint: &str, body: &Value) -> Result<Value, InferenceClientError> {
        let url = format!("{}{}", self.base_url(), endpoint);
        let span = info_span!("http.request", %url);
        async {
            let response = self
                .client
                .post(&url)
                .json(body)
                .send()
                .await
                .map_err(|e| {
                    error!(%e, "request could not be sent");
                    InferenceClientError::from(e)
                })?;

            let status = response.status();
            debug!(%status, "received response");

            if !status.is_success() {
                error!(%status, "request failed");
                return Err(InferenceClientError::RequestFailure(status.as_u16()));
            }

            let response_text = response.text().await?;

            match serde_json::from_str::<Value>(&response_text) {
                Ok(parsed) => {
                    trace!(?parsed, "deserialized response");
                    Ok(parsed)
                }
                Err(e) => {
                    error!(%e, raw = %response_text, "deserialization error");
                    Err(InferenceClientError::from(e))
                }
            }
        }
        .instrument(span)
        .await
    }
}

impl Default for InferenceClient {
    fn default() -> Self {
        Self::from(ClientConfig::default())
    }
}

impl From<ClientConfig> for InferenceClient {
    fn from(cfg: ClientConfig) -> Self {
        let config = ClientConfig {
            model: Some(cfg.model_or_default().to_string()),
            base_url: Some(cfg.base_url_or_default().to_string()),
        };
        Self {
            config,
            client: Client::new(),
        }
    }
}

fn take_field(mut reply: Value, field: &str) -> Value {
    reply.get_mut(field).map(Value::take).unwrap_or(Value::Null)
}
