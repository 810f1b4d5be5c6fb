use crate::services::llm::InferenceClient;

pub const DEFAULT_MODEL: &str = "llama3:latest";
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Settings fixed for the lifetime of an [`InferenceClient`].
///
/// Unset fields fall back to [`DEFAULT_MODEL`] and [`DEFAULT_BASE_URL`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientConfig {
    pub model: Option<String>,
    pub base_url: Option<String>,
}

impl ClientConfig {
    pub(crate) fn model_or_default(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    pub(crate) fn base_url_or_default(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }
}

pub trait ClientBuilder {
    fn model(self, model: impl Into<String>) -> Self;
    fn base_url(self, base_url: impl Into<String>) -> Self;
    fn build(self) -> InferenceClient;
}

impl ClientBuilder for ClientConfig {
    fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    fn build(self) -> InferenceClient {
        InferenceClient::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let client = ClientConfig::default().build();
        assert_eq!(client.model(), "llama3:latest");
        assert_eq!(client.base_url(), "http://localhost:11434");
    }

    #[test]
    fn builder_overrides_each_field_independently() {
        let client = ClientConfig::default().model("llama2").build();
        assert_eq!(client.model(), "llama2");
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);

        let client = ClientConfig::default().base_url("http://gpu-box:11434").build();
        assert_eq!(client.model(), DEFAULT_MODEL);
        assert_eq!(client.base_url(), "http://gpu-box:11434");
    }
}
