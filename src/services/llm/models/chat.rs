use serde_json::{Map, Value};

use super::{
    base::{ChatMessage, GenerationOptions},
    errors::InferenceClientError,
};

/// Request for the `/api/chat` endpoint.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub options: GenerationOptions,
}

impl ChatRequest {
    /// Same layout as [`GenerateRequest::into_body`](super::generate::GenerateRequest::into_body)
    /// with `messages` in place of `prompt`. Message order is kept.
    pub fn into_body(self) -> Result<Value, InferenceClientError> {
        let mut body = Map::new();
        body.insert("model".into(), Value::String(self.model));
        body.insert("messages".into(), serde_json::to_value(self.messages)?);
        body.extend(self.options.into_map());
        Ok(Value::Object(body))
    }
}
