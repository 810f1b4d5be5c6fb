use serde_json::{Map, Value};

use super::base::GenerationOptions;

/// Request for the `/api/generate` endpoint.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub options: GenerationOptions,
}

impl GenerateRequest {
    /// Builds the wire object. Options are flattened next to `model` and
    /// `prompt` and are applied last, so a passthrough key of the same name
    /// replaces them.
    pub fn into_body(self) -> Value {
        let mut body = Map::new();
        body.insert("model".into(), Value::String(self.model));
        body.insert("prompt".into(), Value::String(self.prompt));
        body.extend(self.options.into_map());
        Value::Object(body)
    }
}
