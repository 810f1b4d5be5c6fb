use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// Opaque value of the `response` field returned by `/api/generate`.
pub type GenerationResult = Value;

/// Opaque value of the `message` field returned by `/api/chat`.
pub type ChatResult = Value;

/// One turn of a conversation.
///
/// `role` is expected to be `"user"`, `"assistant"` or `"system"`, but any
/// string is forwarded as-is. Additional keys placed in `extra` travel with
/// the message unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChatMessage {
    pub fn new<R: Into<String>, C: Into<String>>(role: R, content: C) -> Self {
        Self { role: role.into(), content: content.into(), extra: Map::new() }
    }

    pub fn system<T: Into<String>>(content: T) -> Self { Self::new("system", content) }
    pub fn user<T: Into<String>>(content: T) -> Self { Self::new("user", content) }
    pub fn assistant<T: Into<String>>(content: T) -> Self { Self::new("assistant", content) }
}

/// Sampling options sent alongside every request.
///
/// Named fields start at their defaults. Keys in `extra` are passthrough
/// options; they are written after the named fields and win on collision.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions {
    pub temperature: f64,
    pub max_tokens: i64,
    pub top_p: f64,
    pub stream: bool,
    pub extra: Map<String, Value>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 500,
            top_p: 0.9,
            stream: false,
            extra: Map::new(),
        }
    }
}

impl GenerationOptions {
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn max_tokens(mut self, max_tokens: i64) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn top_p(mut self, top_p: f64) -> Self {
        self.top_p = top_p;
        self
    }

    // Forwarded only; replies are always read as a single JSON document.
    pub fn stream(mut self, stream: bool) -> Self {
        self.stream = stream;
        self
    }

    /// Adds a passthrough key. It is forwarded unvalidated.
    pub fn with_option<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Shallow merge of the named fields and the passthrough keys.
    pub fn into_map(self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("temperature".into(), Value::from(self.temperature));
        map.insert("max_tokens".into(), Value::from(self.max_tokens));
        map.insert("top_p".into(), Value::from(self.top_p));
        map.insert("stream".into(), Value::Bool(self.stream));
        map.extend(self.extra);
        map
    }
}

impl From<Map<String, Value>> for GenerationOptions {
    /// Recognised keys holding a value of the expected type fill the named
    /// fields. Everything else, including recognised keys of another type,
    /// stays a passthrough key and therefore still overrides the default.
    fn from(mut map: Map<String, Value>) -> Self {
        let mut options = Self::default();

        if let Some(v) = map.get("temperature").and_then(Value::as_f64) {
            options.temperature = v;
            map.remove("temperature");
        }
        if let Some(v) = map.get("max_tokens").and_then(Value::as_i64) {
            options.max_tokens = v;
            map.remove("max_tokens");
        }
        if let Some(v) = map.get("top_p").and_then(Value::as_f64) {
            options.top_p = v;
            map.remove("top_p");
        }
        if let Some(v) = map.get("stream").and_then(Value::as_bool) {
            options.stream = v;
            map.remove("stream");
        }

        options.extra = map;
        options
    }
}

impl Serialize for GenerationOptions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer {
        self.clone().into_map().serialize(serializer)
    }
}
