//! Thin async client for the generate and chat endpoints of a local
//! Ollama-compatible inference server.
//!
//! ```no_run
//! use ollama_api_wrapper::{ChatMessage, GenerationOptions, InferenceClient};
//!
//! # async fn run() -> Result<(), ollama_api_wrapper::InferenceClientError> {
//! let client = InferenceClient::default();
//! let joke = client.generate_text("Tell me a joke", GenerationOptions::default()).await?;
//!
//! let reply = client
//!     .generate_chat(vec![ChatMessage::user("Hello!")], GenerationOptions::default())
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub(crate) mod services;
pub mod observability;

pub use services::llm::{
    ChatMessage, ChatResult, ClientBuilder, ClientConfig, GenerationOptions, GenerationResult,
    InferenceClient, InferenceClientError, DEFAULT_BASE_URL, DEFAULT_MODEL,
};
pub use services::llm::models::{chat::ChatRequest, generate::GenerateRequest};
pub use observability::logging::init_default_tracing;
