pub mod client;
pub mod client_config;
pub mod models;

pub use client::InferenceClient;
pub use client_config::{ClientBuilder, ClientConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use models::*;
