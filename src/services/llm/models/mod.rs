pub mod base;
pub mod chat;
pub mod errors;
pub mod generate;

pub use base::*;
pub use errors::*;
