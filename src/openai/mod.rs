//! Chat-completion access to the OpenAI API.

pub(crate) mod client;
pub(crate) mod types;

pub use client::{CompletionClient, OpenAiClient, OpenAiError};
pub use types::CompletionRequest;
