//! LLM gateway adapters.

mod chat_completions;
pub mod routing;

pub use chat_completions::ChatCompletionsGateway;
pub use routing::{Endpoint, resolve_endpoint};
