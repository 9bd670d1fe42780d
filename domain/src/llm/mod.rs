//! Model handles and the factory that builds them.

pub mod factory;
pub mod handle;
pub mod settings;

pub use factory::{DEFAULT_TEMPERATURE, ModelClientFactory};
pub use handle::{Credential, ModelHandle};
pub use settings::LlmSettings;
