//! Configuration file loading for testcrew
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./testcrew.toml` or `./.testcrew.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/testcrew/config.toml`
//! 4. Default values
//!
//! Model, temperature and API key come from the environment instead; see [`env`].

pub mod env;
mod file_config;
mod loader;

pub use env::read_llm_settings;
pub use file_config::{
    ConfigValidationError, FileConfig, FileCrewConfig, FileLlmConfig, FilePathsConfig,
};
pub use loader::ConfigLoader;
