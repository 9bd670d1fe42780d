//! Command line definitions and the input-name prompt.

pub mod commands;
pub mod prompt;
