//! Core domain concepts shared across all subdomains.
//!
//! - [`model::ModelId`] - provider-prefixed model identifiers
//! - [`error`] - template, configuration and plan errors

pub mod error;
pub mod model;
pub mod string;
