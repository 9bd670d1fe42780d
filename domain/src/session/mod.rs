//! Chat messages sent to the model provider.

pub mod entities;
