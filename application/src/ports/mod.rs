//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod artifact_store;
pub mod execution_logger;
pub mod llm_gateway;
pub mod progress;
