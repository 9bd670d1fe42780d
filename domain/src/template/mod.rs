//! Template store records.
//!
//! Agent and task definitions arrive as loosely typed records
//! ([`TemplateRecord`]) grouped into a [`TemplateSet`]. Factories in
//! [`crate::crew`] turn them into typed instances.

pub mod record;
pub mod set;

pub use record::{TemplateRecord, TemplateValue};
pub use set::TemplateSet;
