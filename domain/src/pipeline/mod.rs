//! Pipeline descriptors for the writer → reviewer → manager transformations.

pub mod descriptor;
pub mod result;

pub use descriptor::{PipelineDescriptor, PipelineKind, StageTemplates};
pub use result::PipelineResult;
