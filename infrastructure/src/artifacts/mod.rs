//! Artifact storage adapters.

mod local_store;

pub use local_store::LocalArtifactStore;
