//! Crew configuration from TOML (`[crew]` section)

use serde::{Deserialize, Serialize};

/// Raw crew execution configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCrewConfig {
    /// Maximum model requests started per minute (0 disables throttling)
    pub max_rpm: u32,
    /// Persist writer and reviewer outputs next to the final artifact
    pub save_stage_drafts: bool,
}

impl Default for FileCrewConfig {
    fn default() -> Self {
        Self {
            max_rpm: 10,
            save_stage_drafts: true,
        }
    }
}
