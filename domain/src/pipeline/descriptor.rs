//! Pipeline descriptors: everything that differs between the transformations.

use crate::core::string::placeholder_marker;
use serde::{Deserialize, Serialize};

/// The four artifact transformations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PipelineKind {
    /// Use case → Gherkin feature
    Gherkin,
    /// Gherkin feature → C# xUnit step definitions
    Xunit,
    /// Gherkin feature → IEEE 829 test plan
    Ieee,
    /// IEEE test plan → Gherkin feature
    IeeeToGherkin,
}

impl PipelineKind {
    pub const ALL: [PipelineKind; 4] = [
        PipelineKind::Gherkin,
        PipelineKind::Xunit,
        PipelineKind::Ieee,
        PipelineKind::IeeeToGherkin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineKind::Gherkin => "gherkin",
            PipelineKind::Xunit => "xunit",
            PipelineKind::Ieee => "ieee",
            PipelineKind::IeeeToGherkin => "ieee-to-gherkin",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PipelineKind::Gherkin => "Gherkin generation (.feature)",
            PipelineKind::Xunit => "Step generation (C# xUnit)",
            PipelineKind::Ieee => "IEEE test plan generation",
            PipelineKind::IeeeToGherkin => "IEEE plan to Gherkin",
        }
    }

    /// Template name prefix shared by the stage templates
    fn template_prefix(&self) -> &'static str {
        match self {
            PipelineKind::Gherkin => "gherkin",
            PipelineKind::Xunit => "xunit",
            PipelineKind::Ieee => "ieee",
            PipelineKind::IeeeToGherkin => "andes_gherkin",
        }
    }
}

impl std::fmt::Display for PipelineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PipelineKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gherkin" => Ok(PipelineKind::Gherkin),
            "xunit" | "steps" => Ok(PipelineKind::Xunit),
            "ieee" => Ok(PipelineKind::Ieee),
            "ieee-to-gherkin" | "andes" => Ok(PipelineKind::IeeeToGherkin),
            other => Err(format!("unknown pipeline '{}'", other)),
        }
    }
}

/// Agent and task template names for one stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageTemplates {
    pub agent: String,
    pub task: String,
}

impl StageTemplates {
    pub fn new(agent: impl Into<String>, task: impl Into<String>) -> Self {
        Self {
            agent: agent.into(),
            task: task.into(),
        }
    }
}

/// Parameters of a writer → reviewer → manager pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineDescriptor {
    pub kind: PipelineKind,
    pub writer: StageTemplates,
    pub reviewer: StageTemplates,
    pub manager: StageTemplates,
    /// Placeholder replaced by the input artifact text in writer/reviewer descriptions
    pub placeholder: String,
    /// Extension of the input artifact, without the dot
    pub input_extension: String,
    /// Directories searched for the input artifact, in order
    pub input_dirs: Vec<String>,
    pub results_dir: String,
    pub artifact_file: String,
    /// Where writer/reviewer drafts go; `None` disables drafts
    pub drafts_dir: Option<String>,
    pub log_file: String,
}

impl PipelineDescriptor {
    /// Built-in descriptor with the default directory layout
    pub fn builtin(kind: PipelineKind) -> Self {
        let prefix = kind.template_prefix();
        let (placeholder, extension, input_dirs, artifact) = match kind {
            PipelineKind::Gherkin => ("user_case", "txt", vec!["casos_uso"], "gherkin_gerado.feature"),
            PipelineKind::Xunit => ("feature_content", "feature", vec!["features"], "steps_xunit.cs"),
            PipelineKind::Ieee => (
                "feature_content",
                "feature",
                vec!["features"],
                "plano_teste_ieee.md",
            ),
            PipelineKind::IeeeToGherkin => (
                "andes_content",
                "andes",
                vec!["andes", "resposta"],
                "gherkin_from_ieee.feature",
            ),
        };

        Self {
            kind,
            writer: StageTemplates::new(
                format!("{}_writer", prefix),
                format!("{}_writer_task", prefix),
            ),
            reviewer: StageTemplates::new(
                format!("{}_reviewer", prefix),
                format!("{}_review_task", prefix),
            ),
            manager: StageTemplates::new(
                format!("manager_{}", prefix),
                format!("manager_{}_task", prefix),
            ),
            placeholder: placeholder.to_string(),
            input_extension: extension.to_string(),
            input_dirs: input_dirs.into_iter().map(String::from).collect(),
            results_dir: "resposta".to_string(),
            artifact_file: artifact.to_string(),
            drafts_dir: Some("etapas_geracao".to_string()),
            log_file: format!("crew_{}_log.txt", prefix),
        }
    }

    /// Placeholder as written in task descriptions, e.g. `{feature_content}`
    pub fn placeholder_marker(&self) -> String {
        placeholder_marker(&self.placeholder)
    }

    pub fn with_input_dirs(mut self, dirs: Vec<String>) -> Self {
        self.input_dirs = dirs;
        self
    }

    pub fn with_results_dir(mut self, dir: impl Into<String>) -> Self {
        self.results_dir = dir.into();
        self
    }

    pub fn with_drafts_dir(mut self, dir: Option<String>) -> Self {
        self.drafts_dir = dir;
        self
    }

    /// Path of the final artifact, relative to the working directory
    pub fn artifact_path(&self) -> String {
        join(&self.results_dir, &self.artifact_file)
    }

    /// Path of an intermediate draft for `task`, if drafts are enabled
    pub fn draft_path(&self, task: &str) -> Option<String> {
        self.drafts_dir
            .as_deref()
            .map(|dir| join(dir, &format!("{}.md", task)))
    }

    /// Candidate input paths for a file name typed without extension
    pub fn input_candidates(&self, name: &str) -> Vec<String> {
        let file = format!("{}.{}", name.trim(), self.input_extension);
        self.input_dirs.iter().map(|dir| join(dir, &file)).collect()
    }

    pub fn input_prompt(&self) -> String {
        format!(
            "Enter the .{} file name (without extension): ",
            self.input_extension
        )
    }
}

fn join(dir: &str, file: &str) -> String {
    let dir = dir.trim_end_matches('/');
    if dir.is_empty() {
        file.to_string()
    } else {
        format!("{}/{}", dir, file)
    }
}
