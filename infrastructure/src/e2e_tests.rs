//! Pipeline runs against the real file system adapters and the shipped
//! templates, with a scripted gateway standing in for the provider.

use crate::{
    ConfigLoader, FileExecutionLogger, LocalArtifactStore, TemplateStoreError, YamlTemplateStore,
};
use async_trait::async_trait;
use std::path::Path;
use std::sync::{Arc, Mutex};
use testcrew_application::{
    GatewayError, LlmGateway, PipelineError, RunPipelineInput, RunPipelineUseCase,
};
use testcrew_domain::{
    LlmSettings, Message, ModelClientFactory, ModelHandle, PipelineKind, TemplateSet,
};

const SHIPPED_AGENTS: &str = include_str!("../../config/agents.yaml");
const SHIPPED_TASKS: &str = include_str!("../../config/tasks.yaml");

/// Answers every call with a canned document and counts the calls
#[derive(Default)]
struct CannedGateway {
    calls: Mutex<Vec<ModelHandle>>,
}

impl CannedGateway {
    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmGateway for CannedGateway {
    async fn complete(
        &self,
        llm: &ModelHandle,
        messages: &[Message],
    ) -> Result<String, GatewayError> {
        let mut calls = self.calls.lock().unwrap();
        calls.push(llm.clone());
        Ok(format!(
            "# Document {}\n\n{} prompt chars",
            calls.len(),
            messages.iter().map(|m| m.content.len()).sum::<usize>()
        ))
    }
}

fn workspace() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config");
    std::fs::create_dir_all(&config).unwrap();
    std::fs::write(config.join("agents.yaml"), SHIPPED_AGENTS).unwrap();
    std::fs::write(config.join("tasks.yaml"), SHIPPED_TASKS).unwrap();

    let features = dir.path().join("features");
    std::fs::create_dir_all(&features).unwrap();
    std::fs::write(
        features.join("login.feature"),
        "Feature: Login\n  Scenario: valid credentials\n    Given a registered user\n    When they sign in\n    Then the dashboard is shown\n",
    )
    .unwrap();
    dir
}

fn templates(root: &Path) -> Result<TemplateSet, TemplateStoreError> {
    YamlTemplateStore::new(root.join("config")).load()
}

fn pipeline(
    gateway: Arc<CannedGateway>,
    root: &Path,
) -> RunPipelineUseCase<CannedGateway> {
    let config = ConfigLoader::load_defaults();
    RunPipelineUseCase::new(
        gateway,
        Arc::new(LocalArtifactStore::new(root)),
        ModelClientFactory::new(LlmSettings::default()),
        config.crew_params().with_max_rpm(0),
    )
}

#[test]
fn test_shipped_templates_cover_every_pipeline() {
    let dir = workspace();
    let set = templates(dir.path()).unwrap();
    let uc = pipeline(Arc::new(CannedGateway::default()), dir.path());

    for kind in PipelineKind::ALL {
        let descriptor = ConfigLoader::load_defaults().descriptor(kind);
        let plan = uc
            .build_plan(&descriptor, "Feature: Login", &set)
            .unwrap_or_else(|e| panic!("{}: {}", kind, e));
        assert_eq!(plan.tasks().len(), 3);
        assert!(
            plan.tasks()[0].description.contains("Feature: Login"),
            "{}: writer description lacks the input",
            kind
        );
    }
}

#[tokio::test]
async fn test_ieee_pipeline_end_to_end() {
    let dir = workspace();
    let root = dir.path();
    let config = ConfigLoader::load_defaults();
    let descriptor = config.descriptor(PipelineKind::Ieee);
    let gateway = Arc::new(CannedGateway::default());

    let log_path = root.join(config.execution_log_path(&descriptor));
    let logger = Arc::new(FileExecutionLogger::new(&log_path).unwrap());
    let uc = pipeline(gateway.clone(), root).with_execution_log(logger);

    let input = uc.load_input(&descriptor, "login").await.unwrap();
    assert_eq!(input.path, "features/login.feature");

    let result = uc
        .execute(
            RunPipelineInput::new(descriptor, input.content),
            &templates(root).unwrap(),
        )
        .await
        .unwrap();

    assert!(!result.raw().is_empty());
    assert_eq!(gateway.call_count(), 3);

    let plan = std::fs::read_to_string(root.join("resposta/plano_teste_ieee.md")).unwrap();
    assert_eq!(plan, result.raw());
    assert!(root.join("etapas_geracao/ieee_writer_task.md").exists());
    assert!(root.join("etapas_geracao/ieee_review_task.md").exists());

    let log = std::fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("[crew_started]"));
    assert!(log.contains("[crew_completed]"));
}

#[tokio::test]
async fn test_missing_input_makes_no_calls() {
    let dir = workspace();
    let gateway = Arc::new(CannedGateway::default());
    let uc = pipeline(gateway.clone(), dir.path());
    let descriptor = ConfigLoader::load_defaults().descriptor(PipelineKind::Xunit);

    let err = uc.load_input(&descriptor, "checkout").await.unwrap_err();
    assert!(matches!(err, PipelineError::MissingInputFile { .. }));
    assert_eq!(gateway.call_count(), 0);
}
