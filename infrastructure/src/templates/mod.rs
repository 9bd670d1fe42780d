//! Template loading: agent and task definitions from YAML.

mod yaml_store;

pub use yaml_store::{
    AGENTS_FILE, OUTPUTS_FILE, TASKS_FILE, TemplateStoreError, YamlTemplateStore,
};
