//! Fakes shared by the use case tests.

use crate::ports::artifact_store::{ArtifactError, ArtifactStore};
use crate::ports::execution_logger::{ExecutionEvent, ExecutionLogger};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use testcrew_domain::{Message, ModelHandle};

/// Gateway that answers from a script and records every conversation
pub struct ScriptedGateway {
    replies: Mutex<Vec<String>>,
    fail_at: Option<usize>,
    calls: Mutex<Vec<Vec<Message>>>,
    handles: Mutex<Vec<ModelHandle>>,
}

impl ScriptedGateway {
    pub fn new(replies: Vec<&str>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().rev().map(String::from).collect()),
            fail_at: None,
            calls: Mutex::new(Vec::new()),
            handles: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_at(call: usize, replies: Vec<&str>) -> Self {
        Self {
            fail_at: Some(call),
            ..Self::new(replies)
        }
    }

    pub fn calls(&self) -> Vec<Vec<Message>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn handles(&self) -> Vec<ModelHandle> {
        self.handles.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    async fn complete(
        &self,
        llm: &ModelHandle,
        messages: &[Message],
    ) -> Result<String, GatewayError> {
        let index = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(messages.to_vec());
            calls.len() - 1
        };
        self.handles.lock().unwrap().push(llm.clone());

        if self.fail_at == Some(index) {
            return Err(GatewayError::ProviderStatus {
                status: 429,
                body: "rate limited".to_string(),
            });
        }
        Ok(self
            .replies
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| format!("reply {}", index)))
    }
}

/// In-memory artifact store
#[derive(Default)]
pub struct MemoryArtifacts {
    files: Mutex<HashMap<String, String>>,
}

impl MemoryArtifacts {
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_string(), content.to_string());
        self
    }

    pub fn get(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }
}

#[async_trait]
impl ArtifactStore for MemoryArtifacts {
    async fn read(&self, path: &str) -> Result<Option<String>, ArtifactError> {
        Ok(self.get(path))
    }

    async fn write(&self, path: &str, content: &str) -> Result<(), ArtifactError> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_string(), content.to_string());
        Ok(())
    }
}

/// Logger that keeps events in memory
#[derive(Default)]
pub struct RecordingLogger {
    events: Mutex<Vec<&'static str>>,
}

impl RecordingLogger {
    pub fn event_types(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().clone()
    }
}

impl ExecutionLogger for RecordingLogger {
    fn log(&self, event: ExecutionEvent) {
        self.events.lock().unwrap().push(event.event_type);
    }
}
