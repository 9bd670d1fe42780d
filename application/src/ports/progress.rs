//! Progress notification port
//!
//! Defines the interface for reporting progress while a crew runs.

use testcrew_domain::{AgentInstance, TaskInstance};

/// Callback for progress updates during crew execution
///
/// Implementations live in the presentation layer.
pub trait ProgressNotifier: Send + Sync {
    /// Called once before the first task
    fn on_crew_start(&self, total_tasks: usize);

    /// Called when a task is about to be sent to its agent
    fn on_task_start(&self, position: usize, task: &TaskInstance, agent: &AgentInstance);

    /// Called when a task finishes, successfully or not
    fn on_task_complete(&self, position: usize, task: &TaskInstance, success: bool);

    /// Called after the last task
    fn on_crew_complete(&self) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_crew_start(&self, _total_tasks: usize) {}
    fn on_task_start(&self, _position: usize, _task: &TaskInstance, _agent: &AgentInstance) {}
    fn on_task_complete(&self, _position: usize, _task: &TaskInstance, _success: bool) {}
}
