//! Progress reporting for crew execution

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use testcrew_application::ProgressNotifier;
use testcrew_domain::{AgentInstance, TaskInstance};

/// Reports progress during a crew run with a task bar and spinner
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn crew_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.bar.lock()
            && let Some(pb) = guard.as_ref()
        {
            f(pb);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_crew_start(&self, total_tasks: usize) {
        let pb = ProgressBar::new(total_tasks as u64);
        pb.set_style(Self::crew_style());
        pb.set_prefix("Crew");
        pb.set_message("Starting...");
        pb.enable_steady_tick(Duration::from_millis(120));

        if let Ok(mut guard) = self.bar.lock() {
            *guard = Some(pb);
        }
    }

    fn on_task_start(&self, _position: usize, task: &TaskInstance, agent: &AgentInstance) {
        self.with_bar(|pb| pb.set_message(format!("{} ({})", agent.role, task.id)));
    }

    fn on_task_complete(&self, _position: usize, task: &TaskInstance, success: bool) {
        self.with_bar(|pb| {
            if success {
                pb.println(format!("  {} {}", "v".green(), task.id));
                pb.inc(1);
            } else {
                pb.println(format!("  {} {} (failed)", "x".red(), task.id));
            }
        });
    }

    fn on_crew_complete(&self) {
        if let Ok(mut guard) = self.bar.lock()
            && let Some(pb) = guard.take()
        {
            pb.finish_with_message(format!("{}", "Crew complete!".green()));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_crew_start(&self, total_tasks: usize) {
        println!("{} {} ({} tasks)", "->".cyan(), "Crew".bold(), total_tasks);
    }

    fn on_task_start(&self, position: usize, task: &TaskInstance, agent: &AgentInstance) {
        println!("  [{}] {} ({})", position + 1, agent.role, task.id);
    }

    fn on_task_complete(&self, _position: usize, task: &TaskInstance, success: bool) {
        if success {
            println!("  {} {}", "v".green(), task.id);
        } else {
            println!("  {} {} (failed)", "x".red(), task.id);
        }
    }

    fn on_crew_complete(&self) {
        println!();
    }
}
