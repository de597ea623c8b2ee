use crate::ui;
use std::time::{Duration, Instant};

/// Reports a fixed sequence of steps for a multi-step command
pub struct ProgressTracker {
    operation_name: String,
    start_time: Instant,
    steps: Vec<String>,
    current_step: usize,
}

impl ProgressTracker {
    pub fn new(operation_name: &str) -> Self {
        ui::section_header(operation_name);
        Self {
            operation_name: operation_name.to_string(),
            start_time: Instant::now(),
            steps: Vec::new(),
            current_step: 0,
        }
    }

    pub fn with_steps<S: Into<String>>(mut self, steps: impl IntoIterator<Item = S>) -> Self {
        self.steps = steps.into_iter().map(Into::into).collect();
        self
    }

    fn label(&self) -> Option<String> {
        self.steps.get(self.current_step).map(|step| {
            format!("[{}/{}] {step}", self.current_step + 1, self.steps.len())
        })
    }

    pub fn start_step(&self) {
        if let Some(label) = self.label() {
            ui::status_message(&label);
        }
    }

    pub fn complete_step(&mut self) {
        if let Some(label) = self.label() {
            ui::success_message(&label);
            self.current_step += 1;
        }
    }

    pub fn skip_step(&mut self, reason: &str) {
        if let Some(label) = self.label() {
            ui::warning_message(&format!("Skipped: {label} ({reason})"));
            self.current_step += 1;
        }
    }

    pub fn complete(&self) {
        ui::success_message(&format!(
            "{} completed in {}",
            self.operation_name,
            format_duration(self.start_time.elapsed())
        ));
    }
}

fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();
    let seconds = duration.as_secs();
    if seconds == 0 {
        format!("{millis} ms")
    } else if seconds < 60 {
        format!("{seconds}.{:01} seconds", duration.subsec_millis() / 100)
    } else {
        format!("{} minutes {} seconds", seconds / 60, seconds % 60)
    }
}
