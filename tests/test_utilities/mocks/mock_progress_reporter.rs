use depend_info::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ProgressReporter for testing that captures messages
///
/// Clones share the same buffer, so a test can keep one handle while the
/// use case owns another.
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    pub messages: Arc<Mutex<Vec<String>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.get_messages()
            .into_iter()
            .filter(|m| m.starts_with("Error: "))
            .collect()
    }

    fn push(&self, message: String) {
        self.messages.lock().unwrap().push(message);
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.push(message.to_string());
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let msg = match message {
            Some(m) => format!("Progress: {}/{} - {}", current, total, m),
            None => format!("Progress: {}/{}", current, total),
        };
        self.push(msg);
    }

    fn report_error(&self, message: &str) {
        self.push(format!("Error: {}", message));
    }

    fn report_completion(&self, message: &str) {
        self.push(format!("Completed: {}", message));
    }
}
