use deplister::prelude::*;
use std::sync::{Arc, Mutex};

/// A single call made on the reporter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Info(String),
    Stage {
        current: usize,
        total: usize,
        label: Option<String>,
    },
    Warning(String),
    Done(String),
}

impl ProgressEvent {
    /// Renders the event the way assertions search for it
    fn render(&self) -> String {
        match self {
            ProgressEvent::Info(message) => message.clone(),
            ProgressEvent::Stage {
                current,
                total,
                label: Some(label),
            } => format!("Progress: {}/{} - {}", current, total, label),
            ProgressEvent::Stage { current, total, .. } => {
                format!("Progress: {}/{}", current, total)
            }
            ProgressEvent::Warning(message) => format!("Error: {}", message),
            ProgressEvent::Done(message) => format!("Completed: {}", message),
        }
    }
}

/// Mock ProgressReporter recording every event; clones share the log
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    events: Arc<Mutex<Vec<ProgressEvent>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.events().iter().map(ProgressEvent::render).collect()
    }

    pub fn has_message_containing(&self, needle: &str) -> bool {
        self.get_messages().iter().any(|m| m.contains(needle))
    }

    fn push(&self, event: ProgressEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.push(ProgressEvent::Info(message.to_string()));
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        self.push(ProgressEvent::Stage {
            current,
            total,
            label: message.map(str::to_string),
        });
    }

    fn report_error(&self, message: &str) {
        self.push(ProgressEvent::Warning(message.to_string()));
    }

    fn report_completion(&self, message: &str) {
        self.push(ProgressEvent::Done(message.to_string()));
    }
}
