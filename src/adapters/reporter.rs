use crate::core::{StageReport, StatusReporter};
use crate::utils::error::FileTransformError;
use std::sync::Mutex;

/// Prints stage messages to stdout and failures to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl StatusReporter for ConsoleReporter {
    fn stage(&self, report: &StageReport) {
        tracing::info!("✅ {}", report.message);
        println!("{}", report.message);
    }

    fn failure(&self, error: &FileTransformError) {
        eprintln!("{}", error.user_friendly_message());
        eprintln!("💡 Suggestion: {}", error.recovery_suggestion());
    }
}

/// Keeps every message in memory, in order.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    messages: Mutex<Vec<String>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }

    fn push(&self, message: String) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message);
        }
    }
}

impl StatusReporter for MemoryReporter {
    fn stage(&self, report: &StageReport) {
        self.push(report.message.clone());
    }

    fn failure(&self, error: &FileTransformError) {
        self.push(error.user_friendly_message());
    }
}
