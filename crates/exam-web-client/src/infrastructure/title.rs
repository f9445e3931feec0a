//! [`TitleSink`] implementations for hosts without a browser document.

use std::sync::Mutex;

use exam_web_core::TitleSink;
use tracing::info;

/// Logs every title change at `info` level.  Used by the CLI.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingTitleSink;

impl TitleSink for TracingTitleSink {
    fn set_title(&self, title: &str) {
        info!(title, "document title updated");
    }
}

/// Keeps the most recent title in memory.
#[derive(Debug, Default)]
pub struct MemoryTitleSink {
    current: Mutex<Option<String>>,
}

impl MemoryTitleSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last title written, if any.
    pub fn current(&self) -> Option<String> {
        self.current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl TitleSink for MemoryTitleSink {
    fn set_title(&self, title: &str) {
        let mut current = self
            .current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *current = Some(title.to_string());
    }
}
