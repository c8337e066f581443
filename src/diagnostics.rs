//! Diagnostic channel
//!
//! Write-only sink for failures the chart manager recovers from locally.
//! Nothing here is surfaced to the caller as an error.

use std::sync::{Arc, Mutex};

use crate::error::ChartError;

/// Receiver of recovered failures
pub trait DiagnosticSink {
    fn report(&self, context: &str, error: &ChartError);
}

/// Reports diagnostics as `tracing` errors
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, context: &str, error: &ChartError) {
        tracing::error!("{}: {}", context, error);
    }
}

/// Records diagnostics in memory
///
/// Clones share the same buffer, so a clone can be handed to a manager
/// and the original inspected afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages reported so far
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.messages.lock().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for MemorySink {
    fn report(&self, context: &str, error: &ChartError) {
        tracing::debug!("{}: {}", context, error);
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(format!("{}: {}", context, error));
        }
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn report(&self, context: &str, error: &ChartError) {
        (**self).report(context, error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_shared_buffer() {
        let sink = MemorySink::new();
        let handle = sink.clone();

        handle.report(
            "Error fetching chart data",
            &ChartError::Request { status: 503 },
        );

        assert_eq!(sink.len(), 1);
        assert_eq!(
            sink.messages()[0],
            "Error fetching chart data: HTTP error! status: 503"
        );
    }
}
