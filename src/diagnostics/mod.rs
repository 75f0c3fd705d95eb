//! Internal failure reporting.
//!
//! The core never writes to the console. Causes that are hidden from callers
//! (transport errors, corrupted favorites, failed writes) are handed to a
//! [`DiagnosticSink`] instead.

use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticEvent {
    FetchFailed { endpoint: String, cause: String },
    FavoritesCorrupted { cause: String },
    StorageReadFailed { cause: String },
    StorageWriteFailed { cause: String },
}

pub trait DiagnosticSink: Send + Sync {
    fn record(&self, event: DiagnosticEvent);
}

/// Default sink: forwards events to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, event: DiagnosticEvent) {
        match event {
            DiagnosticEvent::FetchFailed { endpoint, cause } => {
                tracing::error!(%endpoint, %cause, "headline request failed");
            }
            DiagnosticEvent::FavoritesCorrupted { cause } => {
                tracing::warn!(%cause, "stored favorites could not be read, treating as empty");
            }
            DiagnosticEvent::StorageReadFailed { cause } => {
                tracing::warn!(%cause, "favorites could not be read");
            }
            DiagnosticEvent::StorageWriteFailed { cause } => {
                tracing::warn!(%cause, "favorites could not be written");
            }
        }
    }
}

/// Keeps every event in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    events: Arc<Mutex<Vec<DiagnosticEvent>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl DiagnosticSink for MemorySink {
    fn record(&self, event: DiagnosticEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_clones_share_events() {
        let sink = MemorySink::new();
        let handle = sink.clone();

        handle.record(DiagnosticEvent::FavoritesCorrupted {
            cause: "expected value".to_string(),
        });

        assert_eq!(
            sink.events(),
            vec![DiagnosticEvent::FavoritesCorrupted {
                cause: "expected value".to_string()
            }]
        );
    }
}
