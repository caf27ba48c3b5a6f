//! Host-supplied navigation primitive.

use parking_lot::Mutex;

/// Routing layer of the host.
pub trait Navigator: Send + Sync {
    /// Follow an item link.
    fn navigate(&self, path: &str);

    /// Warm the cache for full-resolution sources. Optional.
    fn preload(&self, _sources: &[String]) {}
}

/// Navigator that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate(&self, _path: &str) {}
}

/// Navigator that remembers what was requested.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
    preloaded: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().clone()
    }

    pub fn last_visited(&self) -> Option<String> {
        self.visited.lock().last().cloned()
    }

    pub fn preloaded(&self) -> Vec<String> {
        self.preloaded.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        tracing::info!(path, "Navigate");
        self.visited.lock().push(path.to_string());
    }

    fn preload(&self, sources: &[String]) {
        tracing::debug!(count = sources.len(), "Preload requested");
        self.preloaded.lock().extend(sources.iter().cloned());
    }
}
