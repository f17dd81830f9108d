//! Background log loading
//!
//! Each load runs the backend fetch in its own tokio task and reports back
//! over a channel. Loads are numbered; only the result of the most recent
//! request is ever handed to the UI, so a slow source selected earlier can
//! never overwrite the one the user is looking at now. Superseding a load
//! aborts its task, which drops the fetch future and with it any child
//! process the backend started.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::Config;
use crate::source::{LineSource, Source};

/// Prefix of the single placeholder line published when a load fails
pub const UNAVAILABLE_PREFIX: &str = "source unavailable: ";

/// Build the placeholder line for a failed load
pub fn unavailable_line(reason: impl std::fmt::Display) -> String {
    format!("{}{}", UNAVAILABLE_PREFIX, reason)
}

/// Limits applied to every load
#[derive(Debug, Clone, Default)]
pub struct LoaderOptions {
    /// Keep only the last N lines
    pub max_lines: Option<usize>,
    /// Abandon a fetch after this long
    pub timeout: Option<Duration>,
}

impl LoaderOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_lines: config.max_lines,
            timeout: config.load_timeout_secs.map(Duration::from_secs),
        }
    }
}

/// A completed load
#[derive(Debug, Clone)]
pub struct LoadedBuffer {
    /// Request number this result belongs to
    pub generation: u64,
    /// Source that was loaded
    pub source: Source,
    /// Complete line buffer, shared so it can be swapped in without copying
    pub lines: Arc<Vec<String>>,
    /// Whether `lines` is the failure placeholder
    pub failed: bool,
}

/// Resolves sources into line buffers off the UI thread
pub struct LogLoader {
    backend: Arc<dyn LineSource>,
    options: LoaderOptions,
    generation: u64,
    pending: Option<Source>,
    task: Option<JoinHandle<()>>,
    tx: mpsc::UnboundedSender<LoadedBuffer>,
    rx: mpsc::UnboundedReceiver<LoadedBuffer>,
}

impl LogLoader {
    /// Create a loader around a line source
    pub fn new(backend: Arc<dyn LineSource>, options: LoaderOptions) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            backend,
            options,
            generation: 0,
            pending: None,
            task: None,
            tx,
            rx,
        }
    }

    /// Start loading `source`, superseding any load still in flight.
    ///
    /// Must be called from within a tokio runtime. Returns the generation
    /// number assigned to this request.
    pub fn load(&mut self, source: Source) -> u64 {
        self.generation += 1;
        let generation = self.generation;

        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!("Superseded in-flight load (now generation {})", generation);
        }

        tracing::info!("Loading {} (generation {})", source.display_name, generation);
        self.pending = Some(source.clone());

        let backend = Arc::clone(&self.backend);
        let options = self.options.clone();
        let tx = self.tx.clone();

        self.task = Some(tokio::spawn(async move {
            let (lines, failed) = fetch(backend, source.clone(), &options).await;
            // Receiver lives as long as the loader; a send error means it is gone
            let _ = tx.send(LoadedBuffer {
                generation,
                source,
                lines: Arc::new(lines),
                failed,
            });
        }));

        generation
    }

    /// Drain finished loads without blocking.
    ///
    /// Stale results are dropped; returns the current request's result if it
    /// has arrived.
    pub fn poll(&mut self) -> Option<LoadedBuffer> {
        let mut latest = None;
        while let Ok(loaded) = self.rx.try_recv() {
            if let Some(loaded) = self.accept(loaded) {
                latest = Some(loaded);
            }
        }
        latest
    }

    /// Wait for the current request's result
    pub async fn next_loaded(&mut self) -> Option<LoadedBuffer> {
        loop {
            let loaded = self.rx.recv().await?;
            if let Some(loaded) = self.accept(loaded) {
                return Some(loaded);
            }
        }
    }

    fn accept(&mut self, loaded: LoadedBuffer) -> Option<LoadedBuffer> {
        if loaded.generation != self.generation {
            tracing::debug!(
                "Discarding stale load of {} (generation {}, current {})",
                loaded.source.display_name,
                loaded.generation,
                self.generation
            );
            return None;
        }
        self.pending = None;
        self.task = None;
        Some(loaded)
    }

    /// Source currently being loaded, if any
    pub fn pending(&self) -> Option<&Source> {
        self.pending.as_ref()
    }

    /// Generation number of the most recent request
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for LogLoader {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Run the fetch, mapping every failure to the placeholder line
async fn fetch(
    backend: Arc<dyn LineSource>,
    source: Source,
    options: &LoaderOptions,
) -> (Vec<String>, bool) {
    let read = backend.fetch_lines(&source);

    let result = match options.timeout {
        Some(timeout) => match tokio::time::timeout(timeout, read).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!("Load timed out after {}s", timeout.as_secs());
                return (
                    vec![unavailable_line(format!(
                        "timed out after {}s",
                        timeout.as_secs()
                    ))],
                    true,
                );
            }
        },
        None => read.await,
    };

    match result {
        Ok(lines) => (keep_tail(lines, options.max_lines), false),
        Err(e) => {
            tracing::warn!("Load failed: {}", e);
            (vec![unavailable_line(e)], true)
        }
    }
}

/// Keep the last `max_lines` lines
fn keep_tail(mut lines: Vec<String>, max_lines: Option<usize>) -> Vec<String> {
    if let Some(max) = max_lines {
        if lines.len() > max {
            lines.drain(..lines.len() - max);
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{SourceCategory, SourceError};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory line source with optional per-source delay
    #[derive(Default)]
    struct FakeSource {
        lines: HashMap<String, Vec<String>>,
        delays: HashMap<String, Duration>,
        /// Fetches that ran to the end
        completed: AtomicUsize,
    }

    impl FakeSource {
        fn with(mut self, id: &str, lines: &[&str]) -> Self {
            self.lines
                .insert(id.to_string(), lines.iter().map(|s| s.to_string()).collect());
            self
        }

        fn slow(mut self, id: &str, delay: Duration) -> Self {
            self.delays.insert(id.to_string(), delay);
            self
        }
    }

    #[async_trait]
    impl LineSource for FakeSource {
        async fn fetch_lines(&self, source: &Source) -> Result<Vec<String>, SourceError> {
            if let Some(delay) = self.delays.get(&source.identifier) {
                tokio::time::sleep(*delay).await;
            }
            self.completed.fetch_add(1, Ordering::SeqCst);
            self.lines
                .get(&source.identifier)
                .cloned()
                .ok_or_else(|| SourceError::NotFound(format!("no such container: {}", source.identifier)))
        }
    }

    fn container(id: &str) -> Source {
        Source::new(SourceCategory::Container, id)
    }

    #[tokio::test]
    async fn test_load_publishes_lines() {
        let backend = FakeSource::default().with("a", &["one", "two"]);
        let mut loader = LogLoader::new(Arc::new(backend), LoaderOptions::default());

        let generation = loader.load(container("a"));
        assert_eq!(loader.pending().unwrap().identifier, "a");

        let loaded = loader.next_loaded().await.unwrap();
        assert_eq!(loaded.generation, generation);
        assert_eq!(loaded.source.identifier, "a");
        assert_eq!(*loaded.lines, vec!["one", "two"]);
        assert!(!loaded.failed);
        assert!(loader.pending().is_none());
    }

    #[tokio::test]
    async fn test_failed_load_publishes_placeholder() {
        let backend = FakeSource::default();
        let mut loader = LogLoader::new(Arc::new(backend), LoaderOptions::default());

        loader.load(container("ghost"));
        let loaded = loader.next_loaded().await.unwrap();
        assert!(loaded.failed);
        assert_eq!(loaded.lines.len(), 1);
        assert_eq!(
            loaded.lines[0],
            "source unavailable: no such container: ghost"
        );
    }

    #[tokio::test]
    async fn test_slow_then_fast_only_publishes_latest() {
        let backend = FakeSource::default()
            .with("slow", &["from A"])
            .with("fast", &["from B"])
            .slow("slow", Duration::from_millis(150));
        let mut loader = LogLoader::new(Arc::new(backend), LoaderOptions::default());

        loader.load(container("slow"));
        let current = loader.load(container("fast"));

        let loaded = loader.next_loaded().await.unwrap();
        assert_eq!(loaded.generation, current);
        assert_eq!(*loaded.lines, vec!["from B"]);

        // Give the superseded fetch time to finish; nothing may surface
        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(loader.poll().is_none());
    }

    #[tokio::test]
    async fn test_superseded_fetch_is_cancelled() {
        let backend = Arc::new(
            FakeSource::default()
                .with("stuck", &["late"])
                .with("b", &["now"])
                .slow("stuck", Duration::from_millis(300)),
        );
        let mut loader = LogLoader::new(backend.clone(), LoaderOptions::default());

        loader.load(container("stuck"));
        tokio::time::sleep(Duration::from_millis(20)).await;
        loader.load(container("b"));

        let loaded = loader.next_loaded().await.unwrap();
        assert_eq!(*loaded.lines, vec!["now"]);

        tokio::time::sleep(Duration::from_millis(500)).await;
        // Only "b" ran to the end
        assert_eq!(backend.completed.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_timed_out_fetch_is_cancelled() {
        let backend = Arc::new(
            FakeSource::default()
                .with("stuck", &["never"])
                .slow("stuck", Duration::from_millis(200)),
        );
        let options = LoaderOptions {
            max_lines: None,
            timeout: Some(Duration::from_millis(20)),
        };
        let mut loader = LogLoader::new(backend.clone(), options);

        loader.load(container("stuck"));
        assert!(loader.next_loaded().await.unwrap().failed);

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(backend.completed.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_stale_generation_is_discarded() {
        let backend = FakeSource::default().with("a", &["x"]).with("b", &["y"]);
        let mut loader = LogLoader::new(Arc::new(backend), LoaderOptions::default());

        loader.load(container("a"));
        loader.load(container("b"));

        // A result tagged with the superseded generation arrives late
        loader
            .tx
            .send(LoadedBuffer {
                generation: 1,
                source: container("a"),
                lines: Arc::new(vec!["stale".to_string()]),
                failed: false,
            })
            .unwrap();

        let loaded = loader.next_loaded().await.unwrap();
        assert_eq!(loaded.generation, 2);
        assert_eq!(*loaded.lines, vec!["y"]);
    }

    #[tokio::test]
    async fn test_poll_without_loads_is_empty() {
        let mut loader = LogLoader::new(Arc::new(FakeSource::default()), LoaderOptions::default());
        assert!(loader.poll().is_none());
        assert_eq!(loader.generation(), 0);
    }

    #[tokio::test]
    async fn test_timeout_publishes_placeholder() {
        let backend = FakeSource::default()
            .with("stuck", &["never"])
            .slow("stuck", Duration::from_millis(500));
        let options = LoaderOptions {
            max_lines: None,
            timeout: Some(Duration::from_millis(50)),
        };
        let mut loader = LogLoader::new(Arc::new(backend), options);

        loader.load(container("stuck"));
        let loaded = loader.next_loaded().await.unwrap();
        assert!(loaded.failed);
        assert!(loaded.lines[0].starts_with(UNAVAILABLE_PREFIX));
        assert!(loaded.lines[0].contains("timed out"));
    }

    #[tokio::test]
    async fn test_max_lines_keeps_tail() {
        let backend = FakeSource::default().with("a", &["1", "2", "3", "4"]);
        let options = LoaderOptions {
            max_lines: Some(2),
            timeout: None,
        };
        let mut loader = LogLoader::new(Arc::new(backend), options);

        loader.load(container("a"));
        let loaded = loader.next_loaded().await.unwrap();
        assert_eq!(*loaded.lines, vec!["3", "4"]);
    }

    #[test]
    fn test_keep_tail() {
        let lines: Vec<String> = (0..5).map(|i| i.to_string()).collect();
        assert_eq!(keep_tail(lines.clone(), None).len(), 5);
        assert_eq!(keep_tail(lines.clone(), Some(10)).len(), 5);
        assert_eq!(keep_tail(lines, Some(2)), vec!["3", "4"]);
    }
}
