//! Background scan orchestration.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use repofind_core::{ConfigError, FindError, FindOptions, ScanStats};
use tokio::sync::mpsc;
use tracing::{debug, info, trace};

use crate::queue::PathQueue;
use crate::scanner::{DirectoryScanner, NativeScanner};
use crate::sink::ProgressSink;
use crate::throttle::Throttle;

type BoxedSink = Box<dyn ProgressSink + Send>;

/// Find every git repository below `root`.
///
/// `on_progress` receives batches of new `.git` paths as the scan goes,
/// at most once per `throttleTimeoutMS` (plus one final batch). The returned
/// list holds every discovered path in discovery order; it equals the
/// concatenation of all batches.
///
/// Configuration problems are returned before any filesystem access. Once
/// started, a scan always completes, possibly with an empty list.
pub async fn find_git_repos<P, S>(
    root: P,
    on_progress: S,
    options: Option<FindOptions>,
) -> Result<Vec<PathBuf>, FindError>
where
    P: AsRef<Path>,
    S: ProgressSink + Send + 'static,
{
    let task = ScanTask::new(root, options.unwrap_or_default(), on_progress)?;
    let report = task.run().await?;
    Ok(report.repositories)
}

/// Outcome of a completed scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    /// Every `.git` directory found, in discovery order.
    pub repositories: Vec<PathBuf>,
    /// Traversal counters.
    pub stats: ScanStats,
}

/// A validated scan, ready to run.
///
/// Running consumes the task: the scanner walks the tree on a blocking
/// thread while the awaiting context delivers progress batches to the sink.
/// The shared queue and the flush channel live exactly as long as the run.
pub struct ScanTask {
    root: PathBuf,
    options: FindOptions,
    sink: BoxedSink,
    scanner: Arc<dyn DirectoryScanner>,
}

impl std::fmt::Debug for ScanTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScanTask")
            .field("root", &self.root)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl ScanTask {
    /// Validate the arguments and create a task using the native scanner.
    pub fn new<P, S>(root: P, options: FindOptions, sink: S) -> Result<Self, ConfigError>
    where
        P: AsRef<Path>,
        S: ProgressSink + Send + 'static,
    {
        Self::builder()
            .root(root.as_ref())
            .options(options)
            .on_progress(sink)
            .build()
    }

    /// Create a new task builder.
    pub fn builder() -> ScanTaskBuilder {
        ScanTaskBuilder::default()
    }

    /// The root this task will scan.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The options this task was created with.
    pub fn options(&self) -> &FindOptions {
        &self.options
    }

    /// Run the scan to completion.
    pub async fn run(self) -> Result<ScanReport, FindError> {
        let Self {
            root,
            options,
            mut sink,
            scanner,
        } = self;

        info!(
            root = %root.display(),
            throttle_ms = options.throttle_timeout_ms,
            "scan started"
        );

        let queue = Arc::new(PathQueue::new());
        let (flush_tx, mut flush_rx) = mpsc::unbounded_channel::<()>();

        let background_queue = Arc::clone(&queue);
        let interval = options.throttle_interval();
        let background = tokio::task::spawn_blocking(move || {
            let started = Instant::now();
            let mut throttle = Throttle::new(interval);
            let mut repositories = Vec::new();

            let mut stats = scanner.scan(&root, &mut |found: PathBuf| {
                repositories.push(found.clone());
                background_queue.push(found);
                if throttle.should_flush(Instant::now()) {
                    trace!(queued = background_queue.size(), "flush requested");
                    // Fails only when the awaiting side is gone.
                    let _ = flush_tx.send(());
                }
            });
            stats.elapsed = started.elapsed();

            ScanReport {
                repositories,
                stats,
            }
        });

        // The channel closes when the background closure returns.
        while flush_rx.recv().await.is_some() {
            deliver(&queue, sink.as_mut());
        }

        let report = background.await.map_err(|err| FindError::Background {
            message: err.to_string(),
        })?;
        deliver(&queue, sink.as_mut());

        log_completion(&report.stats);
        Ok(report)
    }
}

/// Drain the queue into the sink, skipping empty batches.
fn deliver(queue: &PathQueue, sink: &mut (dyn ProgressSink + Send)) {
    let batch = queue.drain();
    if batch.is_empty() {
        return;
    }
    trace!(count = batch.len(), "delivering batch");
    sink.on_progress(batch);
}

fn log_completion(stats: &ScanStats) {
    info!(
        repos = stats.repos_found,
        dirs = stats.dirs_scanned,
        elapsed_ms = stats.elapsed.as_millis() as u64,
        "scan complete"
    );
    if stats.dirs_unreadable > 0 || stats.entries_unclassified > 0 {
        debug!(
            unreadable = stats.dirs_unreadable,
            unclassified = stats.entries_unclassified,
            "skipped entries during scan"
        );
    }
}

/// Builder for [`ScanTask`].
///
/// Root and progress sink are required; options default to no throttling.
pub struct ScanTaskBuilder {
    root: Option<PathBuf>,
    options: FindOptions,
    sink: Option<BoxedSink>,
    scanner: Arc<dyn DirectoryScanner>,
}

impl Default for ScanTaskBuilder {
    fn default() -> Self {
        Self {
            root: None,
            options: FindOptions::default(),
            sink: None,
            scanner: Arc::new(NativeScanner::new()),
        }
    }
}

impl ScanTaskBuilder {
    /// Directory to start from.
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Scan options.
    pub fn options(mut self, options: FindOptions) -> Self {
        self.options = options;
        self
    }

    /// Where progress batches go.
    pub fn on_progress<S>(mut self, sink: S) -> Self
    where
        S: ProgressSink + Send + 'static,
    {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Replace the directory walker.
    pub fn scanner<D>(mut self, scanner: D) -> Self
    where
        D: DirectoryScanner + 'static,
    {
        self.scanner = Arc::new(scanner);
        self
    }

    /// Validate and build the task.
    pub fn build(self) -> Result<ScanTask, ConfigError> {
        let root = match self.root {
            Some(root) if !root.as_os_str().is_empty() => root,
            _ => return Err(ConfigError::EmptyRoot),
        };
        let sink = self.sink.ok_or(ConfigError::MissingProgressCallback)?;
        self.options.validate()?;

        Ok(ScanTask {
            root,
            options: self.options,
            sink,
            scanner: self.scanner,
        })
    }
}
