//! Progress sinks.

use std::path::PathBuf;

use tokio::sync::mpsc;

/// Receives batches of newly discovered `.git` paths.
///
/// Called on the context that awaits the scan, never on the scanning thread,
/// and never with an empty batch.
pub trait ProgressSink {
    /// Handle one batch, in discovery order.
    fn on_progress(&mut self, batch: Vec<PathBuf>);
}

impl<F> ProgressSink for F
where
    F: FnMut(Vec<PathBuf>),
{
    fn on_progress(&mut self, batch: Vec<PathBuf>) {
        self(batch)
    }
}

/// Forwards batches into a channel, for consumers living in another task.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<Vec<PathBuf>>,
}

impl ChannelSink {
    /// Create a sink together with the receiving end.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Vec<PathBuf>>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl ProgressSink for ChannelSink {
    fn on_progress(&mut self, batch: Vec<PathBuf>) {
        // A dropped receiver just means nobody is listening any more.
        let _ = self.tx.send(batch);
    }
}
