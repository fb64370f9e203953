//! Best-effort embedding-model probe.
//!
//! The surrounding application may supply an external text-embedding model.
//! The scoring pipeline fires exactly one embed attempt per invocation on a
//! background thread and never looks at the outcome; the result lands in a
//! channel nobody is required to read. Failure (missing hardware, model not
//! loaded, anything) is absorbed and never blocks or alters the scoring
//! result. There is no retry.

use std::fmt;
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

/// Why an embed attempt failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbedError {
    /// The model or its backing device is not available.
    Unavailable(String),
    /// The model ran but could not produce an embedding.
    Failed(String),
}

impl fmt::Display for EmbedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmbedError::Unavailable(reason) => write!(f, "embedding model unavailable: {reason}"),
            EmbedError::Failed(reason) => write!(f, "embedding failed: {reason}"),
        }
    }
}

impl std::error::Error for EmbedError {}

/// Host-supplied embedding model.
///
/// Implementations must be safe to call from a background thread. An
/// implementation that routinely fails is fine; the probe exists to be
/// attempted, not depended on.
pub trait EmbeddingModel: Send + Sync {
    /// Embed `text` into a vector.
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedError>;
}

/// Fire-and-forget wrapper around an [`EmbeddingModel`].
#[derive(Clone)]
pub struct EmbeddingProbe {
    model: Arc<dyn EmbeddingModel>,
}

impl fmt::Debug for EmbeddingProbe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbeddingProbe").finish_non_exhaustive()
    }
}

impl EmbeddingProbe {
    /// Wrap a host-supplied model.
    pub fn new(model: Arc<dyn EmbeddingModel>) -> Self {
        Self { model }
    }

    /// Attempt one embed of `text` on a background thread.
    ///
    /// The returned handle may be dropped immediately; the attempt still runs
    /// to completion and its outcome is discarded. Errors are logged when the
    /// `tracing` feature is enabled and swallowed otherwise.
    pub fn fire(&self, text: &str) -> ProbeHandle {
        let (tx, rx) = mpsc::channel();
        let model = Arc::clone(&self.model);
        let text = text.to_string();

        thread::spawn(move || {
            let outcome = model.embed(&text);
            #[cfg(feature = "tracing")]
            if let Err(err) = &outcome {
                tracing::warn!(error = %err, "embedding probe failed");
            }
            // The receiver is usually gone already; that is expected.
            let _ = tx.send(outcome);
        });

        ProbeHandle { rx }
    }
}

/// Handle to a fired probe. Exists so a host that does care about the
/// embedding can poll for it; dropping it is the normal case.
#[derive(Debug)]
pub struct ProbeHandle {
    rx: mpsc::Receiver<Result<Vec<f32>, EmbedError>>,
}

impl ProbeHandle {
    /// Take the outcome if the attempt has finished, without blocking.
    pub fn try_outcome(&self) -> Option<Result<Vec<f32>, EmbedError>> {
        self.rx.try_recv().ok()
    }

    /// Block until the attempt finishes and take its outcome. Returns `None`
    /// if the probe thread disappeared.
    pub fn wait(self) -> Option<Result<Vec<f32>, EmbedError>> {
        self.rx.recv().ok()
    }
}
