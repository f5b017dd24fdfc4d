//! Best-effort synthesis: never fails, never blocks past its timeout.
//!
//! [`BestEffortSynthesizer`] wraps any [`SpeechSynthesizer`] and turns every
//! failure (`Unavailable`, `Request`, `Timeout`, `Failed`, `Io`) as well as
//! an expired deadline into `None`, so the interaction is still logged
//! without audio.  [`NoopSynthesizer`] is the implementation selected when
//! speech is disabled.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::speech::synthesizer::{AudioRef, SpeechError, SpeechSynthesizer};

// ---------------------------------------------------------------------------
// NoopSynthesizer
// ---------------------------------------------------------------------------

/// Synthesizer used when no TTS capability is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSynthesizer;

#[async_trait]
impl SpeechSynthesizer for NoopSynthesizer {
    async fn synthesize(&self, _text: &str) -> Result<AudioRef, SpeechError> {
        Err(SpeechError::Unavailable)
    }
}

// ---------------------------------------------------------------------------
// BestEffortSynthesizer
// ---------------------------------------------------------------------------

/// A wrapper around any shared [`SpeechSynthesizer`] that returns
/// `Option<AudioRef>` instead of an error.
///
/// Cheap to clone; every session holds its own clone.
///
/// ```rust
/// use std::sync::Arc;
/// use std::time::Duration;
/// use faq_responder::speech::{BestEffortSynthesizer, NoopSynthesizer};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let synth = BestEffortSynthesizer::new(Arc::new(NoopSynthesizer), Duration::from_secs(5));
/// assert!(synth.synthesize("hello").await.is_none());
/// # }
/// ```
#[derive(Clone)]
pub struct BestEffortSynthesizer {
    inner: Arc<dyn SpeechSynthesizer>,
    timeout: Duration,
}

impl BestEffortSynthesizer {
    pub fn new(inner: Arc<dyn SpeechSynthesizer>, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    /// A wrapper that never produces audio.
    pub fn disabled() -> Self {
        Self::new(Arc::new(NoopSynthesizer), Duration::from_secs(1))
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Attempt synthesis; return `None` on any error or when `timeout`
    /// elapses.  The pending request is dropped on timeout.
    pub async fn synthesize(&self, text: &str) -> Option<AudioRef> {
        if text.trim().is_empty() {
            return None;
        }

        match tokio::time::timeout(self.timeout, self.inner.synthesize(text)).await {
            Ok(Ok(audio)) => Some(audio),
            Ok(Err(SpeechError::Unavailable)) => {
                log::debug!("speech: no synthesizer configured, skipping audio");
                None
            }
            Ok(Err(e)) => {
                log::warn!("speech: synthesis failed, continuing without audio: {e}");
                None
            }
            Err(_elapsed) => {
                log::warn!(
                    "speech: synthesis exceeded {:?}, continuing without audio",
                    self.timeout
                );
                None
            }
        }
    }
}

impl std::fmt::Debug for BestEffortSynthesizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BestEffortSynthesizer")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
