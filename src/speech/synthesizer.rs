//! Core `SpeechSynthesizer` trait and the Google Translate TTS backend.
//!
//! `GoogleTtsSynthesizer` fetches MP3 audio for each text chunk from the
//! `translate_tts` endpoint, concatenates the frames and writes them to a
//! persisted temporary `.mp3` file.  Connection details come from
//! [`SpeechConfig`].

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

use crate::config::SpeechConfig;
use crate::speech::chunk::{split_for_tts, MAX_CHUNK_CHARS};

// ---------------------------------------------------------------------------
// SpeechError
// ---------------------------------------------------------------------------

/// Errors that can occur during speech synthesis.
///
/// None of these ever reach the end user; [`BestEffortSynthesizer`] turns
/// them into "no audio".
///
/// [`BestEffortSynthesizer`]: crate::speech::BestEffortSynthesizer
#[derive(Debug, Error)]
pub enum SpeechError {
    /// No synthesis capability is configured.
    #[error("speech synthesis is unavailable")]
    Unavailable,

    /// The text to speak was empty or whitespace only.
    #[error("nothing to synthesise")]
    EmptyText,

    /// HTTP transport, connection or status error.
    #[error("TTS request failed: {0}")]
    Request(String),

    /// The synthesis did not complete within the configured timeout.
    #[error("TTS request timed out")]
    Timeout,

    /// The service answered but produced no usable audio.
    #[error("speech synthesis failed: {0}")]
    Failed(String),

    /// The audio artifact could not be written.
    #[error("failed to write audio file: {0}")]
    Io(String),
}

impl From<reqwest::Error> for SpeechError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            SpeechError::Timeout
        } else {
            SpeechError::Request(e.to_string())
        }
    }
}

impl From<std::io::Error> for SpeechError {
    fn from(e: std::io::Error) -> Self {
        SpeechError::Io(e.to_string())
    }
}

// ---------------------------------------------------------------------------
// AudioRef
// ---------------------------------------------------------------------------

/// Opaque, playable reference to a synthesised answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioRef {
    path: PathBuf,
}

impl AudioRef {
    /// MIME type of every artifact produced by this crate.
    pub const MIME_TYPE: &'static str = "audio/mpeg";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the MP3 file on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mime_type(&self) -> &'static str {
        Self::MIME_TYPE
    }
}

// ---------------------------------------------------------------------------
// SpeechSynthesizer trait
// ---------------------------------------------------------------------------

/// Async trait for text-to-speech backends.
///
/// Implementors must be `Send + Sync` so they can be held behind an
/// `Arc<dyn SpeechSynthesizer>` and shared by every session.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str) -> Result<AudioRef, SpeechError>;
}

// ---------------------------------------------------------------------------
// GoogleTtsSynthesizer
// ---------------------------------------------------------------------------

/// Calls the Google Translate `translate_tts` endpoint (MP3, fixed voice per
/// language, no authentication).
///
/// A `synthesize` call abandoned while its file write is in flight (for
/// example by [`BestEffortSynthesizer`]'s timeout) still finishes the write;
/// the `.mp3` is left in the output directory with no [`AudioRef`] to it.
///
/// [`BestEffortSynthesizer`]: crate::speech::BestEffortSynthesizer
pub struct GoogleTtsSynthesizer {
    client: reqwest::Client,
    base_url: String,
    language: String,
    output_dir: PathBuf,
}

impl GoogleTtsSynthesizer {
    /// Build from speech config.
    ///
    /// The HTTP client carries the same clamped budget as
    /// [`SpeechConfig::timeout`]; a default client is used if the builder
    /// fails.
    pub fn from_config(config: &SpeechConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            language: config.language.clone(),
            output_dir: config.resolved_output_dir(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    async fn fetch_chunk(&self, chunk: &str, idx: usize, total: usize) -> Result<Vec<u8>, SpeechError> {
        let url = format!("{}/translate_tts", self.base_url);
        let idx = idx.to_string();
        let total = total.to_string();
        let textlen = chunk.chars().count().to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", self.language.as_str()),
                ("q", chunk),
                ("idx", idx.as_str()),
                ("total", total.as_str()),
                ("textlen", textlen.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(SpeechError::Failed("service returned no audio".into()));
        }
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleTtsSynthesizer {
    async fn synthesize(&self, text: &str) -> Result<AudioRef, SpeechError> {
        let chunks = split_for_tts(text, MAX_CHUNK_CHARS);
        if chunks.is_empty() {
            return Err(SpeechError::EmptyText);
        }

        let mut audio = Vec::new();
        for (idx, chunk) in chunks.iter().enumerate() {
            let bytes = self.fetch_chunk(chunk, idx, chunks.len()).await?;
            audio.extend_from_slice(&bytes);
        }

        log::debug!(
            "speech: synthesised {} chunk(s), {} bytes",
            chunks.len(),
            audio.len()
        );

        let dir = self.output_dir.clone();
        let path = tokio::task::spawn_blocking(move || write_mp3(&dir, &audio))
            .await
            .map_err(|e| SpeechError::Failed(e.to_string()))??;

        Ok(AudioRef::new(path))
    }
}

/// Write `audio` to a fresh, persisted `.mp3` file inside `dir`.
pub(crate) fn write_mp3(dir: &Path, audio: &[u8]) -> Result<PathBuf, SpeechError> {
    std::fs::create_dir_all(dir)?;

    let mut file = tempfile::Builder::new()
        .prefix("answer-")
        .suffix(".mp3")
        .tempfile_in(dir)?;
    file.write_all(audio)?;
    file.flush()?;

    let (_file, path) = file.keep().map_err(|e| SpeechError::Io(e.to_string()))?;
    Ok(path)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
