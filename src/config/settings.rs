//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files and shared across threads.
//! Every section is `#[serde(default)]`, so a `settings.toml` only needs the
//! keys it overrides.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;
use crate::knowledge::resolver::{NO_MATCH_ANSWER, UNAVAILABLE_ANSWER};

// ---------------------------------------------------------------------------
// KnowledgeConfig
// ---------------------------------------------------------------------------

/// Where the FAQ records are loaded from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeConfig {
    /// Path to the JSON knowledge source.  `None` means
    /// [`AppPaths::knowledge_file`].
    pub path: Option<PathBuf>,
}

impl KnowledgeConfig {
    /// The configured path, or the platform default.
    pub fn resolved_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| AppPaths::new().knowledge_file)
    }
}

// ---------------------------------------------------------------------------
// ResponderConfig
// ---------------------------------------------------------------------------

/// The two fixed fallback answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponderConfig {
    /// Returned when the knowledge base is loaded but nothing matched.
    pub no_match_answer: String,
    /// Returned when the knowledge base is empty (load failed).
    pub unavailable_answer: String,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            no_match_answer: NO_MATCH_ANSWER.into(),
            unavailable_answer: UNAVAILABLE_ANSWER.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// SpeechProvider
// ---------------------------------------------------------------------------

/// Selects which text-to-speech backend renders answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SpeechProvider {
    /// The Google Translate TTS endpoint (MP3 output, no authentication).
    GoogleTranslate,
    /// Speech disabled: text-only answers.
    Disabled,
}

impl Default for SpeechProvider {
    fn default() -> Self {
        Self::GoogleTranslate
    }
}

// ---------------------------------------------------------------------------
// SpeechConfig
// ---------------------------------------------------------------------------

/// Settings for the optional speech synthesis step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// Whether answers are rendered to audio at all.
    pub enabled: bool,
    /// Which backend to use.
    pub provider: SpeechProvider,
    /// Base URL of the TTS service (no trailing slash).
    pub base_url: String,
    /// Voice language as an ISO-639-1 code.
    pub language: String,
    /// Maximum seconds to wait for a complete synthesis before giving up.
    pub timeout_secs: u64,
    /// Directory for generated MP3 files.  `None` means
    /// [`AppPaths::audio_dir`].
    pub output_dir: Option<PathBuf>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            provider: SpeechProvider::default(),
            base_url: "https://translate.google.com".into(),
            language: "en".into(),
            timeout_secs: 10,
            output_dir: None,
        }
    }
}

impl SpeechConfig {
    /// `true` when a real synthesizer should be constructed.
    pub fn is_active(&self) -> bool {
        self.enabled && self.provider != SpeechProvider::Disabled
    }

    /// Synthesis time budget.  Never shorter than one second, so a zero in
    /// the settings file cannot silently disable the network backend.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    /// The configured output directory, or the platform default.
    pub fn resolved_output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| AppPaths::new().audio_dir)
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// ```rust,no_run
/// use faq_responder::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
/// # let _ = config;
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Knowledge source location.
    pub knowledge: KnowledgeConfig,
    /// Fallback answers.
    pub responder: ResponderConfig,
    /// Text-to-speech settings.
    pub speech: SpeechConfig,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
