//! Optional text-to-speech for resolved answers.
//!
//! This module provides:
//! * [`SpeechSynthesizer`]: async trait implemented by all backends.
//! * [`GoogleTtsSynthesizer`]: Google Translate TTS backend (MP3 files).
//! * [`NoopSynthesizer`]: always unavailable; used when speech is off.
//! * [`BestEffortSynthesizer`]: timeout + error swallowing wrapper.
//! * [`AudioRef`]: playable reference handed to the presentation layer.
//! * [`SpeechError`]: error variants for synthesis.
//!
//! The backend is chosen once, by [`from_config`]; call sites only ever see
//! a [`BestEffortSynthesizer`].

pub mod chunk;
pub mod fallback;
pub mod synthesizer;

use std::sync::Arc;

use crate::config::SpeechConfig;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use chunk::{split_for_tts, MAX_CHUNK_CHARS};
pub use fallback::{BestEffortSynthesizer, NoopSynthesizer};
pub use synthesizer::{AudioRef, GoogleTtsSynthesizer, SpeechError, SpeechSynthesizer};

/// Select the synthesizer described by `config`.
pub fn from_config(config: &SpeechConfig) -> BestEffortSynthesizer {
    let timeout = config.timeout();

    let inner: Arc<dyn SpeechSynthesizer> = if config.is_active() {
        log::info!(
            "speech: using Google Translate TTS (language={}, timeout={}s)",
            config.language,
            timeout.as_secs()
        );
        Arc::new(GoogleTtsSynthesizer::from_config(config))
    } else {
        log::info!("speech: disabled, answers will be text only");
        Arc::new(NoopSynthesizer)
    };

    BestEffortSynthesizer::new(inner, timeout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SpeechProvider;
    use std::time::Duration;

    #[tokio::test]
    async fn disabled_config_never_produces_audio() {
        let config = SpeechConfig {
            provider: SpeechProvider::Disabled,
            ..SpeechConfig::default()
        };
        let synth = from_config(&config);
        assert!(synth.synthesize("Admissions open in June.").await.is_none());
    }

    #[test]
    fn timeout_follows_config() {
        let config = SpeechConfig {
            timeout_secs: 7,
            ..SpeechConfig::default()
        };
        assert_eq!(from_config(&config).timeout(), Duration::from_secs(7));
    }

    #[test]
    fn zero_timeout_is_clamped() {
        let config = SpeechConfig {
            enabled: false,
            timeout_secs: 0,
            ..SpeechConfig::default()
        };
        assert_eq!(from_config(&config).timeout(), Duration::from_secs(1));
    }
}
