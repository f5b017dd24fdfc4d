//! Cross-platform application paths using the `dirs` crate.
//!
//! Layout:
//!
//! Config dir (settings + knowledge source):
//!   Windows: %APPDATA%\faq-responder\
//!   macOS:   ~/Library/Application Support/faq-responder/
//!   Linux:   ~/.config/faq-responder/
//!
//! Audio dir (synthesised answers, session scoped):
//!   `<system temp dir>/faq-responder-audio/`

use std::path::PathBuf;

/// Holds all resolved application directory/file paths.
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// Directory for `settings.toml` and `knowledge.json`.
    pub config_dir: PathBuf,
    /// Full path to `settings.toml`.
    pub settings_file: PathBuf,
    /// Default knowledge source when `knowledge.path` is not configured.
    pub knowledge_file: PathBuf,
    /// Directory where synthesised MP3 files are written.
    pub audio_dir: PathBuf,
}

impl AppPaths {
    const APP_NAME: &'static str = "faq-responder";

    /// Resolves all paths using the `dirs` crate.
    ///
    /// Falls back to the current directory if the platform cannot provide a
    /// standard config path.
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(Self::APP_NAME);

        let settings_file = config_dir.join("settings.toml");
        let knowledge_file = config_dir.join("knowledge.json");
        let audio_dir = std::env::temp_dir().join(format!("{}-audio", Self::APP_NAME));

        Self {
            config_dir,
            settings_file,
            knowledge_file,
            audio_dir,
        }
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_non_empty() {
        let paths = AppPaths::new();
        assert!(paths.config_dir.to_str().is_some_and(|s| !s.is_empty()));
        assert!(paths.audio_dir.to_str().is_some_and(|s| !s.is_empty()));
        assert!(paths
            .settings_file
            .file_name()
            .is_some_and(|n| n == "settings.toml"));
        assert!(paths
            .knowledge_file
            .file_name()
            .is_some_and(|n| n == "knowledge.json"));
    }

    #[test]
    fn files_live_in_config_dir() {
        let paths = AppPaths::new();
        assert_eq!(paths.settings_file.parent(), Some(paths.config_dir.as_path()));
        assert_eq!(paths.knowledge_file.parent(), Some(paths.config_dir.as_path()));
    }
}
