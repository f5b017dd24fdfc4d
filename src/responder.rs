//! Startup wiring: config → knowledge → synthesizer → sessions.
//!
//! # Startup sequence
//!
//! 1. Resolve the knowledge source path from [`AppConfig`].
//! 2. Load and validate it.  On failure keep the [`LoadError`] as a
//!    diagnostic and continue with an empty knowledge base.
//! 3. Build the [`AnswerResolver`] with the configured fallback answers.
//! 4. Select the speech backend once ([`speech::from_config`]).
//! 5. Hand out independent [`SessionHandler`]s via [`Responder::open_session`].

use std::sync::Arc;

use crate::config::AppConfig;
use crate::knowledge::{self, AnswerResolver, KnowledgeBase, LoadError};
use crate::session::{ExampleCatalog, SessionHandler};
use crate::speech::{self, BestEffortSynthesizer};

/// Process-wide, read-only state shared by every session.
pub struct Responder {
    knowledge: Arc<KnowledgeBase>,
    resolver: Arc<AnswerResolver>,
    speech: BestEffortSynthesizer,
    catalog: Arc<ExampleCatalog>,
    diagnostic: Option<LoadError>,
}

impl Responder {
    /// Build everything from `config`.  Never fails: a bad knowledge source
    /// only degrades answers to the "unavailable" fallback.
    pub fn from_config(config: &AppConfig) -> Self {
        let path = config.knowledge.resolved_path();

        let (kb, diagnostic) = match knowledge::load(&path) {
            Ok(kb) => (kb, None),
            Err(e) => {
                log::error!("knowledge: {e}; every query will get the fallback answer");
                (KnowledgeBase::empty(), Some(e))
            }
        };

        let mut responder = Self::new(
            kb,
            AnswerResolver::from_config(&config.responder),
            speech::from_config(&config.speech),
        );
        responder.diagnostic = diagnostic;
        responder
    }

    /// Assemble from already-built parts, with the default example catalog.
    pub fn new(kb: KnowledgeBase, resolver: AnswerResolver, speech: BestEffortSynthesizer) -> Self {
        Self {
            knowledge: Arc::new(kb),
            resolver: Arc::new(resolver),
            speech,
            catalog: Arc::new(ExampleCatalog::default()),
            diagnostic: None,
        }
    }

    /// Replace the example catalog shown to new sessions.
    pub fn with_catalog(mut self, catalog: ExampleCatalog) -> Self {
        self.catalog = Arc::new(catalog);
        self
    }

    /// Start a new, empty session.
    pub fn open_session(&self) -> SessionHandler {
        SessionHandler::new(
            Arc::clone(&self.knowledge),
            Arc::clone(&self.resolver),
            self.speech.clone(),
            Arc::clone(&self.catalog),
        )
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn catalog(&self) -> &ExampleCatalog {
        &self.catalog
    }

    /// The load failure, if any, for the host to display.
    pub fn diagnostic(&self) -> Option<&LoadError> {
        self.diagnostic.as_ref()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SpeechProvider;
    use crate::knowledge::{NO_MATCH_ANSWER, UNAVAILABLE_ANSWER};
    use std::path::{Path, PathBuf};
    use tempfile::tempdir;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn text_only_config(knowledge_path: PathBuf) -> AppConfig {
        let mut config = AppConfig::default();
        config.knowledge.path = Some(knowledge_path);
        config.speech.provider = SpeechProvider::Disabled;
        config
    }

    fn sample_path() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("data/knowledge.json")
    }

    #[tokio::test]
    async fn missing_source_degrades_to_unavailable() {
        init_logging();
        let dir = tempdir().expect("temp dir");
        let responder = Responder::from_config(&text_only_config(dir.path().join("missing.json")));

        assert!(matches!(
            responder.diagnostic(),
            Some(LoadError::SourceNotFound(_))
        ));
        assert!(responder.knowledge().is_empty());

        let mut session = responder.open_session();
        let entry = session.submit_query("hostel").await.unwrap();
        assert_eq!(entry.answer(), UNAVAILABLE_ANSWER);
    }

    #[tokio::test]
    async fn malformed_source_is_reported_not_fatal() {
        init_logging();
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("knowledge.json");
        std::fs::write(&path, "{ not json").unwrap();

        let responder = Responder::from_config(&text_only_config(path));

        assert!(matches!(responder.diagnostic(), Some(LoadError::ParseError(_))));
        let mut session = responder.open_session();
        assert!(session.submit_query("anything").await.is_ok());
    }

    #[tokio::test]
    async fn every_catalog_example_is_answered_by_the_sample() {
        init_logging();
        let responder = Responder::from_config(&text_only_config(sample_path()));
        assert!(responder.diagnostic().is_none());

        let catalog = responder.catalog().clone();
        let mut session = responder.open_session();

        for category in catalog.categories() {
            for question in catalog.questions(category).unwrap_or_default() {
                let entry = session.submit_query(question).await.unwrap();
                assert_ne!(entry.answer(), NO_MATCH_ANSWER, "no answer for {question:?}");
                assert!(entry.audio().is_none());
            }
        }
        assert_eq!(session.history().len(), 15);
    }

    #[tokio::test]
    async fn sample_routes_examples_to_the_right_topic() {
        let responder = Responder::from_config(&text_only_config(sample_path()));
        let mut session = responder.open_session();

        let hostel = session
            .submit_query("How can I apply for a hostel?")
            .await
            .unwrap()
            .answer()
            .to_string();
        assert!(hostel.starts_with("Hostel applications"));

        let docs = session
            .submit_query("What documents are required for admission?")
            .await
            .unwrap()
            .answer()
            .to_string();
        assert!(docs.contains("mark sheets"));
    }

    #[tokio::test]
    async fn sessions_do_not_share_history() {
        let responder = Responder::from_config(&text_only_config(sample_path()));
        let mut a = responder.open_session();
        let b = responder.open_session();

        a.submit_query("library timings").await.unwrap();
        a.select_example("Fees", 0).unwrap();

        assert_eq!(a.history().len(), 1);
        assert!(b.history().is_empty());
        assert_eq!(b.pending_query(), "");
    }

    #[tokio::test]
    async fn configured_fallback_reaches_sessions() {
        let mut config = text_only_config(sample_path());
        config.responder.no_match_answer = "Ask the front desk.".into();
        let responder = Responder::from_config(&config);

        let mut session = responder.open_session();
        let entry = session.submit_query("parking permits").await.unwrap();
        assert_eq!(entry.answer(), "Ask the front desk.");
    }

    #[test]
    fn custom_catalog_is_handed_to_new_sessions() {
        let catalog = ExampleCatalog::new(vec![("Sports".into(), vec!["Is there a gym?".into()])]);
        let responder = Responder::new(
            KnowledgeBase::empty(),
            AnswerResolver::new(),
            BestEffortSynthesizer::disabled(),
        )
        .with_catalog(catalog);

        let mut session = responder.open_session();
        assert_eq!(session.select_example("Sports", 0).unwrap(), "Is there a gym?");
        assert!(session.select_example("Fees", 0).is_err());
    }
}
