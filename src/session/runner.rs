//! Session handler: drives query → answer → speech → history for one user.
//!
//! # Flow
//!
//! ```text
//! SessionCommand::SubmitQuery(text)
//!   └─▶ blank?  → Rejected
//!   └─▶ AnswerResolver::resolve                  (pure, never fails)
//!         └─▶ BestEffortSynthesizer::synthesize  (bounded, None on failure)
//!               └─▶ append to InteractionLog, clear pending query → Answered
//!
//! SessionCommand::SelectExample { category, index }
//!   └─▶ set pending query → PendingQueryChanged   (no resolution)
//! ```
//!
//! Commands are processed one at a time; a submission is complete before the
//! next command is read.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::mpsc;

use crate::knowledge::{AnswerResolver, KnowledgeBase};
use crate::speech::BestEffortSynthesizer;

use super::catalog::ExampleCatalog;
use super::state::{InteractionEntry, InteractionLog, Session};

// ---------------------------------------------------------------------------
// SessionError
// ---------------------------------------------------------------------------

/// Errors from presentation-layer requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The query was empty or whitespace only.
    #[error("query is empty")]
    BlankQuery,

    /// No example category with this name.
    #[error("unknown example category: {0}")]
    UnknownCategory(String),

    /// The category exists but has no example at this index.
    #[error("category {category} has no example #{index}")]
    ExampleOutOfRange { category: String, index: usize },
}

// ---------------------------------------------------------------------------
// Channel messages
// ---------------------------------------------------------------------------

/// Requests from the presentation layer.
#[derive(Debug, Clone)]
pub enum SessionCommand {
    /// Resolve, synthesise and log `text`.
    SubmitQuery(String),
    /// Pre-fill the pending query with a catalog example.
    SelectExample { category: String, index: usize },
}

/// Updates delivered back to the presentation layer.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// A query was answered and appended to the history.
    Answered(InteractionEntry),
    /// The pending query changed (example selected).
    PendingQueryChanged(String),
    /// The command was refused; nothing changed.
    Rejected(SessionError),
}

// ---------------------------------------------------------------------------
// SessionHandler
// ---------------------------------------------------------------------------

/// Owns one [`Session`] and the shared, read-only collaborators.
pub struct SessionHandler {
    knowledge: Arc<KnowledgeBase>,
    resolver: Arc<AnswerResolver>,
    speech: BestEffortSynthesizer,
    catalog: Arc<ExampleCatalog>,
    session: Session,
}

impl SessionHandler {
    /// Create a handler with a fresh, empty session.
    pub fn new(
        knowledge: Arc<KnowledgeBase>,
        resolver: Arc<AnswerResolver>,
        speech: BestEffortSynthesizer,
        catalog: Arc<ExampleCatalog>,
    ) -> Self {
        Self {
            knowledge,
            resolver,
            speech,
            catalog,
            session: Session::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn history(&self) -> &InteractionLog {
        self.session.history()
    }

    pub fn pending_query(&self) -> &str {
        self.session.pending_query()
    }

    pub fn catalog(&self) -> &ExampleCatalog {
        &self.catalog
    }

    // -----------------------------------------------------------------------
    // Operations
    // -----------------------------------------------------------------------

    /// Answer `text` and append the interaction to the history.
    ///
    /// Blank input is refused with [`SessionError::BlankQuery`] and leaves the
    /// session untouched.  Synthesis failure only drops the audio.
    pub async fn submit_query(&mut self, text: &str) -> Result<&InteractionEntry, SessionError> {
        let query = text.trim();
        if query.is_empty() {
            return Err(SessionError::BlankQuery);
        }

        let answer = self.resolver.resolve(query, &self.knowledge).to_string();
        log::debug!("session: {query:?} → {answer:?}");

        let audio = self.speech.synthesize(&answer).await;
        if audio.is_none() {
            log::debug!("session: no audio for this answer");
        }

        Ok(self
            .session
            .record(InteractionEntry::new(query, answer, audio)))
    }

    /// Set the pending query to an example question.  Does not resolve it.
    pub fn select_example(&mut self, category: &str, index: usize) -> Result<&str, SessionError> {
        let questions = self
            .catalog
            .questions(category)
            .ok_or_else(|| SessionError::UnknownCategory(category.to_string()))?;

        let question = questions
            .get(index)
            .ok_or_else(|| SessionError::ExampleOutOfRange {
                category: category.to_string(),
                index,
            })?
            .clone();

        self.session.set_pending_query(question);
        Ok(self.session.pending_query())
    }

    // -----------------------------------------------------------------------
    // Command loop
    // -----------------------------------------------------------------------

    /// Process commands until `commands` is closed, then return the final
    /// session state.
    pub async fn run(
        mut self,
        mut commands: mpsc::Receiver<SessionCommand>,
        events: mpsc::Sender<SessionEvent>,
    ) -> Session {
        while let Some(command) = commands.recv().await {
            let event = match command {
                SessionCommand::SubmitQuery(text) => match self.submit_query(&text).await {
                    Ok(entry) => SessionEvent::Answered(entry.clone()),
                    Err(e) => SessionEvent::Rejected(e),
                },
                SessionCommand::SelectExample { category, index } => {
                    match self.select_example(&category, index) {
                        Ok(pending) => SessionEvent::PendingQueryChanged(pending.to_string()),
                        Err(e) => {
                            log::warn!("session: {e}");
                            SessionEvent::Rejected(e)
                        }
                    }
                }
            };

            let _ = events.send(event).await;
        }

        log::info!("session: command channel closed, session ending");
        self.session
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
