//! Per-session interaction handling.
//!
//! This module wires query resolution, best-effort speech and the
//! conversation history for a single user session, and exposes the state
//! the presentation layer renders.
//!
//! # Architecture
//!
//! ```text
//! SessionCommand (mpsc)
//!        │
//!        ▼
//! SessionHandler::run()   ← one async task per session
//!        │
//!        ├─ SubmitQuery   → resolve → synthesize → InteractionLog::append
//!        └─ SelectExample → Session::pending_query
//!        │
//!        ▼
//! SessionEvent (mpsc)     → presentation layer
//! ```
//!
//! The knowledge base, resolver and synthesizer are shared read-only across
//! sessions; each [`SessionHandler`] owns its own [`Session`].

pub mod catalog;
pub mod runner;
pub mod state;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use catalog::ExampleCatalog;
pub use runner::{SessionCommand, SessionError, SessionEvent, SessionHandler};
pub use state::{InteractionEntry, InteractionLog, Session};
