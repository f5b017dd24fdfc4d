//! Knowledge store and answer resolution.
//!
//! This module provides:
//! * [`FaqRecord`] / [`KnowledgeBase`]: validated, immutable FAQ data.
//! * [`load`] / [`load_reader`] / [`load_str`]: parse a JSON source,
//!   skipping (and counting) invalid records.
//! * [`AnswerResolver`]: first-match-wins substring lookup with distinct
//!   "no match" and "knowledge unavailable" fallbacks.
//! * [`LoadError`]: load failure reasons.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use faq_responder::knowledge::{self, AnswerResolver, KnowledgeBase};
//!
//! let kb = knowledge::load("knowledge.json").unwrap_or_else(|e| {
//!     eprintln!("{e}");
//!     KnowledgeBase::empty()
//! });
//! let resolver = AnswerResolver::new();
//! println!("{}", resolver.resolve("When do admissions open?", &kb));
//! ```

pub mod record;
pub mod resolver;
pub mod store;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use record::{FaqRecord, InvalidRecord, KnowledgeBase};
pub use resolver::{AnswerResolver, Resolution, NO_MATCH_ANSWER, UNAVAILABLE_ANSWER};
pub use store::{load, load_reader, load_str, LoadError};
