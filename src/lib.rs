//! Keyword-matching FAQ responder.
//!
//! Free-text questions are answered from a static list of
//! `(keywords, answer)` records: the first record with a keyword contained
//! in the lowercased question wins.  Answers can optionally be rendered to
//! MP3 through a text-to-speech service, and each session keeps its own
//! conversation history.
//!
//! ```rust,no_run
//! use faq_responder::config::AppConfig;
//! use faq_responder::Responder;
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = AppConfig::load()?;
//! let responder = Responder::from_config(&config);
//! if let Some(problem) = responder.diagnostic() {
//!     eprintln!("{problem}");
//! }
//!
//! let mut session = responder.open_session();
//! let entry = session.submit_query("When do admissions open?").await?;
//! println!("{}", entry.answer());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod knowledge;
pub mod responder;
pub mod session;
pub mod speech;

pub use responder::Responder;
