//! Per-session conversation state.
//!
//! [`InteractionLog`] stores entries in insertion (chronological) order and
//! only reverses them when read for display.  [`Session`] pairs the log with
//! the pending query shown in the input field.  Neither type is ever shared
//! between sessions.

use crate::speech::AudioRef;

// ---------------------------------------------------------------------------
// InteractionEntry
// ---------------------------------------------------------------------------

/// One answered query.  Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionEntry {
    query: String,
    answer: String,
    audio: Option<AudioRef>,
}

impl InteractionEntry {
    pub fn new(query: impl Into<String>, answer: impl Into<String>, audio: Option<AudioRef>) -> Self {
        Self {
            query: query.into(),
            answer: answer.into(),
            audio,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Synthesised audio, `None` when speech was disabled or failed.
    pub fn audio(&self) -> Option<&AudioRef> {
        self.audio.as_ref()
    }
}

// ---------------------------------------------------------------------------
// InteractionLog
// ---------------------------------------------------------------------------

/// Append-only conversation history.
#[derive(Debug, Clone, Default)]
pub struct InteractionLog {
    entries: Vec<InteractionEntry>,
}

impl InteractionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `entry` at the end and return it.  The only mutation the log
    /// supports.
    pub fn append(&mut self, entry: InteractionEntry) -> &InteractionEntry {
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    /// Entries most-recent-first, for display.
    ///
    /// ```
    /// use faq_responder::session::{InteractionEntry, InteractionLog};
    ///
    /// let mut log = InteractionLog::new();
    /// log.append(InteractionEntry::new("q1", "a1", None));
    /// log.append(InteractionEntry::new("q2", "a2", None));
    ///
    /// let queries: Vec<&str> = log.all_entries().map(|e| e.query()).collect();
    /// assert_eq!(queries, ["q2", "q1"]);
    /// ```
    pub fn all_entries(&self) -> impl DoubleEndedIterator<Item = &InteractionEntry> + ExactSizeIterator {
        self.entries.iter().rev()
    }

    /// Entries in the order they were appended.
    pub fn chronological(&self) -> &[InteractionEntry] {
        &self.entries
    }

    /// The most recently appended entry.
    pub fn latest(&self) -> Option<&InteractionEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// State for one user session: history plus the pre-filled query.
#[derive(Debug, Clone, Default)]
pub struct Session {
    history: InteractionLog,
    pending_query: String,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &InteractionLog {
        &self.history
    }

    /// Text to pre-fill into the input field.
    pub fn pending_query(&self) -> &str {
        &self.pending_query
    }

    pub(crate) fn set_pending_query(&mut self, text: impl Into<String>) {
        self.pending_query = text.into();
    }

    /// Record an answered query and clear the pending query.
    pub(crate) fn record(&mut self, entry: InteractionEntry) -> &InteractionEntry {
        self.pending_query.clear();
        self.history.append(entry)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(n: u32) -> InteractionEntry {
        InteractionEntry::new(format!("q{n}"), format!("a{n}"), None)
    }

    #[test]
    fn starts_empty() {
        let log = InteractionLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert_eq!(log.all_entries().count(), 0);
        assert!(log.latest().is_none());
    }

    #[test]
    fn all_entries_is_most_recent_first() {
        let mut log = InteractionLog::new();
        log.append(entry(1));
        log.append(entry(2));

        let shown: Vec<&InteractionEntry> = log.all_entries().collect();
        assert_eq!(shown, [&entry(2), &entry(1)]);
    }

    #[test]
    fn storage_stays_chronological() {
        let mut log = InteractionLog::new();
        for n in 1..=3 {
            log.append(entry(n));
        }
        assert_eq!(log.chronological(), [entry(1), entry(2), entry(3)]);
        assert_eq!(log.latest(), Some(&entry(3)));
        assert_eq!(log.all_entries().len(), 3);
    }

    #[test]
    fn entry_exposes_audio() {
        let e = InteractionEntry::new("q", "a", Some(AudioRef::new("/tmp/a.mp3")));
        assert_eq!(e.audio().map(|a| a.path().to_path_buf()), Some("/tmp/a.mp3".into()));
        assert!(entry(1).audio().is_none());
    }

    #[test]
    fn record_appends_and_clears_pending_query() {
        let mut session = Session::new();
        session.set_pending_query("What are the hostel rules?");
        assert_eq!(session.pending_query(), "What are the hostel rules?");

        session.record(entry(1));

        assert_eq!(session.pending_query(), "");
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn sessions_are_independent() {
        let mut a = Session::new();
        let b = Session::new();
        a.record(entry(1));
        assert_eq!(a.history().len(), 1);
        assert!(b.history().is_empty());
    }
}
