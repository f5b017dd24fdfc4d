//! FAQ record and knowledge base types.
//!
//! Both types are immutable once built: there are no `&mut self` methods, so
//! a [`KnowledgeBase`] can be wrapped in an `Arc` and read from any number of
//! sessions after the initial load.

use thiserror::Error;

// ---------------------------------------------------------------------------
// InvalidRecord
// ---------------------------------------------------------------------------

/// Why a candidate record was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidRecord {
    /// No non-blank keyword was supplied.
    #[error("record has no usable keywords")]
    NoKeywords,

    /// The answer was missing, empty or whitespace only.
    #[error("record has an empty answer")]
    EmptyAnswer,

    /// The JSON element did not have the expected shape.
    #[error("malformed record: {0}")]
    Malformed(String),
}

// ---------------------------------------------------------------------------
// FaqRecord
// ---------------------------------------------------------------------------

/// A single keyword-set → answer mapping.
///
/// Invariants: at least one keyword, no blank keywords, non-blank answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqRecord {
    keywords: Vec<String>,
    answer: String,
}

impl FaqRecord {
    /// Validate and build a record.
    ///
    /// Blank keywords are dropped rather than rejected, because an empty
    /// keyword is a substring of every query.  Keyword order is preserved.
    ///
    /// ```
    /// use faq_responder::knowledge::{FaqRecord, InvalidRecord};
    ///
    /// let rec = FaqRecord::new(vec!["fee".into(), " ".into()], "Fees are due in July.").unwrap();
    /// assert_eq!(rec.keywords(), ["fee"]);
    ///
    /// assert_eq!(FaqRecord::new(vec![], "x"), Err(InvalidRecord::NoKeywords));
    /// ```
    pub fn new(keywords: Vec<String>, answer: impl Into<String>) -> Result<Self, InvalidRecord> {
        let answer = answer.into();
        if answer.trim().is_empty() {
            return Err(InvalidRecord::EmptyAnswer);
        }

        let keywords: Vec<String> = keywords
            .into_iter()
            .filter(|kw| !kw.trim().is_empty())
            .collect();
        if keywords.is_empty() {
            return Err(InvalidRecord::NoKeywords);
        }

        Ok(Self { keywords, answer })
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Returns `true` when any keyword occurs (case-insensitively) inside
    /// `lowered_query`, which the caller has already lowercased.
    pub(crate) fn matches(&self, lowered_query: &str) -> bool {
        self.keywords
            .iter()
            .any(|kw| lowered_query.contains(kw.to_lowercase().as_str()))
    }
}

// ---------------------------------------------------------------------------
// KnowledgeBase
// ---------------------------------------------------------------------------

/// Ordered, immutable sequence of [`FaqRecord`]s.
///
/// Order is significant: earlier records win when several would match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnowledgeBase {
    records: Vec<FaqRecord>,
    skipped: usize,
}

impl KnowledgeBase {
    /// An empty knowledge base; every query resolves to the "unavailable"
    /// fallback.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from already-validated records.
    pub fn from_records(records: Vec<FaqRecord>) -> Self {
        Self {
            records,
            skipped: 0,
        }
    }

    pub(crate) fn with_skipped(records: Vec<FaqRecord>, skipped: usize) -> Self {
        Self { records, skipped }
    }

    pub fn records(&self) -> &[FaqRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of source elements rejected during load.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kws(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn rejects_blank_answer() {
        assert_eq!(
            FaqRecord::new(kws(&["fee"]), "   "),
            Err(InvalidRecord::EmptyAnswer)
        );
        assert_eq!(
            FaqRecord::new(kws(&["fee"]), ""),
            Err(InvalidRecord::EmptyAnswer)
        );
    }

    #[test]
    fn rejects_when_only_blank_keywords() {
        assert_eq!(
            FaqRecord::new(kws(&["", "  "]), "answer"),
            Err(InvalidRecord::NoKeywords)
        );
    }

    #[test]
    fn keeps_keyword_order() {
        let rec = FaqRecord::new(kws(&["b", "", "a"]), "answer").unwrap();
        assert_eq!(rec.keywords(), ["b", "a"]);
        assert_eq!(rec.answer(), "answer");
    }

    #[test]
    fn matches_case_insensitively() {
        let rec = FaqRecord::new(kws(&["Hostel"]), "answer").unwrap();
        assert!(rec.matches("where is the hostel office?"));
        assert!(!rec.matches("where is the library?"));
    }

    #[test]
    fn empty_base_has_no_records() {
        let kb = KnowledgeBase::empty();
        assert!(kb.is_empty());
        assert_eq!(kb.len(), 0);
        assert_eq!(kb.skipped(), 0);
    }

    #[test]
    fn knowledge_base_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<KnowledgeBase>();
    }
}
