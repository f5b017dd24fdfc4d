//! First-match-wins keyword resolution.
//!
//! The query is lowercased once; each record's keywords are lowercased and
//! tested for substring containment, in knowledge-base order.  This is plain
//! containment, not word matching: the keyword `"fee"` matches `"feed"`.

use crate::config::ResponderConfig;
use crate::knowledge::record::{FaqRecord, KnowledgeBase};

/// Default answer when the knowledge base is loaded but nothing matched.
pub const NO_MATCH_ANSWER: &str = "Sorry, I can only help with university-related queries.";

/// Default answer when no knowledge is loaded at all.
pub const UNAVAILABLE_ANSWER: &str =
    "The help desk knowledge base is currently unavailable. Please try again later.";

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Outcome of matching a query, before it is turned into answer text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'kb> {
    /// The first record with a keyword contained in the query.
    Matched(&'kb FaqRecord),
    /// Records exist but none matched.
    NoMatch,
    /// The knowledge base is empty.
    KnowledgeUnavailable,
}

// ---------------------------------------------------------------------------
// AnswerResolver
// ---------------------------------------------------------------------------

/// Maps queries to answers, holding the two fallback strings.
#[derive(Debug, Clone)]
pub struct AnswerResolver {
    no_match_answer: String,
    unavailable_answer: String,
}

impl AnswerResolver {
    /// A resolver using [`NO_MATCH_ANSWER`] and [`UNAVAILABLE_ANSWER`].
    pub fn new() -> Self {
        Self {
            no_match_answer: NO_MATCH_ANSWER.into(),
            unavailable_answer: UNAVAILABLE_ANSWER.into(),
        }
    }

    pub fn from_config(config: &ResponderConfig) -> Self {
        Self {
            no_match_answer: config.no_match_answer.clone(),
            unavailable_answer: config.unavailable_answer.clone(),
        }
    }

    /// Find the record that answers `query`.  Total over all inputs.
    pub fn classify<'kb>(&self, query: &str, kb: &'kb KnowledgeBase) -> Resolution<'kb> {
        if kb.is_empty() {
            return Resolution::KnowledgeUnavailable;
        }

        let lowered = query.to_lowercase();
        kb.records()
            .iter()
            .find(|record| record.matches(&lowered))
            .map_or(Resolution::NoMatch, Resolution::Matched)
    }

    /// Resolve `query` to answer text.
    ///
    /// ```
    /// use faq_responder::knowledge::{load_str, AnswerResolver, NO_MATCH_ANSWER};
    ///
    /// let kb = load_str(r#"[{"keywords": ["hostel"], "answer": "Apply online."}]"#).unwrap();
    /// let resolver = AnswerResolver::new();
    /// assert_eq!(resolver.resolve("HOSTEL rules?", &kb), "Apply online.");
    /// assert_eq!(resolver.resolve("parking?", &kb), NO_MATCH_ANSWER);
    /// ```
    pub fn resolve<'a>(&'a self, query: &str, kb: &'a KnowledgeBase) -> &'a str {
        match self.classify(query, kb) {
            Resolution::Matched(record) => record.answer(),
            Resolution::NoMatch => &self.no_match_answer,
            Resolution::KnowledgeUnavailable => &self.unavailable_answer,
        }
    }

    pub fn no_match_answer(&self) -> &str {
        &self.no_match_answer
    }

    pub fn unavailable_answer(&self) -> &str {
        &self.unavailable_answer
    }
}

impl Default for AnswerResolver {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn record(keywords: &[&str], answer: &str) -> FaqRecord {
        FaqRecord::new(keywords.iter().map(|k| k.to_string()).collect(), answer).unwrap()
    }

    fn kb(records: Vec<FaqRecord>) -> KnowledgeBase {
        KnowledgeBase::from_records(records)
    }

    #[test]
    fn matches_keyword_anywhere_in_query() {
        let kb = kb(vec![record(&["scholarship"], "S")]);
        let r = AnswerResolver::new();
        assert_eq!(r.resolve("Are there any scholarships available?", &kb), "S");
    }

    #[test]
    fn comparison_is_case_insensitive_both_ways() {
        let kb = kb(vec![record(&["GPA"], "G")]);
        let r = AnswerResolver::new();
        assert_eq!(r.resolve("what is a good gpa", &kb), "G");
        assert_eq!(r.resolve("WHAT IS A GOOD GPA", &kb), "G");
    }

    #[test]
    fn first_record_wins_over_more_specific_later_record() {
        let kb = kb(vec![record(&["fee"], "A"), record(&["fees"], "B")]);
        let r = AnswerResolver::new();
        assert_eq!(r.resolve("What about fees?", &kb), "A");
    }

    #[test]
    fn containment_matches_inside_words() {
        let kb = kb(vec![record(&["fee"], "A")]);
        let r = AnswerResolver::new();
        assert_eq!(r.resolve("I need to feed my cat", &kb), "A");
    }

    #[test]
    fn any_keyword_in_record_matches() {
        let kb = kb(vec![
            record(&["library"], "L"),
            record(&["admission", "apply"], "A"),
        ]);
        let r = AnswerResolver::new();
        assert_eq!(r.resolve("how do I apply", &kb), "A");
    }

    #[test]
    fn no_match_returns_no_match_fallback() {
        let kb = kb(vec![record(&["hostel"], "H")]);
        let r = AnswerResolver::new();
        assert_eq!(r.resolve("where can I park?", &kb), NO_MATCH_ANSWER);
        assert_eq!(
            r.classify("where can I park?", &kb),
            Resolution::NoMatch
        );
    }

    #[test]
    fn blank_queries_never_match() {
        let kb = kb(vec![record(&["hostel"], "H"), record(&["a"], "A")]);
        let r = AnswerResolver::new();
        assert_eq!(r.resolve("", &kb), NO_MATCH_ANSWER);
        assert_eq!(r.resolve("   \t", &kb), NO_MATCH_ANSWER);
    }

    #[test]
    fn empty_knowledge_base_returns_unavailable_for_any_query() {
        let empty = KnowledgeBase::empty();
        let r = AnswerResolver::new();
        for query in ["", "hostel", "What about fees?"] {
            assert_eq!(r.resolve(query, &empty), UNAVAILABLE_ANSWER);
            assert_eq!(r.classify(query, &empty), Resolution::KnowledgeUnavailable);
        }
    }

    #[test]
    fn configured_fallbacks_are_used() {
        let config = ResponderConfig {
            no_match_answer: "nothing".into(),
            unavailable_answer: "offline".into(),
        };
        let r = AnswerResolver::from_config(&config);
        let kb = kb(vec![record(&["hostel"], "H")]);

        assert_eq!(r.resolve("parking", &kb), "nothing");
        assert_eq!(r.resolve("parking", &KnowledgeBase::empty()), "offline");
    }

    #[test]
    fn classify_reports_the_matched_record() {
        let kb = kb(vec![record(&["x"], "first"), record(&["y"], "second")]);
        let r = AnswerResolver::new();
        match r.classify("why", &kb) {
            Resolution::Matched(rec) => assert_eq!(rec.answer(), "second"),
            other => panic!("expected a match, got {other:?}"),
        }
    }
}
