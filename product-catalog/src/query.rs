//! Query normalization and synonym expansion.
//!
//! A raw query is lower-cased, stripped of everything outside word
//! characters, whitespace, and apostrophes, split on whitespace, and filtered
//! against a fixed stop-word set. Surviving tokens are closed under a fixed
//! synonym table, so a shopper asking for a "phone" also matches products
//! listed as "iphone" or "celulares".
//!
//! Both lookup tables are immutable configuration built once at
//! construction, not mutable module state.

use std::collections::{HashMap, HashSet};

use regex::Regex;

/// Articles, pronouns, auxiliary verbs, and shopping filler words.
const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "if", "then", "i", "im", "i'm", "me", "my", "mine", "we",
    "our", "ours", "you", "your", "yours", "he", "him", "his", "she", "her", "hers", "it", "its",
    "they", "them", "their", "this", "that", "these", "those", "is", "am", "are", "was", "were",
    "be", "been", "being", "do", "does", "did", "have", "has", "had", "can", "could", "will",
    "would", "shall", "should", "may", "might", "must", "for", "to", "of", "in", "on", "at", "by",
    "with", "from", "about", "as", "so", "some", "any", "please", "hi", "hello", "hey", "thanks",
    "thank", "looking", "look", "need", "needs", "want", "wants", "wanna", "like", "find", "get",
    "buy", "show", "searching",
];

/// Fixed synonym table; mapped terms are added alongside the original token.
const SYNONYMS: &[(&str, &[&str])] = &[
    ("dad", &["men", "mens", "man", "boys", "father"]),
    ("father", &["men", "mens", "man", "boys", "dad"]),
    ("husband", &["men", "mens", "man"]),
    ("mom", &["women", "womens", "woman", "girls", "mother"]),
    ("mother", &["women", "womens", "woman", "girls", "mom"]),
    ("wife", &["women", "womens", "woman"]),
    ("gift", &["present"]),
    ("present", &["gift"]),
    ("phone", &["iphone", "celulares", "phone"]),
    ("iphone", &["phone", "celulares"]),
    ("watch", &["reloj", "watch"]),
    ("reloj", &["watch"]),
    ("tv", &["television"]),
    ("laptop", &["notebook", "computer"]),
];

/// The expanded, de-duplicated term set derived from one query.
///
/// Invariant: always a superset of the raw, stop-word-filtered tokens. An
/// empty set means the query carried no discriminating terms; the ranker
/// treats that as its fallback signal.
#[derive(Debug, Clone, Default)]
pub struct SearchTermSet {
    terms: HashSet<String>,
}

impl SearchTermSet {
    /// Builds a term set directly, bypassing normalization (fixtures, tests).
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}

/// Turns free text into a [`SearchTermSet`].
///
/// Construct once and share; the regex and lookup tables are built a single
/// time.
#[derive(Debug)]
pub struct QueryExpander {
    strip: Regex,
    stop_words: HashSet<&'static str>,
    synonyms: HashMap<&'static str, &'static [&'static str]>,
}

impl QueryExpander {
    pub fn new() -> Self {
        Self {
            // Everything outside word chars, whitespace, and apostrophe
            // becomes a separator.
            strip: Regex::new(r"[^\w\s']").expect("valid literal pattern"),
            stop_words: STOP_WORDS.iter().copied().collect(),
            synonyms: SYNONYMS.iter().copied().collect(),
        }
    }

    /// Expands a raw query into its search-term set.
    ///
    /// Tokens of length one and stop words are dropped before expansion. The
    /// result may be empty — that is the "no discriminating terms" signal.
    pub fn search_terms(&self, query: &str) -> SearchTermSet {
        let lowered = query.to_lowercase();
        let cleaned = self.strip.replace_all(&lowered, " ");

        let mut terms = HashSet::new();
        for token in cleaned.split_whitespace() {
            if token.chars().count() <= 1 || self.stop_words.contains(token) {
                continue;
            }
            terms.insert(token.to_string());
            if let Some(mapped) = self.synonyms.get(token) {
                terms.extend(mapped.iter().map(|s| s.to_string()));
            }
        }

        SearchTermSet { terms }
    }
}

impl Default for QueryExpander {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_words_and_short_tokens_are_dropped() {
        let terms = QueryExpander::new().search_terms("I am looking for a red scarf");
        assert!(terms.contains("red"));
        assert!(terms.contains("scarf"));
        assert!(!terms.contains("looking"));
        assert!(!terms.contains("i"));
        assert_eq!(terms.len(), 2);
    }

    #[test]
    fn iphone_expands_to_phone() {
        let terms = QueryExpander::new().search_terms("I am looking for iphone");
        assert!(terms.contains("iphone"));
        assert!(terms.contains("phone"));
        assert!(terms.contains("celulares"));
    }

    #[test]
    fn dad_expands_to_mens_terms() {
        let terms = QueryExpander::new().search_terms("gift for my dad");
        for expected in ["dad", "men", "mens", "man", "boys", "father", "gift", "present"] {
            assert!(terms.contains(expected), "missing {expected}");
        }
    }

    #[test]
    fn expansion_is_a_superset_of_surviving_tokens() {
        let expander = QueryExpander::new();
        let terms = expander.search_terms("cheap watch under $50, please!");
        // Raw surviving tokens must all be present alongside synonyms.
        for raw in ["cheap", "watch", "under", "50"] {
            assert!(terms.contains(raw), "missing raw token {raw}");
        }
        assert!(terms.contains("reloj"));
    }

    #[test]
    fn punctuation_becomes_separator_but_apostrophe_survives() {
        let terms = QueryExpander::new().search_terms("men's-jacket?!");
        assert!(terms.contains("men's"));
        assert!(terms.contains("jacket"));
    }

    #[test]
    fn query_of_filler_words_yields_empty_set() {
        let terms = QueryExpander::new().search_terms("I am looking for a ...");
        assert!(terms.is_empty());
    }

    #[test]
    fn empty_query_yields_empty_set() {
        assert!(QueryExpander::new().search_terms("   ").is_empty());
    }
}
