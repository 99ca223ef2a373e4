//! Fuzzy text matching using nucleo-matcher.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

/// A parsed query, built once per filter and matched against many
/// cells. An empty query matches everything.
pub struct FuzzyQuery {
    pattern: Option<Pattern>,
}

impl FuzzyQuery {
    pub fn new(query: &str) -> Self {
        let query = query.trim();
        let pattern = (!query.is_empty()).then(|| {
            Pattern::new(
                query,
                CaseMatching::Ignore,
                Normalization::Smart,
                AtomKind::Fuzzy,
            )
        });
        Self { pattern }
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_none()
    }
}

/// Reusable fuzzy matcher.
///
/// `Matcher` carries scratch buffers, so one instance is built per
/// filter pass rather than per cell.
pub struct FuzzyMatcher {
    matcher: Matcher,
    buf: Vec<char>,
}

impl FuzzyMatcher {
    pub fn new() -> Self {
        Self {
            matcher: Matcher::new(Config::DEFAULT),
            buf: Vec::new(),
        }
    }

    /// Score `haystack` against `query`. `None` means no match; higher
    /// scores are better matches.
    pub fn score(&mut self, query: &FuzzyQuery, haystack: &str) -> Option<u32> {
        let Some(pattern) = &query.pattern else {
            return Some(0);
        };
        self.buf.clear();
        let haystack = Utf32Str::new(haystack, &mut self.buf);
        pattern.score(haystack, &mut self.matcher)
    }

    /// A row cell passes the filter when its rank indicates a match.
    pub fn is_match(&mut self, query: &FuzzyQuery, haystack: &str) -> bool {
        self.score(query, haystack).is_some()
    }
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_insensitive_substring_matches() {
        let mut matcher = FuzzyMatcher::new();
        let query = FuzzyQuery::new("abc");
        assert!(matcher.is_match(&query, "abcdef"));
        assert!(matcher.is_match(&query, "ABCzz"));
        assert!(!matcher.is_match(&query, "xyz"));
    }

    #[test]
    fn empty_query_matches_everything() {
        let mut matcher = FuzzyMatcher::new();
        let query = FuzzyQuery::new("");
        assert!(query.is_empty());
        assert!(matcher.is_match(&query, "anything"));
        assert!(matcher.is_match(&query, ""));
    }

    #[test]
    fn one_compiled_query_serves_many_haystacks() {
        // The pattern is parsed once and then matched per cell.
        let mut matcher = FuzzyMatcher::new();
        let query = FuzzyQuery::new("desk");
        let hits: Vec<bool> = ["walnut desk", "desk lamp", "floor lamp", "DESKTOP"]
            .iter()
            .map(|h| matcher.is_match(&query, h))
            .collect();
        assert_eq!(hits, [true, true, false, true]);
    }

    #[test]
    fn closer_match_scores_higher() {
        let mut matcher = FuzzyMatcher::new();
        let query = FuzzyQuery::new("desk");
        let exact = matcher.score(&query, "desk").expect("exact match");
        let spread = matcher.score(&query, "d-e-s-k pad").expect("spread match");
        assert!(exact > spread);
    }
}
