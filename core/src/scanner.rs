//! Greedy fuzzy scan of document content against a simple-character query.
//!
//! The scan walks the content left to right, consulting the `CharMapping`
//! per character. Recovery after a mismatch uses a single-character
//! lookahead: a char that fails at the current query position but matches
//! the query's first symbol starts a fresh one-symbol match. This is a
//! deliberate heuristic, not exhaustive fuzzy matching — it can miss an
//! overlapping match when a mismatch char ambiguously equals the first
//! query symbol. Downstream consumers depend on the exact branch order
//! below, so keep it.

use crate::dict::CharMapping;
use tracing::debug;

/// One query bound to a mapping table, reusable across scans.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    dict: &'a CharMapping,
    query: Vec<char>,
}

impl<'a> Scanner<'a> {
    /// Bind `query` (in simple-character space) to a mapping table.
    pub fn new(dict: &'a CharMapping, query: &str) -> Self {
        Self {
            dict,
            query: query.chars().collect(),
        }
    }

    /// Query length in chars.
    pub fn query_len(&self) -> usize {
        self.query.len()
    }

    /// Find the next match at or after char index `start`.
    ///
    /// Returns the match's start index; the match spans `query_len()` chars.
    pub fn find_next(&self, content: &[char], start: usize) -> Option<usize> {
        if self.query.is_empty() {
            return None;
        }

        let mut query_idx = 0;
        for (content_idx, &c) in content.iter().enumerate().skip(start) {
            // Branch order matters: the check at the current query position
            // runs before the restart-at-first-symbol check, which runs
            // before the full reset.
            if self.dict.fuzzy_eq(c, self.query[query_idx]) {
                query_idx += 1;
            } else if self.dict.fuzzy_eq(c, self.query[0]) {
                query_idx = 1;
            } else {
                query_idx = 0;
            }

            if query_idx == self.query.len() {
                return Some(content_idx + 1 - self.query.len());
            }
        }

        None
    }

    /// Collect every match in `content`, in discovery order.
    ///
    /// The scan restarts one char past each match's start (not past its
    /// end), so successive matches have strictly increasing start indices
    /// but may overlap in content. An empty query yields no matches. Pure
    /// function of its inputs.
    pub fn match_list(&self, content: &str) -> Vec<String> {
        let mut matches = Vec::new();
        if self.query.is_empty() {
            return matches;
        }

        let chars: Vec<char> = content.chars().collect();
        let mut start = 0;
        while let Some(found) = self.find_next(&chars, start) {
            matches.push(chars[found..found + self.query.len()].iter().collect());
            start = found + 1;
        }

        debug!(
            query_len = self.query.len(),
            matches = matches.len(),
            "fuzzy scan finished"
        );
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_finds_nothing() {
        let dict = CharMapping::new();
        let scanner = Scanner::new(&dict, "");
        assert_eq!(scanner.find_next(&['a', 'b'], 0), None);
        assert!(scanner.match_list("ab").is_empty());
    }

    #[test]
    fn self_mapped_literal_match() {
        let dict = CharMapping::new();
        let scanner = Scanner::new(&dict, "ab");
        assert_eq!(scanner.find_next(&['x', 'a', 'b'], 0), Some(1));
        assert_eq!(scanner.find_next(&['x', 'a', 'b'], 2), None);
    }

    #[test]
    fn restart_at_one_after_partial_match() {
        // "aab": the second 'a' fails at query[1]='b' but matches query[0],
        // so the scan restarts there instead of resetting fully.
        let dict = CharMapping::new();
        let scanner = Scanner::new(&dict, "ab");
        assert_eq!(scanner.find_next(&['a', 'a', 'b'], 0), Some(1));
    }

    #[test]
    fn overlapping_matches_have_increasing_starts() {
        let dict = CharMapping::new();
        let scanner = Scanner::new(&dict, "aa");
        assert_eq!(scanner.match_list("aaa"), vec!["aa", "aa"]);
    }
}
