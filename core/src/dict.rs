//! Complex-char → simple-chars mapping table.
//!
//! The table is built once from dictionary text and is immutable afterwards.
//! Dictionary format: UTF-8 text, one entry per line,
//! `COMPLEX_CHAR SPACE SIMPLE_CHARS`; blank lines are ignored, there is no
//! comment syntax. A later entry for the same complex char overrides an
//! earlier one, so generated dictionaries can be patched by appending.
//!
//! Malformed lines are a data defect in the dictionary, not in the caller:
//! they are skipped, reported as `DictDiagnostic`s and logged, and the build
//! always succeeds with whatever entries were well-formed.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Why a dictionary line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, thiserror::Error)]
pub enum DictDiagnosticKind {
    /// The line did not split into exactly two whitespace-separated fields.
    #[error("expected 2 fields, found {0}")]
    FieldCount(usize),
    /// The first field must be a single complex character.
    #[error("complex char field is not a single character")]
    ComplexNotSingleChar,
}

/// A rejected dictionary line, with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DictDiagnostic {
    pub line_no: usize,
    pub line: String,
    pub kind: DictDiagnosticKind,
}

impl std::fmt::Display for DictDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "dictionary line {} {:?}: {}",
            self.line_no, self.line, self.kind
        )
    }
}

/// Mapping from a complex character to the string of simple characters it
/// may be approximated by.
///
/// A character absent from the table is treated as self-mapped: its only
/// acceptable simple form is itself. This is what lets plain ASCII content
/// match an ASCII query through the same code path as hanzi content.
#[derive(Debug, Clone, Default)]
pub struct CharMapping {
    map: AHashMap<char, String>,
}

impl CharMapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self {
            map: AHashMap::new(),
        }
    }

    /// Build a mapping from dictionary text.
    ///
    /// Never fails: each malformed line produces one `DictDiagnostic` (also
    /// logged at warn level) and is excluded from the table.
    pub fn parse(dict_text: &str) -> (Self, Vec<DictDiagnostic>) {
        let mut mapping = Self::new();
        let mut diagnostics = Vec::new();

        for (idx, raw) in dict_text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            let kind = if fields.len() != 2 {
                Some(DictDiagnosticKind::FieldCount(fields.len()))
            } else {
                let mut chars = fields[0].chars();
                match (chars.next(), chars.next()) {
                    (Some(complex), None) => {
                        mapping.insert(complex, fields[1]);
                        None
                    }
                    _ => Some(DictDiagnosticKind::ComplexNotSingleChar),
                }
            };

            if let Some(kind) = kind {
                let diag = DictDiagnostic {
                    line_no: idx + 1,
                    line: line.to_string(),
                    kind,
                };
                warn!("{diag}");
                diagnostics.push(diag);
            }
        }

        debug!(
            entries = mapping.len(),
            skipped = diagnostics.len(),
            "built char mapping"
        );
        (mapping, diagnostics)
    }

    /// Insert one entry; a repeated complex char replaces the earlier entry.
    pub fn insert(&mut self, complex: char, simple: &str) {
        self.map.insert(complex, simple.to_string());
    }

    /// Look up the simple chars for a complex char, if the table has it.
    pub fn simple_chars(&self, complex: char) -> Option<&str> {
        self.map.get(&complex).map(|s| s.as_str())
    }

    /// Does document char `c` fuzzy-match query symbol `simple`?
    ///
    /// True when `simple` occurs in the table entry for `c`, or, for a char
    /// with no entry, when `simple` is `c` itself.
    pub fn fuzzy_eq(&self, c: char, simple: char) -> bool {
        match self.map.get(&c) {
            Some(s) => s.contains(simple),
            None => c == simple,
        }
    }

    /// Number of complex chars in the table.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Simple demo table with a few hanzi → pinyin-initial entries for
    /// smoke-testing.
    pub fn load_demo() -> Self {
        let mut m = Self::new();
        m.insert('机', "j");
        m.insert('场', "c");
        m.insert('你', "n");
        m.insert('好', "h");
        m.insert('中', "z");
        m.insert('国', "g");
        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_lookup() {
        let (m, diags) = CharMapping::parse("机 j\n场 cc\n");
        assert!(diags.is_empty());
        assert_eq!(m.len(), 2);
        assert_eq!(m.simple_chars('机'), Some("j"));
        assert_eq!(m.simple_chars('场'), Some("cc"));
    }

    #[test]
    fn blank_and_padded_lines_are_ignored() {
        let (m, diags) = CharMapping::parse("\n  机 j  \n\n\t\n");
        assert!(diags.is_empty());
        assert_eq!(m.len(), 1);
        assert_eq!(m.simple_chars('机'), Some("j"));
    }

    #[test]
    fn malformed_lines_are_reported_and_skipped() {
        let (m, diags) = CharMapping::parse("机 j\nbadline\n场 c c\n好 h\n");
        assert_eq!(m.len(), 2);
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].line_no, 2);
        assert_eq!(diags[0].kind, DictDiagnosticKind::FieldCount(1));
        assert_eq!(diags[1].line_no, 3);
        assert_eq!(diags[1].kind, DictDiagnosticKind::FieldCount(3));
    }

    #[test]
    fn multi_char_complex_field_is_rejected() {
        let (m, diags) = CharMapping::parse("机场 jc\n");
        assert!(m.is_empty());
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].kind, DictDiagnosticKind::ComplexNotSingleChar);
    }

    #[test]
    fn last_occurrence_wins() {
        let (m, diags) = CharMapping::parse("机 j\n机 g\n");
        assert!(diags.is_empty());
        assert_eq!(m.simple_chars('机'), Some("g"));
    }

    #[test]
    fn absent_chars_self_map() {
        let m = CharMapping::new();
        assert!(m.fuzzy_eq('a', 'a'));
        assert!(!m.fuzzy_eq('a', 'b'));
        assert!(m.fuzzy_eq('机', '机'));
    }

    #[test]
    fn mapped_char_no_longer_matches_itself_unless_listed() {
        let (m, _) = CharMapping::parse("机 j\n");
        assert!(m.fuzzy_eq('机', 'j'));
        assert!(!m.fuzzy_eq('机', '机'));
    }
}
