//! Match list → compiled alternation pattern.
//!
//! The matched literals are joined with `|` and compiled as one regex with
//! the flags from `Config`, so the host's native search can highlight and
//! jump between every occurrence in a single pass.

use crate::config::Config;
use crate::dict::CharMapping;
use crate::error::SearchError;
use crate::scanner::Scanner;
use regex::{Regex, RegexBuilder};

/// A character class that matches no character: the defined result of
/// compiling an empty match list.
const MATCH_NOTHING: &str = r"[^\s\S]";

/// Compile a list of matched literals into one alternation pattern.
///
/// With `config.escape_literals` (the default) each literal is escaped, so
/// document text containing regex metacharacters stays literal. An empty
/// list compiles to a pattern that deterministically matches nothing.
pub fn compile(matches: &[String], config: &Config) -> Result<Regex, SearchError> {
    let source = if matches.is_empty() {
        MATCH_NOTHING.to_string()
    } else if config.escape_literals {
        matches
            .iter()
            .map(|m| regex::escape(m))
            .collect::<Vec<_>>()
            .join("|")
    } else {
        matches.join("|")
    };

    let pattern = RegexBuilder::new(&source)
        .case_insensitive(config.case_insensitive)
        .multi_line(config.multi_line)
        .build()?;
    Ok(pattern)
}

/// Scan `content` for `query` and compile the result in one step.
pub fn enrich(
    query: &str,
    content: &str,
    dict: &CharMapping,
    config: &Config,
) -> Result<Regex, SearchError> {
    let scanner = Scanner::new(dict, query);
    let matches = scanner.match_list(content);
    compile(&matches, config)
}
