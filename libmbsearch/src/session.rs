//! Search session state.
//!
//! The session owns the char mapping dictionary and the pattern config for
//! one host instance, replacing ambient plugin globals with an explicit
//! struct. The dictionary may arrive late (the host loads it asynchronously
//! at startup), so every scan entry point checks readiness and reports
//! `MappingNotReady` instead of scanning without a table.

use libmbsearch_core::{compile, CharMapping, Config, DictDiagnostic, Scanner, SearchError};
use regex::Regex;
use tracing::info;

/// One host session: dictionary (once loaded) plus pattern flags.
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    dict: Option<CharMapping>,
    config: Config,
}

impl SearchSession {
    /// Create a session with no dictionary loaded and default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with explicit pattern config.
    pub fn with_config(config: Config) -> Self {
        Self { dict: None, config }
    }

    /// Build (or rebuild) the dictionary from raw text.
    ///
    /// Returns the diagnostics for any malformed lines; the dictionary is
    /// usable regardless.
    pub fn load_dict_str(&mut self, dict_text: &str) -> Vec<DictDiagnostic> {
        let (dict, diagnostics) = CharMapping::parse(dict_text);
        info!(
            entries = dict.len(),
            skipped = diagnostics.len(),
            "dictionary loaded"
        );
        self.dict = Some(dict);
        diagnostics
    }

    /// Build (or rebuild) the dictionary from a file on disk.
    pub fn load_dict_file<P: AsRef<std::path::Path>>(
        &mut self,
        path: P,
    ) -> Result<Vec<DictDiagnostic>, std::io::Error> {
        let text = std::fs::read_to_string(path)?;
        Ok(self.load_dict_str(&text))
    }

    /// Has a dictionary been built yet?
    pub fn is_ready(&self) -> bool {
        self.dict.is_some()
    }

    /// The loaded dictionary, if any.
    pub fn dict(&self) -> Option<&CharMapping> {
        self.dict.as_ref()
    }

    /// Pattern config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Mutable pattern config.
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Scan `content` for `query`, returning the matched literals.
    pub fn match_list(&self, query: &str, content: &str) -> Result<Vec<String>, SearchError> {
        let dict = self.dict.as_ref().ok_or(SearchError::MappingNotReady)?;
        Ok(Scanner::new(dict, query).match_list(content))
    }

    /// Scan `content` for `query` and compile the enriched pattern the host
    /// assigns back into its active-search slot.
    pub fn enrich(&self, query: &str, content: &str) -> Result<Regex, SearchError> {
        let matches = self.match_list(query, content)?;
        compile(&matches, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_ready_before_dictionary_load() {
        let session = SearchSession::new();
        assert!(!session.is_ready());
        assert!(matches!(
            session.enrich("j", "机场"),
            Err(SearchError::MappingNotReady)
        ));
        assert!(matches!(
            session.match_list("j", "机场"),
            Err(SearchError::MappingNotReady)
        ));
    }

    #[test]
    fn reload_replaces_dictionary() {
        let mut session = SearchSession::new();
        session.load_dict_str("机 j\n");
        assert_eq!(session.match_list("j", "机场").unwrap(), vec!["机"]);

        session.load_dict_str("场 j\n");
        assert_eq!(session.match_list("j", "机场").unwrap(), vec!["场"]);
    }
}
