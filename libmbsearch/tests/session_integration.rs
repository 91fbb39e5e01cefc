//! Session-level integration: dictionary lifecycle and pattern handoff.

use libmbsearch::{Config, SearchError, SearchSession};

#[test]
fn enrich_before_load_reports_not_ready() {
    let session = SearchSession::new();
    let err = session.enrich("jc", "机场").unwrap_err();
    assert!(matches!(err, SearchError::MappingNotReady));
    // The message is what a host surfaces as a user notice.
    assert!(err.to_string().contains("not ready"));
}

#[test]
fn load_then_enrich_roundtrip() {
    let mut session = SearchSession::new();
    let diags = session.load_dict_str("机 jt\n场 cc\n");
    assert!(diags.is_empty());
    assert!(session.is_ready());

    let content = "abc机场xyz";
    let pattern = session.enrich("jc", content).unwrap();
    let hit = pattern.find(content).unwrap();
    assert_eq!(hit.as_str(), "机场");
}

#[test]
fn malformed_dictionary_still_loads() {
    let mut session = SearchSession::new();
    let diags = session.load_dict_str("机 j\nthis line is wrong\n场 c\n");
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].line_no, 2);
    assert!(session.is_ready());
    assert_eq!(session.match_list("jc", "机场").unwrap(), vec!["机场"]);
}

#[test]
fn no_match_pattern_is_inert_not_an_error() {
    let mut session = SearchSession::new();
    session.load_dict_str("机 j\n");
    let pattern = session.enrich("zz", "机场").unwrap();
    assert!(!pattern.is_match("机场"));
    assert!(!pattern.is_match(""));
}

#[test]
fn config_controls_pattern_flags() {
    let mut config = Config::default();
    config.case_insensitive = false;
    let mut session = SearchSession::with_config(config);
    session.load_dict_str("");

    let pattern = session.enrich("Ab", "xAbx").unwrap();
    assert!(pattern.is_match("Ab"));
    assert!(!pattern.is_match("ab"));
}

#[test]
fn metacharacters_in_document_stay_literal() {
    let mut session = SearchSession::new();
    session.load_dict_str("");

    let content = "a.b";
    let pattern = session.enrich("a.b", content).unwrap();
    assert!(pattern.is_match("a.b"));
    assert!(!pattern.is_match("axb"));
}
