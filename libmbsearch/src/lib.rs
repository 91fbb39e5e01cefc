//! libmbsearch crate root
//!
//! User-facing layer over `libmbsearch-core`: a `SearchSession` that owns
//! the dictionary lifecycle (load, readiness, reload) and hands enriched
//! search patterns back to a host editor. The host supplies a dictionary
//! text blob or file path, a query typed in simple-character space, and the
//! current document content; it gets back one compiled alternation pattern
//! covering every fuzzy match.
//!
//! Public API exported here:
//! - `SearchSession` from `session`
//! - core types re-exported for callers that drive the pieces directly

pub mod session;
pub use session::SearchSession;

// Convenience re-exports for common types used by callers.
pub use libmbsearch_core::{
    compile, enrich, CharMapping, Config, DictDiagnostic, DictDiagnosticKind, Scanner, SearchError,
};
