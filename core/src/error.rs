//! Error kinds surfaced by the search core.
//!
//! Nothing here is fatal to a host: `MappingNotReady` means the caller asked
//! for a scan before the dictionary finished loading and should retry after
//! it does; `Pattern` means the compiled alternation was rejected by the
//! regex engine (only reachable with `escape_literals` disabled).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// Scan or compile requested before a char mapping dictionary was built.
    #[error("complex char to simple char dictionary is not ready yet")]
    MappingNotReady,

    /// The joined alternation failed to compile.
    #[error("failed to compile enriched pattern: {0}")]
    Pattern(#[from] regex::Error),
}
