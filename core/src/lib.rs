//! libmbsearch-core
//!
//! Core mapping table, fuzzy scanner and pattern compiler shared by the
//! user-facing `libmbsearch` crate. Given a dictionary that maps a complex
//! character (e.g. a hanzi) to the simple characters it may be approximated
//! by (e.g. pinyin initials), the scanner finds every span of a document that
//! fuzzy-matches a query typed in simple-character space, and the compiler
//! joins those spans into one alternation regex for the host's native search.
//!
//! Public API:
//! - `CharMapping` - complex char → simple chars lookup table
//! - `Scanner` - greedy left-to-right fuzzy scan over document content
//! - `compile` / `enrich` - match list → compiled alternation pattern
//! - `Config` - pattern flags and escaping behavior
//! - `SearchError` - error kinds surfaced to callers

pub mod config;
pub use config::Config;

pub mod dict;
pub use dict::{CharMapping, DictDiagnostic, DictDiagnosticKind};

pub mod error;
pub use error::SearchError;

pub mod scanner;
pub use scanner::Scanner;

pub mod pattern;
pub use pattern::{compile, enrich};
