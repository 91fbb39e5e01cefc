//! Configuration for pattern compilation.

use serde::{Deserialize, Serialize};

/// Flags controlling how a match list is compiled into a search pattern.
///
/// The defaults reproduce the behavior a host editor expects from its
/// incremental search: case-insensitive, multi-line, and with matched
/// literals escaped so document text can never be misread as pattern syntax.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Compile the pattern with case-insensitive matching
    pub case_insensitive: bool,

    /// Compile the pattern with multi-line semantics (`^`/`$` match at
    /// line boundaries)
    pub multi_line: bool,

    /// Escape regex metacharacters in matched literals before joining them
    /// into the alternation. Disable only when byte-parity with a host that
    /// joins raw text is required.
    pub escape_literals: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            case_insensitive: true,
            multi_line: true,
            escape_literals: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
