//! Analysis settings.
//!
//! Defaults reproduce AsciiDoc's own behavior, so an empty TOML file and
//! [`AnalysisConfig::default`] are equivalent.
//!
//! ```toml
//! identifier_pattern = "[a-z][a-z0-9-]*"
//! section_id_prefix = ""
//! section_id_separator = "-"
//! ```

use crate::error::{AnalysisError, Result};
use crate::identifier::{IdentifierGrammar, DEFAULT_IDENTIFIER_PATTERN};
use crate::section_ids::SectionIdStyle;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Pattern a block id or anchor must match in full (unanchored).
    pub identifier_pattern: String,

    /// Prepended to section ids derived from headings (`idprefix`).
    pub section_id_prefix: String,

    /// Replaces spaces, dots and hyphens in derived section ids
    /// (`idseparator`).
    pub section_id_separator: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            identifier_pattern: DEFAULT_IDENTIFIER_PATTERN.to_string(),
            section_id_prefix: "_".to_string(),
            section_id_separator: "_".to_string(),
        }
    }
}

impl AnalysisConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| AnalysisError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        log::debug!("loaded analysis config from {}", path.display());
        Ok(config)
    }

    pub fn identifier_grammar(&self) -> Result<IdentifierGrammar> {
        if self.identifier_pattern == DEFAULT_IDENTIFIER_PATTERN {
            return Ok(IdentifierGrammar::asciidoc().clone());
        }
        IdentifierGrammar::new(&self.identifier_pattern)
    }

    pub fn section_id_style(&self) -> SectionIdStyle {
        SectionIdStyle {
            prefix: self.section_id_prefix.clone(),
            separator: self.section_id_separator.clone(),
        }
    }
}
