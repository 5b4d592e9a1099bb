use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("invalid identifier pattern `{pattern}`: {source}")]
    InvalidIdentifierPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("identifier pattern `{pattern}` is too large to locate deviations: {source}")]
    IdentifierAutomaton {
        pattern: String,
        #[source]
        source: Box<regex_automata::dfa::dense::BuildError>,
    },

    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
