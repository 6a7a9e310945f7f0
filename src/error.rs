//! Errors surfaced by configuration loading and top-level resolution.

use std::path::PathBuf;

/// Error returned when a theme or style description cannot be used.
///
/// Resolution itself is permissive: unknown properties, pseudos and
/// breakpoints never produce an error. Only malformed input at the API
/// boundary and configuration loading fail.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    /// A JSON document could not be parsed into a theme or style.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A YAML document could not be parsed into a theme or style.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A configuration file could not be read.
    #[error("failed to read \"{}\": {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A style description evaluated to something other than an object.
    #[error("style description must be an object, found {found}")]
    NotAnObject { found: &'static str },
}
