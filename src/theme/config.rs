//! Loading themes from YAML or JSON configuration.
//!
//! A theme document has an optional `breakpoints` table (`name -> width`)
//! and any number of token categories (`category -> name -> value`):
//!
//! ```yaml
//! breakpoints:
//!   sm: 30em
//!   md: 48em
//! colors:
//!   primary: "#3182ce"
//! spaces:
//!   1: 0.25rem
//!   2: 0.5rem
//! ```
//!
//! Numeric widths are treated as pixels.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

use super::breakpoints::Breakpoints;
use super::theme::Theme;
use crate::error::StyleError;
use crate::value::{Scalar, StyleObject, StyleValue};

#[derive(Deserialize)]
struct ThemeConfig {
    #[serde(default)]
    breakpoints: Option<StyleObject>,
    #[serde(flatten)]
    tokens: IndexMap<String, StyleObject>,
}

impl ThemeConfig {
    fn into_theme(self) -> Theme {
        let breakpoints = self.breakpoints.map(|widths| {
            Breakpoints::from_widths(widths.into_iter().filter_map(|(name, width)| {
                match width {
                    StyleValue::Scalar(Scalar::Str(w)) => Some((name, w)),
                    StyleValue::Scalar(n @ (Scalar::Int(_) | Scalar::Float(_))) => {
                        Some((name, format!("{}px", n)))
                    }
                    other => {
                        debug!(breakpoint = %name, kind = other.kind(), "ignoring breakpoint without a width");
                        None
                    }
                }
            }))
        });

        let tokens = self
            .tokens
            .into_iter()
            .map(|(category, tokens)| (category, tokens.into_iter().collect()))
            .collect();

        Theme {
            breakpoints,
            tokens,
        }
    }
}

impl Theme {
    /// Parses a theme from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Yaml`] if the document is not a valid theme.
    pub fn from_yaml(source: &str) -> Result<Self, StyleError> {
        let config: ThemeConfig = serde_yaml::from_str(source)?;
        Ok(config.into_theme())
    }

    /// Parses a theme from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Json`] if the document is not a valid theme.
    pub fn from_json(source: &str) -> Result<Self, StyleError> {
        let config: ThemeConfig = serde_json::from_str(source)?;
        Ok(config.into_theme())
    }

    /// Loads a theme file. Files ending in `.json` are parsed as JSON,
    /// everything else as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Io`] if the file cannot be read, or a parse
    /// error if its content is not a valid theme.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| StyleError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&source),
            _ => Self::from_yaml(&source),
        }
    }
}
