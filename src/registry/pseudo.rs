//! Pseudo-selector aliases.

use std::collections::HashMap;

/// Logical name of the dark color-mode pseudo.
pub const DARK_PSEUDO: &str = "_dark";

/// Selector used for color-mode pairs when the registry has no `_dark` entry.
pub const DEFAULT_DARK_SELECTOR: &str =
    ".ui-dark &:not([data-mode]), [data-mode=dark] &:not([data-mode]), &[data-mode=dark]";

/// Mapping from logical pseudo names (`_hover`, `_dark`) to selectors.
#[derive(Debug, Clone, Default)]
pub struct PseudoRegistry {
    selectors: HashMap<String, String>,
}

impl PseudoRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a pseudo alias, returning the updated registry for chaining.
    pub fn add(mut self, name: &str, selector: &str) -> Self {
        self.selectors.insert(name.to_string(), selector.to_string());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.selectors.get(name).map(String::as_str)
    }

    /// Translates a key to its selector, or returns it unchanged.
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).unwrap_or(key)
    }

    /// The selector that scopes the dark half of color-mode pairs.
    pub fn dark_selector(&self) -> &str {
        self.get(DARK_PSEUDO).unwrap_or(DEFAULT_DARK_SELECTOR)
    }

    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }
}
