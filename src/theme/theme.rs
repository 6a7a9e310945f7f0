//! Theme struct carrying breakpoints and design tokens.

use indexmap::IndexMap;

use super::breakpoints::Breakpoints;
use crate::value::StyleValue;

/// Design tokens grouped by category (`colors`, `spaces`, `animations`, ...).
pub type TokenTable = IndexMap<String, IndexMap<String, StyleValue>>;

/// The context a style description is resolved against.
///
/// A theme without breakpoints disables the expansion pass entirely, which
/// supports resolving styles outside a themed context.
///
/// # Example
///
/// ```rust
/// use tincture::{Breakpoints, Theme};
///
/// let theme = Theme::new()
///     .with_breakpoints(Breakpoints::from_widths([("md", "48em")]))
///     .add_token("colors", "primary", "#3182ce")
///     .add_token("spaces", "md", "1rem");
///
/// assert!(theme.breakpoints().is_some());
/// assert!(theme.token("colors", "primary").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Theme {
    pub(crate) breakpoints: Option<Breakpoints>,
    pub(crate) tokens: TokenTable,
}

impl Theme {
    /// Creates an empty theme with no breakpoints and no tokens.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the breakpoint configuration, returning the updated theme.
    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = Some(breakpoints);
        self
    }

    /// Adds a design token, returning the updated theme for chaining.
    pub fn add_token(
        mut self,
        category: &str,
        name: &str,
        value: impl Into<StyleValue>,
    ) -> Self {
        self.tokens
            .entry(category.to_string())
            .or_default()
            .insert(name.to_string(), value.into());
        self
    }

    pub fn breakpoints(&self) -> Option<&Breakpoints> {
        self.breakpoints.as_ref()
    }

    /// Looks up a token by category and name.
    pub fn token(&self, category: &str, name: &str) -> Option<&StyleValue> {
        self.tokens.get(category).and_then(|tokens| tokens.get(name))
    }

    /// Returns all tokens of a category.
    pub fn tokens(&self, category: &str) -> Option<&IndexMap<String, StyleValue>> {
        self.tokens.get(category)
    }
}
