//! Breakpoint resolution for responsive values.

use crate::value::StyleObject;

/// Key of a responsive object that applies without a media query.
pub const BASE_BREAKPOINT: &str = "base";

/// A named breakpoint and its precomputed media query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakpointQuery {
    pub name: String,
    pub max_width_query: String,
}

/// Ordered breakpoint configuration of a theme.
///
/// # Example
///
/// ```rust
/// use tincture::{Breakpoints, StyleObject};
///
/// let breakpoints = Breakpoints::from_widths([("sm", "30em"), ("md", "48em")]);
/// assert_eq!(
///     breakpoints.query_for("md"),
///     Some("@media screen and (max-width: 48em)")
/// );
///
/// let responsive = StyleObject::new().with("base", 4).with("md", 2);
/// assert!(breakpoints.is_responsive(&responsive));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breakpoints {
    queries: Vec<BreakpointQuery>,
}

impl Breakpoints {
    /// Creates breakpoints from `(name, query)` pairs, keeping their order.
    pub fn new<I, N, Q>(queries: I) -> Self
    where
        I: IntoIterator<Item = (N, Q)>,
        N: Into<String>,
        Q: Into<String>,
    {
        Self {
            queries: queries
                .into_iter()
                .map(|(name, query)| BreakpointQuery {
                    name: name.into(),
                    max_width_query: query.into(),
                })
                .collect(),
        }
    }

    /// Creates breakpoints from `(name, width)` pairs, generating
    /// `@media screen and (max-width: <width>)` queries.
    pub fn from_widths<I, N, W>(widths: I) -> Self
    where
        I: IntoIterator<Item = (N, W)>,
        N: Into<String>,
        W: AsRef<str>,
    {
        Self::new(widths.into_iter().map(|(name, width)| {
            (
                name,
                format!("@media screen and (max-width: {})", width.as_ref()),
            )
        }))
    }

    /// Whether `value` is keyed by breakpoint names.
    ///
    /// True iff at least one key is [`BASE_BREAKPOINT`] or a configured
    /// breakpoint name. Other keys of a responsive object are dropped during
    /// expansion; an object with no recognized key is a plain nested block.
    pub fn is_responsive(&self, value: &StyleObject) -> bool {
        value.keys().any(|key| self.recognizes(key))
    }

    fn recognizes(&self, key: &str) -> bool {
        key == BASE_BREAKPOINT || self.query_for(key).is_some()
    }

    /// Looks up the media query for a breakpoint name.
    pub fn query_for(&self, name: &str) -> Option<&str> {
        self.queries
            .iter()
            .find(|q| q.name == name)
            .map(|q| q.max_width_query.as_str())
    }

    pub fn queries(&self) -> &[BreakpointQuery] {
        &self.queries
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakpoints() -> Breakpoints {
        Breakpoints::new([
            ("sm", "@media (max-width: 480px)"),
            ("md", "@media (max-width: 768px)"),
        ])
    }

    #[test]
    fn test_query_for_known_and_unknown() {
        let bp = breakpoints();
        assert_eq!(bp.query_for("md"), Some("@media (max-width: 768px)"));
        assert_eq!(bp.query_for("xl"), None);
        assert_eq!(bp.query_for(BASE_BREAKPOINT), None);
    }

    #[test]
    fn test_is_responsive() {
        let bp = breakpoints();
        assert!(bp.is_responsive(&StyleObject::new().with("base", 1)));
        assert!(bp.is_responsive(&StyleObject::new().with("sm", 1).with("md", 2)));
        assert!(bp.is_responsive(&StyleObject::new().with("base", 1).with("xl", 2)));
        assert!(!bp.is_responsive(&StyleObject::new().with("color", "red")));
        assert!(!bp.is_responsive(&StyleObject::new().with("xl", 1).with("2xl", 2)));
    }

    #[test]
    fn test_empty_object_is_not_responsive() {
        assert!(!breakpoints().is_responsive(&StyleObject::new()));
    }

    #[test]
    fn test_from_widths_keeps_order() {
        let bp = Breakpoints::from_widths([("lg", "61em"), ("sm", "30em")]);
        let names: Vec<&str> = bp.queries().iter().map(|q| q.name.as_str()).collect();
        assert_eq!(names, vec!["lg", "sm"]);
        assert_eq!(bp.query_for("sm"), Some("@media screen and (max-width: 30em)"));
    }
}
