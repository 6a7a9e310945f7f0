//! Expansion pass: color-mode pairs, responsive objects and theme functions.

use tracing::debug;

use crate::theme::{Breakpoints, Theme, BASE_BREAKPOINT};
use crate::value::{StyleObject, StyleValue};

/// Normalizes one level of a style description.
///
/// For every entry:
///
/// - theme functions are invoked once and `Null` results dropped;
/// - `[light, dark]` pairs become `{ key: light, <dark_selector>: { key: dark } }`;
/// - responsive objects become a `base` entry plus one media-query block per
///   configured breakpoint (unknown breakpoints are dropped);
/// - anything else is kept as-is.
///
/// Partial results are deep-merged, so several color-mode pairs share one
/// dark block. Nested objects are left untouched; they are expanded when the
/// resolution pass recurses into them. A theme without breakpoints disables
/// the pass and the description is returned unchanged.
///
/// Color-mode pairs are only expanded at the top of an entry. A pair nested
/// inside a responsive object (`{ base: [light, dark] }`) reaches the
/// resolution pass as a plain value and keeps only its light value; write
/// the dark value under `_dark` explicitly instead.
///
/// # Example
///
/// ```rust
/// use tincture::engine::expand;
/// use tincture::{Breakpoints, StyleObject, StyleValue, Theme};
///
/// let theme = Theme::new().with_breakpoints(Breakpoints::from_widths([("md", "48em")]));
/// let style = StyleObject::new()
///     .with("color", StyleValue::color_mode("black", "white"))
///     .with("padding", StyleObject::new().with("base", 4).with("md", 2));
///
/// let expanded = expand(&style, &theme, ".dark &");
/// let keys: Vec<&str> = expanded.keys().collect();
/// assert_eq!(
///     keys,
///     vec!["color", ".dark &", "padding", "@media screen and (max-width: 48em)"]
/// );
/// ```
pub fn expand(style: &StyleObject, theme: &Theme, dark_selector: &str) -> StyleObject {
    let Some(breakpoints) = theme.breakpoints() else {
        return style.clone();
    };

    let mut expanded = StyleObject::new();

    for (key, value) in style {
        match value.evaluate(theme).into_owned() {
            StyleValue::Null => continue,
            StyleValue::ColorMode { light, dark } => {
                expanded = expanded.merge(expand_color_mode(key, *light, *dark, dark_selector));
            }
            StyleValue::Object(object) if breakpoints.is_responsive(&object) => {
                expanded = expanded.merge(expand_responsive(key, object, breakpoints));
            }
            value => {
                expanded = expanded.merge(StyleObject::new().with(key.as_str(), value));
            }
        }
    }

    expanded
}

fn expand_color_mode(
    key: &str,
    light: StyleValue,
    dark: StyleValue,
    dark_selector: &str,
) -> StyleObject {
    StyleObject::new()
        .with(key, light)
        .with(dark_selector, StyleObject::new().with(key, dark))
}

fn expand_responsive(key: &str, value: StyleObject, breakpoints: &Breakpoints) -> StyleObject {
    let mut expanded = StyleObject::new();

    for (breakpoint, value) in value {
        if breakpoint == BASE_BREAKPOINT {
            expanded.insert(key, value);
        } else if let Some(query) = breakpoints.query_for(&breakpoint) {
            expanded.insert(query, StyleObject::new().with(key, value));
        } else {
            debug!(property = key, breakpoint = %breakpoint, "dropping unconfigured breakpoint");
        }
    }

    expanded
}
