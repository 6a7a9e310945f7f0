//! CSS text rendering for resolved declarations.

use std::fmt::{self, Write};

use cssparser::serialize_identifier;
use tracing::debug;

use super::{Declaration, Declarations};

impl Declarations {
    /// Renders the declarations as CSS rules scoped to `selector`.
    ///
    /// - Property names are converted to kebab-case (`backgroundColor` becomes
    ///   `background-color`, `WebkitLineClamp` becomes `-webkit-line-clamp`).
    /// - Nested keys containing `&` replace it with the parent selector.
    /// - Nested keys starting with `@` wrap the parent rule in that at-rule.
    /// - Any other nested key becomes a descendant selector.
    ///
    /// Values and selectors are written verbatim, not escaped. Entries
    /// containing `{`, `}` or `;` would end the enclosing rule early, so they
    /// are skipped (and logged at `debug`). Values that need those characters,
    /// such as quoted `content` strings, must go through a separate channel.
    pub fn to_css(&self, selector: &str) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_css(selector, &mut out);
        out
    }

    /// Writes the rules produced by [`to_css`](Self::to_css) into `dest`.
    pub fn write_css<W: Write>(&self, selector: &str, dest: &mut W) -> fmt::Result {
        let mut body = String::new();
        let mut nested = Vec::new();

        for (key, declaration) in self {
            match declaration {
                Declaration::Value(value) => {
                    let value = value.to_string();
                    if breaks_rule(&value) {
                        debug!(property = %key, value = %value, "skipping value that would end the rule");
                        continue;
                    }
                    write_property(key, &mut body)?;
                    write!(body, ":{};", value)?;
                }
                Declaration::Block(_) if breaks_rule(key) => {
                    debug!(selector = %key, "skipping block with a selector that would end the rule");
                }
                Declaration::Block(block) => nested.push((key.as_str(), block)),
            }
        }

        if !body.is_empty() {
            write!(dest, "{}{{{}}}", selector, body)?;
        }

        for (key, block) in nested {
            if key.starts_with('@') {
                write!(dest, "{}{{", key)?;
                block.write_css(selector, dest)?;
                dest.write_char('}')?;
            } else {
                block.write_css(&nest_selector(selector, key), dest)?;
            }
        }

        Ok(())
    }

    /// Renders the declarations as the body of an `@keyframes` rule.
    pub(crate) fn write_keyframes<W: Write>(&self, name: &str, dest: &mut W) -> fmt::Result {
        dest.write_str("@keyframes ")?;
        serialize_identifier(name, dest)?;
        dest.write_char('{')?;
        for (offset, declaration) in self {
            if let Declaration::Block(step) = declaration {
                step.write_css(offset, dest)?;
            }
        }
        dest.write_char('}')
    }
}

fn breaks_rule(text: &str) -> bool {
    text.contains(['{', '}', ';'])
}

fn write_property<W: Write>(key: &str, dest: &mut W) -> fmt::Result {
    serialize_identifier(&property_name(key), dest)
}

/// Converts a camelCase property name into its CSS form.
///
/// Custom properties (`--name`) and names that are already kebab-case are
/// returned unchanged.
///
/// # Example
///
/// ```rust
/// use tincture::declarations::property_name;
///
/// assert_eq!(property_name("backgroundColor"), "background-color");
/// assert_eq!(property_name("WebkitLineClamp"), "-webkit-line-clamp");
/// assert_eq!(property_name("msFlex"), "-ms-flex");
/// assert_eq!(property_name("--ui-ring"), "--ui-ring");
/// ```
pub fn property_name(key: &str) -> String {
    if key.starts_with("--") {
        return key.to_string();
    }

    let mut name = String::with_capacity(key.len() + 4);
    if key.starts_with("ms") && key[2..].starts_with(|c: char| c.is_ascii_uppercase()) {
        name.push('-');
    }
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            name.push('-');
            name.push(c.to_ascii_lowercase());
        } else {
            name.push(c);
        }
    }
    name
}

/// Combines a parent selector list with a nested selector list.
fn nest_selector(parent: &str, nested: &str) -> String {
    let parents: Vec<&str> = parent.split(',').map(str::trim).collect();
    let mut combined = Vec::new();

    for part in nested.split(',').map(str::trim) {
        for p in &parents {
            if part.contains('&') {
                combined.push(part.replace('&', p));
            } else {
                combined.push(format!("{} {}", p, part));
            }
        }
    }

    combined.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_rule() {
        let decls = Declarations::new()
            .with("backgroundColor", "red")
            .with("paddingLeft", "4px");
        assert_eq!(
            decls.to_css(".a"),
            ".a{background-color:red;padding-left:4px;}"
        );
    }

    #[test]
    fn test_media_query_wraps_parent() {
        let decls = Declarations::new().with("padding", 4).with(
            "@media screen and (max-width: 48em)",
            Declarations::new().with("padding", 2),
        );
        assert_eq!(
            decls.to_css(".a"),
            ".a{padding:4;}@media screen and (max-width: 48em){.a{padding:2;}}"
        );
    }

    #[test]
    fn test_selector_lists_are_combined() {
        let decls = Declarations::new().with(
            "&:hover, &[data-hover]",
            Declarations::new().with("color", "blue"),
        );
        assert_eq!(
            decls.to_css(".a, .b"),
            ".a:hover,.b:hover,.a[data-hover],.b[data-hover]{color:blue;}"
        );
    }

    #[test]
    fn test_descendant_selector() {
        let decls = Declarations::new().with("svg", Declarations::new().with("fill", "currentColor"));
        assert_eq!(decls.to_css(".icon"), ".icon svg{fill:currentColor;}");
    }

    #[test]
    fn test_leading_selector_block_placeholder() {
        let decls = Declarations::new().with(
            ".ui-dark &",
            Declarations::new().with("color", "white"),
        );
        assert_eq!(decls.to_css(".a"), ".ui-dark .a{color:white;}");
    }

    #[test]
    fn test_keyframes_rule() {
        let frames = Declarations::new()
            .with("from", Declarations::new().with("opacity", 0))
            .with("to", Declarations::new().with("opacity", 1));
        let mut out = String::new();
        frames.write_keyframes("animation-abc", &mut out).unwrap();
        assert_eq!(
            out,
            "@keyframes animation-abc{from{opacity:0;}to{opacity:1;}}"
        );
    }

    #[test]
    fn test_rule_breaking_entries_are_skipped() {
        let decls = Declarations::new()
            .with("color", "red;}body{display:none")
            .with("opacity", 1)
            .with("}.evil{", Declarations::new().with("color", "blue"))
            .with("&:hover", Declarations::new().with("width", "calc(100% - 1px)"));
        assert_eq!(
            decls.to_css(".a"),
            ".a{opacity:1;}.a:hover{width:calc(100% - 1px);}"
        );
    }

    #[test]
    fn test_empty_declarations_render_nothing() {
        assert_eq!(Declarations::new().to_css(".a"), "");
    }
}
