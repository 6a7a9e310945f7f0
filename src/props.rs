//! Splitting component props between a wrapped library and the engine.
//!
//! Chart wrappers accept one bag of props that mixes options for the wrapped
//! charting primitive with styling props. [`split_props`] separates the two so
//! the native half can be passed through verbatim and the styling half
//! resolved with [`crate::StyleEngine`].

use crate::value::StyleObject;

/// Splits `props` into `(native, styling)`.
///
/// Entries whose key is listed in `native_keys` go to the first object,
/// everything else to the second. Both keep the input order.
///
/// # Example
///
/// ```rust
/// use tincture::{split_props, StyleObject};
///
/// let props = StyleObject::new()
///     .with("verticalAlign", "top")
///     .with("color", "gray")
///     .with("iconSize", 12);
///
/// let (native, styling) = split_props(&props, &["verticalAlign", "iconSize"]);
/// assert_eq!(native.keys().collect::<Vec<_>>(), vec!["verticalAlign", "iconSize"]);
/// assert_eq!(styling.keys().collect::<Vec<_>>(), vec!["color"]);
/// ```
pub fn split_props<S: AsRef<str>>(
    props: &StyleObject,
    native_keys: &[S],
) -> (StyleObject, StyleObject) {
    let mut native = StyleObject::new();
    let mut styling = StyleObject::new();

    for (key, value) in props {
        if native_keys.iter().any(|k| k.as_ref() == key) {
            native.insert(key.as_str(), value.clone());
        } else {
            styling.insert(key.as_str(), value.clone());
        }
    }

    (native, styling)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declarations::Declarations;
    use crate::engine::StyleEngine;
    use crate::theme::Theme;

    #[test]
    fn test_split_empty() {
        let (native, styling) = split_props(&StyleObject::new(), &["a"]);
        assert!(native.is_empty());
        assert!(styling.is_empty());
    }

    #[test]
    fn test_no_native_keys() {
        let props = StyleObject::new().with("a", 1).with("b", 2);
        let (native, styling) = split_props::<&str>(&props, &[]);
        assert!(native.is_empty());
        assert_eq!(styling, props);
    }

    #[test]
    fn test_styling_half_resolves() {
        let props = StyleObject::new()
            .with("layout", "horizontal")
            .with("bg", "white")
            .with("_hover", StyleObject::new().with("opacity", 0.8));
        let (native, styling) = split_props(&props, &[String::from("layout")]);
        assert_eq!(native.len(), 1);

        let theme = Theme::new();
        let resolved = StyleEngine::new(&theme).resolve(&styling);
        assert_eq!(
            resolved,
            Declarations::new()
                .with("background", "white")
                .with(
                    "&:hover, &[data-hover]",
                    Declarations::new().with("opacity", 0.8)
                )
        );
    }
}
