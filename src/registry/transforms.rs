//! Value transforms used by property rules.

use std::sync::Arc;

use super::property::Transform;
use crate::theme::Theme;
use crate::value::{Scalar, StyleValue};

/// Wraps a closure as a [`Transform`].
pub fn from_fn<F>(f: F) -> Transform
where
    F: Fn(StyleValue, &Theme) -> StyleValue + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Replaces string values naming a token of `category` with the token.
///
/// Values that are not token names are returned unchanged.
///
/// # Example
///
/// ```rust
/// use tincture::registry::transforms;
/// use tincture::{StyleValue, Theme};
///
/// let theme = Theme::new().add_token("colors", "primary", "#3182ce");
/// let to_color = transforms::token("colors");
///
/// assert_eq!(to_color("primary".into(), &theme), StyleValue::from("#3182ce"));
/// assert_eq!(to_color("red".into(), &theme), StyleValue::from("red"));
/// ```
pub fn token(category: &'static str) -> Transform {
    from_fn(move |value, theme| lookup(category, value, theme))
}

/// Appends `px` to bare numbers.
pub fn px() -> Transform {
    from_fn(|value, _| to_px(value))
}

/// Looks up a token of `category`, then appends `px` to a numeric result.
pub fn token_px(category: &'static str) -> Transform {
    from_fn(move |value, theme| to_px(lookup(category, value, theme)))
}

fn lookup(category: &str, value: StyleValue, theme: &Theme) -> StyleValue {
    let token = match &value {
        StyleValue::Scalar(Scalar::Str(name)) => theme.token(category, name),
        StyleValue::Scalar(n @ (Scalar::Int(_) | Scalar::Float(_))) => {
            theme.token(category, &n.to_string())
        }
        _ => None,
    };
    token.cloned().unwrap_or(value)
}

fn to_px(value: StyleValue) -> StyleValue {
    match value {
        StyleValue::Scalar(n @ (Scalar::Int(_) | Scalar::Float(_))) => {
            StyleValue::from(format!("{}px", n))
        }
        other => other,
    }
}
