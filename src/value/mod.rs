//! Style description values.
//!
//! This module provides the input side of the engine:
//!
//! - [`StyleValue`]: A tagged value (scalar, color-mode pair, nested object,
//!   or function of the theme)
//! - [`StyleObject`]: An insertion-ordered map of property names to values
//! - [`Scalar`]: Leaf values
//!
//! Descriptions can be built in code with the fluent [`StyleObject::with`]
//! builder, or deserialized from JSON/YAML where a two-element sequence
//! becomes a `[light, dark]` color-mode pair.

mod de;
mod object;
mod scalar;

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::theme::Theme;

pub use object::StyleObject;
pub use scalar::Scalar;

/// A value computed from the active theme at resolution time.
pub type ThemeFn = Arc<dyn Fn(&Theme) -> StyleValue + Send + Sync>;

/// One value in a style description.
#[derive(Clone, Default)]
pub enum StyleValue {
    /// Absent value. Entries holding it are omitted from the output.
    #[default]
    Null,
    /// A leaf value.
    Scalar(Scalar),
    /// A `[light, dark]` pair, expanded into a base rule and a rule scoped
    /// under the dark-mode selector.
    ColorMode {
        light: Box<StyleValue>,
        dark: Box<StyleValue>,
    },
    /// A nested block: pseudo state, selector, responsive map or the
    /// fields of an animation.
    Object(StyleObject),
    /// A value computed from the theme.
    Func(ThemeFn),
}

impl StyleValue {
    /// Creates a value computed from the theme.
    pub fn func<F>(f: F) -> Self
    where
        F: Fn(&Theme) -> StyleValue + Send + Sync + 'static,
    {
        StyleValue::Func(Arc::new(f))
    }

    /// Creates a `[light, dark]` color-mode pair.
    pub fn color_mode(light: impl Into<StyleValue>, dark: impl Into<StyleValue>) -> Self {
        StyleValue::ColorMode {
            light: Box::new(light.into()),
            dark: Box::new(dark.into()),
        }
    }

    /// Builds a value from a sequence, which always denotes a color-mode pair.
    ///
    /// Missing elements become [`StyleValue::Null`]; elements past the second
    /// are ignored.
    pub fn from_sequence(items: Vec<StyleValue>) -> Self {
        let mut items = items.into_iter();
        let light = items.next().unwrap_or_default();
        let dark = items.next().unwrap_or_default();
        StyleValue::color_mode(light, dark)
    }

    /// Invokes theme functions once; other values are borrowed as-is.
    pub fn evaluate(&self, theme: &Theme) -> Cow<'_, StyleValue> {
        match self {
            StyleValue::Func(f) => Cow::Owned(f(theme)),
            other => Cow::Borrowed(other),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, StyleValue::Null)
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            StyleValue::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&StyleObject> {
        match self {
            StyleValue::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            StyleValue::Null => "null",
            StyleValue::Scalar(_) => "scalar",
            StyleValue::ColorMode { .. } => "color-mode pair",
            StyleValue::Object(_) => "object",
            StyleValue::Func(_) => "function",
        }
    }
}

impl fmt::Debug for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Null => f.write_str("Null"),
            StyleValue::Scalar(s) => write!(f, "{:?}", s),
            StyleValue::ColorMode { light, dark } => f
                .debug_struct("ColorMode")
                .field("light", light)
                .field("dark", dark)
                .finish(),
            StyleValue::Object(o) => write!(f, "{:?}", o),
            StyleValue::Func(_) => f.write_str("Func(<fn>)"),
        }
    }
}

// Functions compare by identity.
impl PartialEq for StyleValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (StyleValue::Null, StyleValue::Null) => true,
            (StyleValue::Scalar(a), StyleValue::Scalar(b)) => a == b,
            (
                StyleValue::ColorMode { light, dark },
                StyleValue::ColorMode {
                    light: other_light,
                    dark: other_dark,
                },
            ) => light == other_light && dark == other_dark,
            (StyleValue::Object(a), StyleValue::Object(b)) => a == b,
            (StyleValue::Func(a), StyleValue::Func(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<Scalar> for StyleValue {
    fn from(s: Scalar) -> Self {
        StyleValue::Scalar(s)
    }
}

impl From<StyleObject> for StyleValue {
    fn from(o: StyleObject) -> Self {
        StyleValue::Object(o)
    }
}

impl<T: Into<StyleValue>> From<Option<T>> for StyleValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

macro_rules! scalar_into_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for StyleValue {
                fn from(v: $ty) -> Self {
                    StyleValue::Scalar(Scalar::from(v))
                }
            }
        )*
    };
}

scalar_into_value!(&str, String, bool, i32, i64, u32, f64);
