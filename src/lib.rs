//! # Tincture - Theme-Aware Style Resolution
//!
//! Tincture compiles nested, responsive, theme-aware style descriptions into
//! flat style declarations ready for a styling runtime.
//!
//! ## Core Concepts
//!
//! - [`StyleObject`]: The style description, a map of logical or physical
//!   property names to [`StyleValue`]s
//! - [`Theme`]: Breakpoints and design tokens the description is resolved against
//! - [`StyleEngine`]: Runs the expansion and resolution passes
//! - [`Declarations`]: The flat output, serializable and renderable as CSS
//!
//! ## Value Shapes
//!
//! | Shape | Example | Result |
//! |-------|---------|--------|
//! | Scalar | `color: "red"` | `color: red` |
//! | Color-mode pair | `color: ["black", "white"]` | base value plus a dark-mode block |
//! | Responsive | `padding: { base: 4, md: 2 }` | base value plus one media-query block per breakpoint |
//! | Nested | `_hover: { color: "red" }` | selector block |
//! | Function | `StyleValue::func(\|theme\| ...)` | evaluated against the theme |
//!
//! ## Quick Start
//!
//! ```rust
//! use tincture::{css, Breakpoints, StyleObject, StyleValue, Theme};
//!
//! let theme = Theme::new()
//!     .with_breakpoints(Breakpoints::from_widths([("md", "48em")]))
//!     .add_token("colors", "primary", "#3182ce");
//!
//! let style = StyleObject::new()
//!     .with("color", StyleValue::color_mode("primary", "white"))
//!     .with("px", StyleObject::new().with("base", 4).with("md", 2))
//!     .with("_hover", StyleObject::new().with("opacity", 0.8));
//!
//! let declarations = css(&style, &theme);
//! assert_eq!(
//!     declarations.to_css(".button"),
//!     concat!(
//!         ".button{color:#3182ce;padding-left:4px;padding-right:4px;}",
//!         ".ui-dark .button:not([data-mode]),[data-mode=dark] .button:not([data-mode]),",
//!         ".button[data-mode=dark]{color:white;}",
//!         "@media screen and (max-width: 48em){.button{padding-left:2px;padding-right:2px;}}",
//!         ".button:hover,.button[data-hover]{opacity:0.8;}",
//!     )
//! );
//! ```
//!
//! ## Loading From Configuration
//!
//! Themes and style descriptions deserialize from YAML or JSON. Sequences
//! become color-mode pairs:
//!
//! ```rust
//! use tincture::{css, StyleObject, Theme};
//!
//! let theme = Theme::from_yaml("breakpoints:\n  md: 48em\n").unwrap();
//! let style: StyleObject = serde_yaml::from_str("color: [black, white]\n").unwrap();
//! let declarations = css(&style, &theme);
//! assert_eq!(declarations.len(), 2);
//! ```

pub mod declarations;
pub mod engine;
mod error;
pub mod keyframes;
mod props;
pub mod registry;
pub mod theme;
pub mod value;

pub use declarations::{Declaration, Declarations};
pub use engine::StyleEngine;
pub use error::StyleError;
pub use keyframes::KeyframesRegistry;
pub use props::split_props;
pub use registry::{PropertyRegistry, PropertyRule, PseudoRegistry};
pub use theme::{Breakpoints, Theme};
pub use value::{Scalar, StyleObject, StyleValue};

/// Resolves `style` against `theme` using the standard registries.
///
/// Equivalent to `StyleEngine::new(theme).resolve(style)`.
pub fn css(style: &StyleObject, theme: &Theme) -> Declarations {
    StyleEngine::new(theme).resolve(style)
}
