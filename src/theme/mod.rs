//! Themes: breakpoint configuration and design tokens.
//!
//! This module provides:
//!
//! - [`Theme`]: Breakpoints plus token tables, with a fluent builder API
//! - [`Breakpoints`]: Responsive-object detection and media query lookup
//! - YAML/JSON loading via [`Theme::from_yaml`], [`Theme::from_json`] and
//!   [`Theme::from_file`]

mod breakpoints;
mod config;
#[allow(clippy::module_inception)]
mod theme;

pub use breakpoints::{BreakpointQuery, Breakpoints, BASE_BREAKPOINT};
pub use theme::{Theme, TokenTable};
