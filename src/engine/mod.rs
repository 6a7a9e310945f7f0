//! The style resolution engine.
//!
//! Resolution runs in two passes over each level of a description:
//!
//! 1. [`expand`] rewrites color-mode pairs, responsive objects and theme
//!    functions into plain entries.
//! 2. [`StyleEngine`] walks the expanded entries, consulting the property
//!    and pseudo registries, recursing into nested blocks (which are expanded
//!    in turn), expanding animation shorthand and merging the results.

mod animation;
mod expand;
mod resolve;

pub use expand::expand;
pub use resolve::StyleEngine;
