//! Property and pseudo-selector registries.
//!
//! This module provides the lookup tables the resolution pass consults:
//!
//! - [`PropertyRegistry`]: Logical property names to [`PropertyRule`]s
//! - [`PseudoRegistry`]: Logical pseudo names to selectors
//! - [`transforms`]: Value transforms for property rules
//!
//! Both registries are read-only once built. [`PropertyRegistry::standard`]
//! and [`PseudoRegistry::standard`] expose process-wide built-in tables.

mod property;
mod pseudo;
mod standard;
pub mod transforms;

pub use property::{
    Properties, PropertyNames, PropertyRegistry, PropertyRule, RegistryEntry, StaticRules,
    Transform,
};
pub use pseudo::{PseudoRegistry, DARK_PSEUDO, DEFAULT_DARK_SELECTOR};
