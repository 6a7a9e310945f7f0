//! Property rules and the property registry.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::declarations::Declarations;
use crate::theme::Theme;
use crate::value::StyleValue;

/// Rewrites a leaf value before it is assigned to its physical properties.
pub type Transform = Arc<dyn Fn(StyleValue, &Theme) -> StyleValue + Send + Sync>;

/// Physical property names after theme evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyNames {
    /// A single target property.
    One(String),
    /// Fan-out: the value is assigned to every listed property.
    Many(Vec<String>),
}

/// Physical property names a logical property resolves to.
#[derive(Clone)]
pub enum Properties {
    Fixed(PropertyNames),
    Themed(Arc<dyn Fn(&Theme) -> PropertyNames + Send + Sync>),
}

impl Properties {
    pub fn one(name: impl Into<String>) -> Self {
        Properties::Fixed(PropertyNames::One(name.into()))
    }

    pub fn many<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Properties::Fixed(PropertyNames::Many(
            names.into_iter().map(Into::into).collect(),
        ))
    }

    pub fn themed<F>(f: F) -> Self
    where
        F: Fn(&Theme) -> PropertyNames + Send + Sync + 'static,
    {
        Properties::Themed(Arc::new(f))
    }

    pub fn evaluate(&self, theme: &Theme) -> Cow<'_, PropertyNames> {
        match self {
            Properties::Fixed(names) => Cow::Borrowed(names),
            Properties::Themed(f) => Cow::Owned(f(theme)),
        }
    }
}

impl fmt::Debug for Properties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Properties::Fixed(names) => write!(f, "{:?}", names),
            Properties::Themed(_) => f.write_str("Themed(<fn>)"),
        }
    }
}

/// Declarations merged into the top level whenever a property is used.
#[derive(Clone)]
pub enum StaticRules {
    Fixed(Declarations),
    Themed(Arc<dyn Fn(&Theme) -> Declarations + Send + Sync>),
}

impl StaticRules {
    pub fn evaluate(&self, theme: &Theme) -> Declarations {
        match self {
            StaticRules::Fixed(decls) => decls.clone(),
            StaticRules::Themed(f) => f(theme),
        }
    }
}

impl fmt::Debug for StaticRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StaticRules::Fixed(decls) => write!(f, "{:?}", decls),
            StaticRules::Themed(_) => f.write_str("Themed(<fn>)"),
        }
    }
}

/// How one logical property resolves.
///
/// # Example
///
/// ```rust
/// use tincture::registry::{transforms, PropertyRule};
///
/// // `px` fans out to both horizontal paddings, looking values up in the
/// // theme's `spaces` tokens first.
/// let rule = PropertyRule::properties(["paddingLeft", "paddingRight"])
///     .transform(transforms::token("spaces"));
/// assert!(!rule.is_animation);
/// ```
#[derive(Clone, Default)]
pub struct PropertyRule {
    /// Target physical properties. `None` keeps the logical name.
    pub properties: Option<Properties>,
    /// Value rewrite applied to leaf values.
    pub transform: Option<Transform>,
    /// Object values are animation shorthand fields expanded into a
    /// registered keyframes name.
    pub is_animation: bool,
    /// The (transformed) object value is itself resolved as a style.
    pub is_process_result: bool,
    /// Declarations merged into the top level of a resolution call.
    pub static_rules: Option<StaticRules>,
}

impl PropertyRule {
    /// A rule with no target properties and no transform.
    pub fn new() -> Self {
        Self::default()
    }

    /// A rule targeting a single physical property.
    pub fn property(name: impl Into<String>) -> Self {
        Self {
            properties: Some(Properties::one(name)),
            ..Self::default()
        }
    }

    /// A rule fanning out to several physical properties.
    pub fn properties<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            properties: Some(Properties::many(names)),
            ..Self::default()
        }
    }

    /// Sets the target properties from a theme-dependent function.
    pub fn themed_properties<F>(mut self, f: F) -> Self
    where
        F: Fn(&Theme) -> PropertyNames + Send + Sync + 'static,
    {
        self.properties = Some(Properties::themed(f));
        self
    }

    pub fn transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn animation(mut self) -> Self {
        self.is_animation = true;
        self
    }

    pub fn process_result(mut self) -> Self {
        self.is_process_result = true;
        self
    }

    pub fn static_rules(mut self, rules: Declarations) -> Self {
        self.static_rules = Some(StaticRules::Fixed(rules));
        self
    }

    pub fn themed_static_rules<F>(mut self, f: F) -> Self
    where
        F: Fn(&Theme) -> Declarations + Send + Sync + 'static,
    {
        self.static_rules = Some(StaticRules::Themed(Arc::new(f)));
        self
    }
}

impl fmt::Debug for PropertyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyRule")
            .field("properties", &self.properties)
            .field("transform", &self.transform.as_ref().map(|_| "<fn>"))
            .field("is_animation", &self.is_animation)
            .field("is_process_result", &self.is_process_result)
            .field("static_rules", &self.static_rules)
            .finish()
    }
}

/// A registry entry.
#[derive(Debug, Clone)]
pub enum RegistryEntry {
    /// The logical name is already a physical property.
    PassThrough,
    Rule(PropertyRule),
}

/// Mapping from logical property names to their rules.
///
/// Names absent from the registry pass through unchanged, which keeps new
/// CSS properties usable without a registry update.
///
/// # Example
///
/// ```rust
/// use tincture::registry::{PropertyRegistry, PropertyRule};
///
/// let registry = PropertyRegistry::new()
///     .pass_through("color")
///     .rule("bg", PropertyRule::property("background"));
/// assert!(registry.contains("bg"));
/// assert!(registry.rule_for("margin").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PropertyRegistry {
    entries: HashMap<String, RegistryEntry>,
}

impl PropertyRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a property that maps to itself.
    pub fn pass_through(mut self, name: &str) -> Self {
        self.entries
            .insert(name.to_string(), RegistryEntry::PassThrough);
        self
    }

    /// Registers a rule for a logical property.
    pub fn rule(mut self, name: &str, rule: PropertyRule) -> Self {
        self.entries
            .insert(name.to_string(), RegistryEntry::Rule(rule));
        self
    }

    pub fn get(&self, name: &str) -> Option<&RegistryEntry> {
        self.entries.get(name)
    }

    /// Returns the effective rule for `name`.
    ///
    /// Pass-through entries become a rule targeting `name` itself.
    pub fn rule_for(&self, name: &str) -> Option<Cow<'_, PropertyRule>> {
        match self.entries.get(name)? {
            RegistryEntry::PassThrough => Some(Cow::Owned(PropertyRule::property(name))),
            RegistryEntry::Rule(rule) => Some(Cow::Borrowed(rule)),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_through_targets_itself() {
        let registry = PropertyRegistry::new().pass_through("color");
        let rule = registry.rule_for("color").unwrap();
        let names = rule
            .properties
            .as_ref()
            .unwrap()
            .evaluate(&Theme::new())
            .into_owned();
        assert_eq!(names, PropertyNames::One("color".into()));
        assert!(rule.transform.is_none());
    }

    #[test]
    fn test_unknown_property() {
        let registry = PropertyRegistry::new();
        assert!(registry.rule_for("color").is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_themed_properties() {
        let rule = PropertyRule::new().themed_properties(|theme| {
            if theme.breakpoints().is_some() {
                PropertyNames::One("inlineSize".into())
            } else {
                PropertyNames::One("width".into())
            }
        });
        let names = rule.properties.unwrap().evaluate(&Theme::new()).into_owned();
        assert_eq!(names, PropertyNames::One("width".into()));
    }

    #[test]
    fn test_static_rules_evaluate() {
        let fixed = StaticRules::Fixed(Declarations::new().with("overflow", "hidden"));
        assert_eq!(fixed.evaluate(&Theme::new()).len(), 1);

        let themed = StaticRules::Themed(Arc::new(|_: &Theme| {
            Declarations::new().with("a", 1).with("b", 2)
        }));
        assert_eq!(themed.evaluate(&Theme::new()).len(), 2);
    }

    #[test]
    fn test_rule_debug_hides_functions() {
        let rule = PropertyRule::property("color").transform(Arc::new(|v: StyleValue, _: &Theme| v));
        let debug = format!("{:?}", rule);
        assert!(debug.contains("<fn>"));
        assert!(debug.contains("color"));
    }
}
