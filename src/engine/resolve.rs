//! Resolution pass: registry-driven compilation into declarations.

use tracing::debug;

use super::expand::expand;
use crate::declarations::{Declaration, Declarations};
use crate::error::StyleError;
use crate::keyframes::{self, KeyframesRegistry};
use crate::registry::{PropertyNames, PropertyRegistry, PropertyRule, PseudoRegistry};
use crate::theme::Theme;
use crate::value::{StyleObject, StyleValue};

/// Compiles style descriptions against a theme and a pair of registries.
///
/// The engine only borrows its inputs; every call builds and returns its
/// own [`Declarations`], so one engine can serve any number of callers.
///
/// # Example
///
/// ```rust
/// use tincture::{Breakpoints, Declarations, StyleEngine, StyleObject, Theme};
///
/// let theme = Theme::new()
///     .with_breakpoints(Breakpoints::new([("md", "@media (max-width: 768px)")]));
/// let engine = StyleEngine::new(&theme);
///
/// let style = StyleObject::new()
///     .with("paddingX", 4)
///     .with("_hover", StyleObject::new().with("color", "red"));
///
/// let css = engine.resolve(&style);
/// assert_eq!(
///     css,
///     Declarations::new()
///         .with("paddingLeft", "4px")
///         .with("paddingRight", "4px")
///         .with("&:hover, &[data-hover]", Declarations::new().with("color", "red"))
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StyleEngine<'a> {
    theme: &'a Theme,
    properties: &'a PropertyRegistry,
    pseudos: &'a PseudoRegistry,
    keyframes: &'a KeyframesRegistry,
}

impl<'a> StyleEngine<'a> {
    /// Creates an engine using the standard registries and the process-wide
    /// keyframes registry.
    pub fn new(theme: &'a Theme) -> Self {
        Self::with_registries(theme, PropertyRegistry::standard(), PseudoRegistry::standard())
    }

    /// Creates an engine with caller-supplied registries.
    pub fn with_registries(
        theme: &'a Theme,
        properties: &'a PropertyRegistry,
        pseudos: &'a PseudoRegistry,
    ) -> Self {
        Self {
            theme,
            properties,
            pseudos,
            keyframes: keyframes::global(),
        }
    }

    /// Registers keyframes in `registry` instead of the process-wide one.
    pub fn with_keyframes(mut self, registry: &'a KeyframesRegistry) -> Self {
        self.keyframes = registry;
        self
    }

    pub fn theme(&self) -> &'a Theme {
        self.theme
    }

    /// Runs the expansion pass on one level of `style`.
    pub fn expand(&self, style: &StyleObject) -> StyleObject {
        expand(style, self.theme, self.pseudos.dark_selector())
    }

    /// Resolves a top-level style description.
    pub fn resolve(&self, style: &StyleObject) -> Declarations {
        self.resolve_object(style, false)
    }

    /// Resolves a description given as a value, invoking it first if it is
    /// a function of the theme.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::NotAnObject`] if the description does not
    /// evaluate to an object.
    pub fn resolve_value(&self, style: &StyleValue) -> Result<Declarations, StyleError> {
        match style.evaluate(self.theme).as_ref() {
            StyleValue::Object(object) => Ok(self.resolve(object)),
            other => Err(StyleError::NotAnObject {
                found: other.kind(),
            }),
        }
    }

    pub(crate) fn resolve_object(&self, style: &StyleObject, is_nested: bool) -> Declarations {
        let mut resolved = Declarations::new();

        for (key, value) in self.expand(style) {
            let value = match value {
                StyleValue::Func(f) => f(self.theme),
                value => value,
            };
            if value.is_null() {
                continue;
            }

            let key = self.pseudos.translate(&key).to_string();
            let rule = self.properties.rule_for(&key);
            let is_animation = rule.as_ref().is_some_and(|r| r.is_animation);

            let value = match value {
                StyleValue::Object(nested) if !is_animation => {
                    let block = self.resolve_object(&nested, true);
                    resolved = resolved.merge_block(key, block);
                    continue;
                }
                value => self.transform(rule.as_deref(), value),
            };

            let declaration = match value {
                StyleValue::Object(fields) if is_animation => {
                    Declaration::Value(self.expand_animation(&fields).into())
                }
                StyleValue::Object(object)
                    if rule.as_ref().is_some_and(|r| r.is_process_result) =>
                {
                    Declaration::Block(self.resolve_object(&object, true))
                }
                value => match self.lower(value) {
                    Some(declaration) => declaration,
                    None => continue,
                },
            };

            if !is_nested {
                if let Some(rules) = rule.as_ref().and_then(|r| r.static_rules.as_ref()) {
                    resolved = resolved.merge(rules.evaluate(self.theme));
                }
            }

            let names = rule
                .as_ref()
                .and_then(|r| r.properties.as_ref())
                .map(|p| p.evaluate(self.theme));

            resolved = match (names.as_deref(), declaration) {
                (Some(PropertyNames::Many(names)), declaration) => {
                    for name in names {
                        resolved.insert(name.as_str(), declaration.clone());
                    }
                    resolved
                }
                (Some(PropertyNames::One(_)) | None, Declaration::Block(block)) => {
                    resolved.merge(block)
                }
                (Some(PropertyNames::One(name)), declaration) => {
                    resolved.insert(name.as_str(), declaration);
                    resolved
                }
                (None, declaration) => {
                    resolved.insert(key, declaration);
                    resolved
                }
            };
        }

        resolved
    }

    /// Applies the rule's transform. A `Null` result keeps the input value.
    fn transform(&self, rule: Option<&PropertyRule>, value: StyleValue) -> StyleValue {
        match rule.and_then(|r| r.transform.as_ref()) {
            Some(transform) => {
                let transformed = transform(value.clone(), self.theme);
                if transformed.is_null() {
                    value
                } else {
                    transformed
                }
            }
            None => value,
        }
    }

    /// Converts a leaf value into a declaration without consulting the
    /// registries.
    ///
    /// Color-mode pairs reaching this point (no breakpoint configuration, or
    /// produced by a transform) keep their light value.
    fn lower(&self, value: StyleValue) -> Option<Declaration> {
        match value {
            StyleValue::Null => None,
            StyleValue::Scalar(scalar) => Some(Declaration::Value(scalar)),
            StyleValue::ColorMode { light, .. } => {
                debug!("color-mode pair outside the expansion pass, using the light value");
                self.lower(*light)
            }
            StyleValue::Object(object) => {
                let block = object
                    .into_iter()
                    .filter_map(|(key, value)| Some((key, self.lower(value)?)))
                    .fold(Declarations::new(), |block, (key, declaration)| {
                        block.with(key, declaration)
                    });
                Some(Declaration::Block(block))
            }
            StyleValue::Func(f) => self.lower(f(self.theme)),
        }
    }

    pub(crate) fn register_keyframes(&self, keyframes: &Declarations) -> String {
        self.keyframes.register(keyframes)
    }
}

impl<'a> From<&'a Theme> for StyleEngine<'a> {
    fn from(theme: &'a Theme) -> Self {
        StyleEngine::new(theme)
    }
}
