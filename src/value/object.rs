//! Insertion-ordered style objects.

use std::fmt;

use indexmap::map::{IntoIter, Iter};
use indexmap::IndexMap;

use super::StyleValue;

/// A style description: property names mapped to [`StyleValue`]s.
///
/// Iteration follows insertion order. Inserting an existing key replaces
/// its value but keeps its original position, so a later override of a
/// spread default still lands where the default was declared.
///
/// # Example
///
/// ```rust
/// use tincture::{StyleObject, StyleValue};
///
/// let style = StyleObject::new()
///     .with("color", StyleValue::color_mode("black", "white"))
///     .with("_hover", StyleObject::new().with("color", "gray"));
/// assert_eq!(style.len(), 2);
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct StyleObject {
    entries: IndexMap<String, StyleValue>,
}

impl StyleObject {
    /// Creates an empty style object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, returning the updated object for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts an entry, returning the previous value for that key.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<StyleValue>,
    ) -> Option<StyleValue> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.get(key)
    }

    /// Removes an entry, preserving the order of the remaining ones.
    pub fn remove(&mut self, key: &str) -> Option<StyleValue> {
        self.entries.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> Iter<'_, String, StyleValue> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deep-merges `other` over `self`.
    ///
    /// Two objects under the same key merge recursively; any other
    /// collision is won by `other`.
    pub fn merge(mut self, other: StyleObject) -> StyleObject {
        for (key, value) in other.entries {
            if let StyleValue::Object(incoming) = value {
                if let Some(StyleValue::Object(existing)) = self.entries.get_mut(&key) {
                    let current = std::mem::take(existing);
                    *existing = current.merge(incoming);
                    continue;
                }
                self.entries.insert(key, StyleValue::Object(incoming));
            } else {
                self.entries.insert(key, value);
            }
        }
        self
    }
}

impl fmt::Debug for StyleObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleObject {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for StyleObject {
    type Item = (String, StyleValue);
    type IntoIter = IntoIter<String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a StyleObject {
    type Item = (&'a String, &'a StyleValue);
    type IntoIter = Iter<'a, String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
