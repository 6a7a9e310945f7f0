//! Resolved style declarations, the engine's output.
//!
//! [`Declarations`] is a flat, insertion-ordered mapping from physical
//! property names (or selectors, for nested blocks) to [`Declaration`]s. It
//! serializes to nested JSON objects and renders 1:1 to CSS text with
//! [`Declarations::to_css`].

mod css;

use indexmap::map::Iter;
use indexmap::IndexMap;
use serde::Serialize;

use crate::value::Scalar;

pub use css::property_name;

/// A resolved value: a concrete declaration or a nested selector block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Declaration {
    Value(Scalar),
    Block(Declarations),
}

impl Declaration {
    pub fn as_value(&self) -> Option<&Scalar> {
        match self {
            Declaration::Value(v) => Some(v),
            Declaration::Block(_) => None,
        }
    }

    pub fn as_block(&self) -> Option<&Declarations> {
        match self {
            Declaration::Block(b) => Some(b),
            Declaration::Value(_) => None,
        }
    }
}

impl From<Scalar> for Declaration {
    fn from(s: Scalar) -> Self {
        Declaration::Value(s)
    }
}

impl From<Declarations> for Declaration {
    fn from(d: Declarations) -> Self {
        Declaration::Block(d)
    }
}

macro_rules! scalar_into_declaration {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Declaration {
                fn from(v: $ty) -> Self {
                    Declaration::Value(Scalar::from(v))
                }
            }
        )*
    };
}

scalar_into_declaration!(&str, String, bool, i32, i64, u32, f64);

/// Flat mapping of physical properties and selector blocks.
///
/// # Example
///
/// ```rust
/// use tincture::Declarations;
///
/// let decls = Declarations::new()
///     .with("color", "black")
///     .with("&:hover", Declarations::new().with("color", "gray"));
/// assert_eq!(decls.to_css(".btn"), ".btn{color:black;}.btn:hover{color:gray;}");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Declarations {
    entries: IndexMap<String, Declaration>,
}

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, returning the updated mapping for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Declaration>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets `key`, overwriting any previous value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Declaration>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Declaration> {
        self.entries.get(key)
    }

    /// Returns the scalar stored under `key`, if any.
    pub fn value(&self, key: &str) -> Option<&Scalar> {
        self.get(key).and_then(Declaration::as_value)
    }

    /// Returns the nested block stored under `key`, if any.
    pub fn block(&self, key: &str) -> Option<&Declarations> {
        self.get(key).and_then(Declaration::as_block)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> Iter<'_, String, Declaration> {
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
    /// Blocks under the same key merge recursively; any other collision is
    /// won by `other`.
    pub fn merge(mut self, other: Declarations) -> Declarations {
        for (key, value) in other.entries {
            self = self.merge_entry(key, value);
        }
        self
    }

    /// Deep-merges `block` under `key`, creating the block if absent.
    pub fn merge_block(self, key: impl Into<String>, block: Declarations) -> Declarations {
        self.merge_entry(key.into(), Declaration::Block(block))
    }

    fn merge_entry(mut self, key: String, value: Declaration) -> Declarations {
        match value {
            Declaration::Block(incoming) => {
                if let Some(Declaration::Block(existing)) = self.entries.get_mut(&key) {
                    let current = std::mem::take(existing);
                    *existing = current.merge(incoming);
                } else {
                    self.entries.insert(key, Declaration::Block(incoming));
                }
            }
            value => {
                self.entries.insert(key, value);
            }
        }
        self
    }
}

impl<'a> IntoIterator for &'a Declarations {
    type Item = (&'a String, &'a Declaration);
    type IntoIter = Iter<'a, String, Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
