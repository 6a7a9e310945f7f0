//! Animation shorthand expansion.

use super::resolve::StyleEngine;
use crate::value::StyleObject;

/// Shorthand fields after the keyframes name, with their defaults, in
/// `animation` shorthand order.
const FIELDS: [(&str, &str); 7] = [
    ("duration", "0s"),
    ("timingFunction", "ease"),
    ("delay", "0s"),
    ("iterationCount", "1"),
    ("direction", "normal"),
    ("fillMode", "none"),
    ("playState", "running"),
];

impl StyleEngine<'_> {
    /// Resolves animation fields into an `animation` shorthand string.
    ///
    /// The `keyframes` block is registered and replaced by its generated
    /// name; missing fields take their CSS initial values.
    pub(crate) fn expand_animation(&self, fields: &StyleObject) -> String {
        let resolved = self.resolve_object(fields, true);
        let keyframes = resolved.block("keyframes").cloned().unwrap_or_default();
        let name = self.register_keyframes(&keyframes);

        let mut shorthand = name;
        for (field, default) in FIELDS {
            shorthand.push(' ');
            match resolved.value(field) {
                Some(value) => shorthand.push_str(&value.to_string()),
                None => shorthand.push_str(default),
            }
        }
        shorthand
    }
}
