//! Deserialization of style descriptions from JSON, YAML or any serde format.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

use super::{Scalar, StyleObject, StyleValue};

struct StyleValueVisitor;

impl<'de> Visitor<'de> for StyleValueVisitor {
    type Value = StyleValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a style value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<StyleValue, E> {
        Ok(Scalar::Bool(v).into())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<StyleValue, E> {
        Ok(Scalar::Int(v).into())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<StyleValue, E> {
        Ok(match i64::try_from(v) {
            Ok(n) => Scalar::Int(n),
            Err(_) => Scalar::Float(v as f64),
        }
        .into())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<StyleValue, E> {
        Ok(Scalar::Float(v).into())
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<StyleValue, E> {
        Ok(Scalar::from(v).into())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<StyleValue, E> {
        Ok(Scalar::Str(v).into())
    }

    fn visit_unit<E: de::Error>(self) -> Result<StyleValue, E> {
        Ok(StyleValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<StyleValue, E> {
        Ok(StyleValue::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<StyleValue, D::Error> {
        StyleValue::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<StyleValue, A::Error> {
        let mut items = Vec::new();
        while let Some(item) = seq.next_element::<StyleValue>()? {
            items.push(item);
        }
        Ok(StyleValue::from_sequence(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<StyleValue, A::Error> {
        StyleObjectVisitor.visit_map(map).map(StyleValue::Object)
    }
}

impl<'de> Deserialize<'de> for StyleValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(StyleValueVisitor)
    }
}

struct StyleObjectVisitor;

impl<'de> Visitor<'de> for StyleObjectVisitor {
    type Value = StyleObject;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of style properties")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<StyleObject, A::Error> {
        let mut object = StyleObject::new();
        while let Some((key, value)) = map.next_entry::<PropertyKey, StyleValue>()? {
            object.insert(key.0, value);
        }
        Ok(object)
    }
}

impl<'de> Deserialize<'de> for StyleObject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(StyleObjectVisitor)
    }
}

/// A map key. YAML allows bare numbers (keyframe offsets like `50`), which
/// are stringified.
struct PropertyKey(String);

impl<'de> Deserialize<'de> for PropertyKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeyVisitor;

        impl<'de> Visitor<'de> for KeyVisitor {
            type Value = PropertyKey;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a property name")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<PropertyKey, E> {
                Ok(PropertyKey(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<PropertyKey, E> {
                Ok(PropertyKey(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<PropertyKey, E> {
                Ok(PropertyKey(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<PropertyKey, E> {
                Ok(PropertyKey(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<PropertyKey, E> {
                Ok(PropertyKey(v.to_string()))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<PropertyKey, E> {
                Ok(PropertyKey(v.to_string()))
            }
        }

        deserializer.deserialize_any(KeyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_preserves_order() {
        let style: StyleObject =
            serde_json::from_str(r#"{"z": 1, "a": 2, "m": {"y": 1, "b": 2}}"#).unwrap();
        let keys: Vec<&str> = style.keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);

        let nested: Vec<&str> = style.get("m").unwrap().as_object().unwrap().keys().collect();
        assert_eq!(nested, vec!["y", "b"]);
    }

    #[test]
    fn test_json_sequence_is_color_mode() {
        let style: StyleObject = serde_json::from_str(r#"{"color": ["black", "white"]}"#).unwrap();
        assert_eq!(
            style.get("color"),
            Some(&StyleValue::color_mode("black", "white"))
        );
    }

    #[test]
    fn test_json_null_and_numbers() {
        let style: StyleObject =
            serde_json::from_str(r#"{"a": null, "b": 4, "c": 1.5, "d": true}"#).unwrap();
        assert!(style.get("a").unwrap().is_null());
        assert_eq!(style.get("b"), Some(&StyleValue::from(4)));
        assert_eq!(style.get("c"), Some(&StyleValue::from(1.5)));
        assert_eq!(style.get("d"), Some(&StyleValue::from(true)));
    }

    #[test]
    fn test_yaml_numeric_keys() {
        let yaml = "keyframes:\n  0:\n    opacity: 0\n  100:\n    opacity: 1\n";
        let style: StyleObject = serde_yaml::from_str(yaml).unwrap();
        let frames = style.get("keyframes").unwrap().as_object().unwrap();
        let keys: Vec<&str> = frames.keys().collect();
        assert_eq!(keys, vec!["0", "100"]);
    }

    #[test]
    fn test_top_level_must_be_map() {
        assert!(serde_json::from_str::<StyleObject>("[1, 2]").is_err());
    }
}
