// crates/heritage-core/src/model/lenient.rs

//! Forgiving field readers for optional record data.
//!
//! Record files are hand-edited, so an optional field sometimes has the wrong
//! shape (`"dateBuilt": 1180`, `"latitude": "53.1"`). Such a field must not
//! cost the whole record: it is coerced when the intent is clear, and
//! otherwise read as absent with a warning.
//!
//! Each reader is meant for `#[serde(default, deserialize_with = "...")]`.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "text",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

fn coerce_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => {
            warn!(found = kind(&other), "expected text, ignoring field");
            None
        }
    }
}

fn coerce<T: DeserializeOwned>(value: Value) -> Option<T> {
    if value.is_null() {
        return None;
    }
    let found = kind(&value);
    match serde_json::from_value(value) {
        Ok(v) => Some(v),
        Err(e) => {
            warn!(
                expected = std::any::type_name::<T>(),
                found,
                error = %e,
                "ill-typed field, ignoring it"
            );
            None
        }
    }
}

/// Any optional group: absent when it does not have the expected shape.
pub(crate) fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(coerce(Value::deserialize(deserializer)?))
}

/// Text; numbers and booleans are kept in their JSON spelling.
pub(crate) fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(coerce_text(Value::deserialize(deserializer)?))
}

/// Like [`text`], with an empty string standing in for "absent".
pub(crate) fn text_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(text(deserializer)?.unwrap_or_default())
}

/// A number, also accepted as numeric text.
pub(crate) fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::Number(n) => n.as_f64(),
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Some(n),
            _ => {
                warn!(value = %s, "expected a number, ignoring field");
                None
            }
        },
        other => {
            warn!(found = kind(&other), "expected a number, ignoring field");
            None
        }
    })
}

/// A boolean, also accepted as `"true"`/`"false"`/`"yes"`/`"no"`.
pub(crate) fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::Bool(b) => Some(b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" => Some(true),
            "false" | "no" => Some(false),
            _ => {
                warn!(value = %s, "expected a boolean, ignoring field");
                None
            }
        },
        other => {
            warn!(found = kind(&other), "expected a boolean, ignoring field");
            None
        }
    })
}

/// A list of labels. A lone string is a one-item list; items that are not
/// text-like are dropped.
pub(crate) fn text_list<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<String>>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::Array(items) => Some(items.into_iter().filter_map(coerce_text).collect()),
        Value::String(s) => Some(vec![s]),
        other => {
            warn!(found = kind(&other), "expected a list, ignoring field");
            None
        }
    })
}

/// A list of groups; items that do not fit are dropped one by one.
pub(crate) fn list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::Array(items) => Some(items.into_iter().filter_map(coerce).collect()),
        other => {
            warn!(found = kind(&other), "expected a list, ignoring field");
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize)]
    struct Fields {
        #[serde(default, deserialize_with = "text")]
        text: Option<String>,
        #[serde(default, deserialize_with = "number")]
        number: Option<f64>,
        #[serde(default, deserialize_with = "flag")]
        flag: Option<bool>,
        #[serde(default, deserialize_with = "text_list")]
        labels: Option<Vec<String>>,
        #[serde(default, deserialize_with = "list")]
        pairs: Option<Vec<(u8, u8)>>,
        #[serde(default, deserialize_with = "optional")]
        nested: Option<Vec<u8>>,
    }

    fn read(json: &str) -> Fields {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn scalars_are_coerced_when_the_intent_is_clear() {
        let p = read(r#"{"text": 1180, "number": " 53.1 ", "flag": "Yes"}"#);
        assert_eq!(p.text.as_deref(), Some("1180"));
        assert_eq!(p.number, Some(53.1));
        assert_eq!(p.flag, Some(true));
    }

    #[test]
    fn unusable_values_read_as_absent() {
        let p = read(r#"{"text": {"a": 1}, "number": "north", "flag": 2, "nested": "x"}"#);
        assert!(p.text.is_none());
        assert!(p.number.is_none());
        assert!(p.flag.is_none());
        assert!(p.nested.is_none());
    }

    #[test]
    fn nulls_and_missing_fields_are_absent() {
        let p = read(r#"{"text": null, "labels": null}"#);
        assert!(p.text.is_none());
        assert!(p.labels.is_none());
        assert!(p.pairs.is_none());
    }

    #[test]
    fn lists_drop_only_the_bad_items() {
        let p = read(r#"{"labels": ["Castle", 3, {"x": 1}, null], "pairs": [[1, 2], "bad", [3, 4]]}"#);
        assert_eq!(p.labels, Some(vec!["Castle".to_string(), "3".to_string()]));
        assert_eq!(p.pairs, Some(vec![(1, 2), (3, 4)]));
    }

    #[test]
    fn single_label_becomes_a_list() {
        assert_eq!(read(r#"{"labels": "Coastal"}"#).labels, Some(vec!["Coastal".to_string()]));
    }
}
