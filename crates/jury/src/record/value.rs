use std::fmt;

use serde_json::{Map, Value as JsonValue};

/// A single field value read from a record
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

/// Default string form. Null renders as an empty string.
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Float(v) => write!(f, "{}", v),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Null => Ok(()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u8> for FieldValue {
    fn from(value: u8) -> Self {
        Self::Integer(value as i64)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Integer(value as i64)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Null)
    }
}

impl From<&JsonValue> for FieldValue {
    fn from(value: &JsonValue) -> Self {
        match value {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(b) => Self::Bool(*b),
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => Self::Integer(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            JsonValue::String(s) => Self::Text(s.clone()),
            other => Self::Text(other.to_string()),
        }
    }
}

/// Named-field access shared by every record kind.
///
/// `field_names` returns the record's own key order. Typed records return
/// their declared wire order; raw JSON objects return the order the data
/// source sent the keys in.
pub trait Record {
    fn field_names(&self) -> Vec<String>;

    /// Value of a named field, `None` when the record has no such field
    fn field(&self, name: &str) -> Option<FieldValue>;

    /// Field value in its default string form, empty when missing
    fn field_text(&self, name: &str) -> String {
        self.field(name).map(|v| v.to_string()).unwrap_or_default()
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn field_names(&self) -> Vec<String> {
        (**self).field_names()
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        (**self).field(name)
    }
}

impl Record for Map<String, JsonValue> {
    fn field_names(&self) -> Vec<String> {
        self.keys().cloned().collect()
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        self.get(name).map(FieldValue::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_default_string_form() {
        assert_eq!(FieldValue::from("abc").to_string(), "abc");
        assert_eq!(FieldValue::Integer(5).to_string(), "5");
        assert_eq!(FieldValue::Float(3.0).to_string(), "3");
        assert_eq!(FieldValue::Float(2.5).to_string(), "2.5");
        assert_eq!(FieldValue::Bool(true).to_string(), "true");
        assert_eq!(FieldValue::Null.to_string(), "");
    }

    #[test]
    fn test_json_map_preserves_key_order() {
        let value = json!({"Zeta": 1, "Alpha": "a", "Mid": null});
        let map = value.as_object().unwrap();

        assert_eq!(map.field_names(), vec!["Zeta", "Alpha", "Mid"]);
        assert_eq!(map.field("Zeta"), Some(FieldValue::Integer(1)));
        assert_eq!(map.field("Alpha"), Some(FieldValue::from("a")));
        assert_eq!(map.field("Mid"), Some(FieldValue::Null));
        assert_eq!(map.field("Missing"), None);
    }

    #[test]
    fn test_field_text_missing_is_empty() {
        let value = json!({"Judge": "Smith"});
        let map = value.as_object().unwrap();
        assert_eq!(map.field_text("Judge"), "Smith");
        assert_eq!(map.field_text("Poster_Title"), "");
    }
}
