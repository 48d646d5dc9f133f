//! Untyped property values as handed over by a note's data source.

use serde_json::Value;

/// The string a host object produces when it has no meaningful string form.
pub const GENERIC_OBJECT_REPR: &str = "[object Object]";

/// A property value of unknown shape.
///
/// `Object` carries the result of the value's string conversion, if it
/// exposes one. Objects read from frontmatter have none.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PropertyValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<PropertyValue>),
    Object(Option<String>),
}

impl PropertyValue {
    pub fn is_null(&self) -> bool {
        matches!(self, PropertyValue::Null)
    }

    /// Falsy in the host's sense: null, `false`, zero, NaN or the empty string.
    pub fn is_falsy(&self) -> bool {
        match self {
            PropertyValue::Null => true,
            PropertyValue::Bool(b) => !b,
            PropertyValue::Number(n) => *n == 0.0 || n.is_nan(),
            PropertyValue::Text(s) => s.is_empty(),
            PropertyValue::List(_) | PropertyValue::Object(_) => false,
        }
    }

    /// Renders the value the way the host's string conversion would.
    ///
    /// Numbers use their shortest form (`2`, not `2.0`); lists are joined
    /// with commas; objects without a string form render as
    /// [`GENERIC_OBJECT_REPR`].
    pub fn to_display_string(&self) -> String {
        match self {
            PropertyValue::Null => String::new(),
            PropertyValue::Bool(b) => b.to_string(),
            PropertyValue::Number(n) => format_number(*n),
            PropertyValue::Text(s) => s.clone(),
            PropertyValue::List(items) => items
                .iter()
                .map(PropertyValue::to_display_string)
                .collect::<Vec<_>>()
                .join(","),
            PropertyValue::Object(repr) => repr
                .clone()
                .unwrap_or_else(|| GENERIC_OBJECT_REPR.to_string()),
        }
    }
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        n.to_string()
    }
}

impl From<Value> for PropertyValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => PropertyValue::Null,
            Value::Bool(b) => PropertyValue::Bool(b),
            Value::Number(n) => n.as_f64().map_or(PropertyValue::Null, PropertyValue::Number),
            Value::String(s) => PropertyValue::Text(s),
            Value::Array(items) => {
                PropertyValue::List(items.into_iter().map(PropertyValue::from).collect())
            }
            Value::Object(_) => PropertyValue::Object(None),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::Text(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::Text(s)
    }
}

impl From<f64> for PropertyValue {
    fn from(n: f64) -> Self {
        PropertyValue::Number(n)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Bool(b)
    }
}

impl<T: Into<PropertyValue>> From<Vec<T>> for PropertyValue {
    fn from(items: Vec<T>) -> Self {
        PropertyValue::List(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json() {
        let value = PropertyValue::from(json!(["a.png", 2, null, {"k": 1}]));
        assert_eq!(
            value,
            PropertyValue::List(vec![
                PropertyValue::Text("a.png".into()),
                PropertyValue::Number(2.0),
                PropertyValue::Null,
                PropertyValue::Object(None),
            ])
        );
    }

    #[test]
    fn test_display_string() {
        assert_eq!(PropertyValue::Null.to_display_string(), "");
        assert_eq!(PropertyValue::Number(0.0).to_display_string(), "0");
        assert_eq!(PropertyValue::Number(2.0).to_display_string(), "2");
        assert_eq!(PropertyValue::Number(1.5).to_display_string(), "1.5");
        assert_eq!(PropertyValue::Bool(false).to_display_string(), "false");
        assert_eq!(PropertyValue::from(vec!["a", "b"]).to_display_string(), "a,b");
        assert_eq!(PropertyValue::Object(None).to_display_string(), GENERIC_OBJECT_REPR);
        assert_eq!(
            PropertyValue::Object(Some("[[x.png]]".into())).to_display_string(),
            "[[x.png]]"
        );
    }

    #[test]
    fn test_falsy() {
        assert!(PropertyValue::Null.is_falsy());
        assert!(PropertyValue::Bool(false).is_falsy());
        assert!(PropertyValue::Number(0.0).is_falsy());
        assert!(PropertyValue::Text(String::new()).is_falsy());
        assert!(!PropertyValue::Text(" ".into()).is_falsy());
        assert!(!PropertyValue::List(vec![]).is_falsy());
    }
}
