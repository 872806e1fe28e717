//! Native style objects.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// A native style object: property names mapped to scalar values.
///
/// Properties keep their insertion order. Numbers with no fractional part are
/// stored as integers, so a scaled length such as `0.25 * 16` compares equal
/// to a literal `4`.
///
/// # Example
///
/// ```rust
/// use stylekit::StyleObject;
///
/// let style = StyleObject::new()
///     .number("margin", 0.25 * 16.0)
///     .keyword("flexDirection", "row");
///
/// assert_eq!(style.get_number("margin"), Some(4.0));
/// assert_eq!(style.get_keyword("flexDirection"), Some("row"));
/// assert_eq!(style, StyleObject::from_json(serde_json::json!({"margin": 4, "flexDirection": "row"})).unwrap());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleObject(Map<String, Value>);

impl StyleObject {
    /// Creates an empty style object.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Sets a numeric property, returning the updated object for chaining.
    pub fn number(mut self, prop: &str, value: f64) -> Self {
        self.0.insert(prop.to_string(), number_value(value));
        self
    }

    /// Sets a keyword (string) property, returning the updated object for chaining.
    pub fn keyword(mut self, prop: &str, value: &str) -> Self {
        self.0
            .insert(prop.to_string(), Value::String(value.to_string()));
        self
    }

    /// Sets an arbitrary JSON property value.
    pub fn set(&mut self, prop: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(prop.into(), value.into());
    }

    /// Builds a style object from a JSON object. Returns `None` for any other JSON value.
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    pub fn get(&self, prop: &str) -> Option<&Value> {
        self.0.get(prop)
    }

    pub fn get_number(&self, prop: &str) -> Option<f64> {
        self.0.get(prop).and_then(Value::as_f64)
    }

    pub fn get_keyword(&self, prop: &str) -> Option<&str> {
        self.0.get(prop).and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Copies every property of `other` onto `self`, overriding existing ones.
    pub fn merge(&mut self, other: &StyleObject) {
        for (k, v) in &other.0 {
            self.0.insert(k.clone(), v.clone());
        }
    }

    /// Merges an ordered list of resolved styles into a single object.
    ///
    /// Later styles override earlier ones, which is how a view applies the
    /// list produced by the registry.
    pub fn flatten<'a>(styles: impl IntoIterator<Item = &'a StyleObject>) -> StyleObject {
        styles.into_iter().fold(StyleObject::new(), |mut acc, s| {
            acc.merge(s);
            acc
        })
    }
}

fn number_value(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Value::Number(Number::from(value as i64))
    } else {
        Number::from_f64(value).map_or(Value::Null, Value::Number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_whole_numbers_stored_as_integers() {
        let style = StyleObject::new().number("margin", 4.0);
        assert_eq!(style.get("margin"), Some(&json!(4)));
    }

    #[test]
    fn test_fractional_numbers_kept() {
        let style = StyleObject::new().number("opacity", 0.025);
        assert_eq!(style.get_number("opacity"), Some(0.025));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let style = StyleObject::new()
            .number("top", 0.0)
            .number("bottom", 0.0)
            .number("right", 0.0)
            .number("left", 0.0);
        let props: Vec<&str> = style.iter().map(|(k, _)| k).collect();
        assert_eq!(props, vec!["top", "bottom", "right", "left"]);
    }

    #[test]
    fn test_from_json_rejects_non_objects() {
        assert!(StyleObject::from_json(json!("m1")).is_none());
        assert!(StyleObject::from_json(json!([1, 2])).is_none());
        assert!(StyleObject::from_json(json!({"flex": 1})).is_some());
    }

    #[test]
    fn test_flatten_later_overrides_earlier() {
        let a = StyleObject::new().number("margin", 4.0).number("flex", 1.0);
        let b = StyleObject::new().number("margin", 8.0);
        let merged = StyleObject::flatten([&a, &b]);
        assert_eq!(merged.get_number("margin"), Some(8.0));
        assert_eq!(merged.get_number("flex"), Some(1.0));
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let style = StyleObject::new().keyword("textAlign", "center");
        let text = serde_json::to_string(&style).unwrap();
        assert_eq!(text, r#"{"textAlign":"center"}"#);
    }
}
