//! Style values as written in declarations.

use serde_json::{Number, Value};

use super::object::StyleObject;
use crate::error::StyleError;

/// An ordered list of style values. Later entries win once merged downstream.
pub type StyleList = Vec<StyleValue>;

/// A single entry of a style declaration.
///
/// Declarations mix shorthand tokens with raw style objects. `Skip` stands in
/// for a disabled entry so callers can write `cond.then_some("bw1")` inline;
/// it is dropped when the list is resolved against a registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleValue {
    /// A shorthand token such as `"flx1"`, looked up in the registry.
    Token(String),
    /// A raw style object, passed through unchanged.
    Object(StyleObject),
    /// A style the host registered natively, passed through unchanged.
    Id(Number),
    /// A nested group of values, unwrapped when flattened.
    List(Vec<StyleValue>),
    /// A placeholder that contributes nothing.
    Skip,
}

impl StyleValue {
    /// Returns the token text if this value is a shorthand token.
    pub fn as_token(&self) -> Option<&str> {
        match self {
            StyleValue::Token(t) => Some(t),
            _ => None,
        }
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, StyleValue::Skip)
    }

    /// Converts a JSON value into a style value.
    ///
    /// Strings become tokens, objects become style objects, numbers become
    /// native style IDs, arrays become groups, and booleans or `null` become
    /// [`StyleValue::Skip`].
    pub fn from_json(value: &Value) -> Result<Self, StyleError> {
        match value {
            Value::Null | Value::Bool(_) => Ok(StyleValue::Skip),
            Value::String(s) => Ok(StyleValue::Token(s.clone())),
            Value::Object(_) => Ok(StyleValue::Object(
                StyleObject::from_json(value.clone()).unwrap_or_default(),
            )),
            Value::Array(items) => items
                .iter()
                .map(StyleValue::from_json)
                .collect::<Result<Vec<_>, _>>()
                .map(StyleValue::List),
            Value::Number(n) => Ok(StyleValue::Id(n.clone())),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(token: &str) -> Self {
        StyleValue::Token(token.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(token: String) -> Self {
        StyleValue::Token(token)
    }
}

impl From<StyleObject> for StyleValue {
    fn from(object: StyleObject) -> Self {
        StyleValue::Object(object)
    }
}

impl From<i64> for StyleValue {
    fn from(id: i64) -> Self {
        StyleValue::Id(Number::from(id))
    }
}

impl From<bool> for StyleValue {
    fn from(_: bool) -> Self {
        StyleValue::Skip
    }
}

impl<T: Into<StyleValue>> From<Option<T>> for StyleValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(StyleValue::Skip, Into::into)
    }
}

impl<T: Into<StyleValue>> From<Vec<T>> for StyleValue {
    fn from(values: Vec<T>) -> Self {
        StyleValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// Builds a [`StyleList`] from anything convertible into style values.
///
/// # Example
///
/// ```rust
/// use stylekit::{style_list, StyleValue};
///
/// let hovered = false;
/// let list = style_list(["flx1", "m2"]);
/// assert_eq!(list, vec![StyleValue::from("flx1"), StyleValue::from("m2")]);
///
/// let list = style_list([Some("p1"), hovered.then_some("bw1")]);
/// assert_eq!(list[1], StyleValue::Skip);
/// ```
pub fn style_list<I, V>(values: I) -> StyleList
where
    I: IntoIterator<Item = V>,
    V: Into<StyleValue>,
{
    values.into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_string_is_token() {
        let v = StyleValue::from_json(&json!("mv3")).unwrap();
        assert_eq!(v.as_token(), Some("mv3"));
    }

    #[test]
    fn test_from_json_falsy_is_skip() {
        assert!(StyleValue::from_json(&json!(false)).unwrap().is_skip());
        assert!(StyleValue::from_json(&json!(null)).unwrap().is_skip());
    }

    #[test]
    fn test_from_json_nested_array_is_group() {
        let v = StyleValue::from_json(&json!(["m1", ["p1"]])).unwrap();
        assert_eq!(
            v,
            StyleValue::List(vec![
                StyleValue::from("m1"),
                StyleValue::List(vec![StyleValue::from("p1")]),
            ])
        );
    }

    #[test]
    fn test_from_json_number_is_native_id() {
        assert_eq!(StyleValue::from_json(&json!(3)).unwrap(), StyleValue::from(3i64));
        assert_eq!(
            StyleValue::from_json(&json!(2.5)).unwrap(),
            StyleValue::Id(Number::from_f64(2.5).unwrap())
        );
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(StyleValue::from(None::<&str>), StyleValue::Skip);
        assert_eq!(StyleValue::from(Some("m1")), StyleValue::from("m1"));
    }
}
