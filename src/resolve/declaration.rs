//! Dynamic style declarations.
//!
//! A declaration is either a plain static list, or a static list paired with
//! conditional styles. The shape is decided once, when the declaration is
//! built; the resolver never inspects shapes at runtime.
//!
//! # JSON form
//!
//! [`DynamicStyle::from_json`] accepts the compact array notation:
//!
//! | JSON | Declaration |
//! |------|-------------|
//! | `["flx1", "m2"]` | static list |
//! | `[["flx1"], {"hover": ["bw1"]}]` | static list + condition map |
//! | `[[], {"media": {"lg": ["p3"]}}]` | empty static list + nested condition map |
//! | `"flx1"`, `{"flex": 1}`, `12` | one-element static list |
//! | `null`, `false` | empty static list |

use std::rc::Rc;

use serde_json::{Map, Value};

use super::conditions::Conditions;
use crate::error::StyleError;
use crate::style::{StyleList, StyleValue};

/// A function choosing conditional styles from the full condition map.
pub type StyleFn = Rc<dyn Fn(&Conditions) -> StyleList>;

/// Styles attached to one condition name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CondStyles {
    /// Styles applied when the condition is on.
    List(StyleList),
    /// Styles keyed by sub-condition, for grouped conditions such as `media`.
    Nested(CondStyleMap),
}

/// Insertion-ordered map of condition name to [`CondStyles`].
///
/// Output order follows insertion order: `{hover, focus}` always yields the
/// hover styles before the focus styles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CondStyleMap {
    entries: Vec<(String, CondStyles)>,
}

impl CondStyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches `styles` to `condition`, returning the updated map for chaining.
    pub fn when<I, V>(mut self, condition: &str, styles: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<StyleValue>,
    {
        self.insert(
            condition,
            CondStyles::List(styles.into_iter().map(Into::into).collect()),
        );
        self
    }

    /// Attaches a map of sub-condition styles to a grouped condition.
    pub fn nested(mut self, condition: &str, styles: CondStyleMap) -> Self {
        self.insert(condition, CondStyles::Nested(styles));
        self
    }

    /// Sets the styles for a condition. An existing name keeps its position.
    pub fn insert(&mut self, condition: impl Into<String>, styles: CondStyles) {
        let condition = condition.into();
        match self.entries.iter_mut().find(|(n, _)| *n == condition) {
            Some(entry) => entry.1 = styles,
            None => self.entries.push((condition, styles)),
        }
    }

    pub fn get(&self, condition: &str) -> Option<&CondStyles> {
        self.entries
            .iter()
            .find(|(n, _)| n == condition)
            .map(|(_, s)| s)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CondStyles)> {
        self.entries.iter().map(|(n, s)| (n.as_str(), s))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builds a condition map from a JSON object.
    ///
    /// Arrays, strings and falsy values become style lists. An object whose
    /// values are all arrays or objects is read as sub-conditions; any other
    /// object is a literal style object.
    pub fn from_json(map: &Map<String, Value>) -> Result<Self, StyleError> {
        let mut out = CondStyleMap::new();
        for (name, value) in map {
            let styles = match value {
                Value::Object(inner) if is_sub_condition_map(inner) => {
                    CondStyles::Nested(CondStyleMap::from_json(inner)?)
                }
                Value::Array(items) => CondStyles::List(
                    items
                        .iter()
                        .map(StyleValue::from_json)
                        .collect::<Result<_, _>>()?,
                ),
                other => CondStyles::List(vec![StyleValue::from_json(other)?]),
            };
            out.insert(name.clone(), styles);
        }
        Ok(out)
    }
}

fn is_sub_condition_map(map: &Map<String, Value>) -> bool {
    map.values()
        .all(|v| matches!(v, Value::Array(_) | Value::Object(_)))
}

/// How the conditional half of a declaration picks its styles.
#[derive(Clone)]
pub enum ConditionalStyles {
    /// Per-condition styles, evaluated key by key.
    Map(CondStyleMap),
    /// A function given every condition, with full discretion over the result.
    Function(StyleFn),
}

impl std::fmt::Debug for ConditionalStyles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConditionalStyles::Map(map) => f.debug_tuple("Map").field(map).finish(),
            ConditionalStyles::Function(_) => f.write_str("Function(..)"),
        }
    }
}

/// A style declaration that may vary with runtime conditions.
///
/// # Example
///
/// ```rust
/// use stylekit::{resolve_style, CondStyleMap, Conditions, DynamicStyle, style_list};
///
/// let button = DynamicStyle::conditional(
///     style_list(["p2", "br2"]),
///     CondStyleMap::new().when("hover", ["o80"]).when("focus", ["bw1"]),
/// );
///
/// let resolved = resolve_style(&button, &Conditions::from([("hover", true), ("focus", false)])).unwrap();
/// assert_eq!(resolved, style_list(["p2", "br2", "o80"]));
/// ```
#[derive(Debug, Clone)]
pub enum DynamicStyle {
    /// Styles that never depend on conditions.
    Static(StyleList),
    /// Static styles followed by whichever conditional styles are active.
    Conditional {
        base: StyleList,
        styles: ConditionalStyles,
    },
}

impl DynamicStyle {
    /// A static declaration.
    pub fn new(styles: StyleList) -> Self {
        DynamicStyle::Static(styles)
    }

    /// Static styles plus per-condition styles.
    pub fn conditional(base: StyleList, styles: CondStyleMap) -> Self {
        DynamicStyle::Conditional {
            base,
            styles: ConditionalStyles::Map(styles),
        }
    }

    /// Static styles plus styles computed from the conditions.
    pub fn computed<F>(base: StyleList, f: F) -> Self
    where
        F: Fn(&Conditions) -> StyleList + 'static,
    {
        DynamicStyle::Conditional {
            base,
            styles: ConditionalStyles::Function(Rc::new(f)),
        }
    }

    /// The static part of the declaration.
    pub fn base(&self) -> &StyleList {
        match self {
            DynamicStyle::Static(styles) => styles,
            DynamicStyle::Conditional { base, .. } => base,
        }
    }

    pub fn is_static(&self) -> bool {
        matches!(self, DynamicStyle::Static(_))
    }

    /// Builds a declaration from its compact JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidStyleDeclaration`] if a `[static,
    /// conditional]` pair has a conditional part that is not an object, or a
    /// static part that is itself such a pair.
    pub fn from_json(value: &Value) -> Result<Self, StyleError> {
        match value {
            Value::Null | Value::Bool(_) => Ok(DynamicStyle::Static(Vec::new())),
            Value::String(_) | Value::Object(_) | Value::Number(_) => {
                Ok(DynamicStyle::Static(vec![StyleValue::from_json(value)?]))
            }
            Value::Array(items) => match items.as_slice() {
                [Value::Array(base), rest @ ..] if rest.len() <= 1 => {
                    Self::pair_from_json(base, rest.first())
                }
                _ => items
                    .iter()
                    .map(StyleValue::from_json)
                    .collect::<Result<StyleList, _>>()
                    .map(DynamicStyle::Static),
            },
        }
    }

    fn pair_from_json(base: &[Value], conditional: Option<&Value>) -> Result<Self, StyleError> {
        if is_pair(base) {
            return Err(StyleError::malformed(
                "static part cannot itself be a [static, conditional] pair",
            ));
        }
        let base = base
            .iter()
            .map(StyleValue::from_json)
            .collect::<Result<StyleList, _>>()?;
        let styles = match conditional {
            None | Some(Value::Null) => CondStyleMap::new(),
            Some(Value::Object(map)) => CondStyleMap::from_json(map)?,
            Some(other) => {
                return Err(StyleError::malformed(format!(
                    "conditional part must be an object, got {other}"
                )))
            }
        };
        Ok(DynamicStyle::conditional(base, styles))
    }
}

impl Default for DynamicStyle {
    fn default() -> Self {
        DynamicStyle::Static(Vec::new())
    }
}

impl From<StyleList> for DynamicStyle {
    fn from(styles: StyleList) -> Self {
        DynamicStyle::Static(styles)
    }
}

/// `[[...], {...}]`: a list followed by a condition map.
fn is_pair(items: &[Value]) -> bool {
    matches!(items, [Value::Array(_), Value::Object(_)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::style_list;
    use serde_json::json;

    #[test]
    fn test_plain_list_is_static() {
        let decl = DynamicStyle::from_json(&json!(["m1"])).unwrap();
        assert!(decl.is_static());
        assert_eq!(decl.base(), &style_list(["m1"]));
    }

    #[test]
    fn test_falsy_is_empty_static() {
        let decl = DynamicStyle::from_json(&json!(null)).unwrap();
        assert!(decl.is_static());
        assert!(decl.base().is_empty());
    }

    #[test]
    fn test_single_token_and_object() {
        let decl = DynamicStyle::from_json(&json!("flx1")).unwrap();
        assert_eq!(decl.base(), &style_list(["flx1"]));
        let decl = DynamicStyle::from_json(&json!({"margin": 0})).unwrap();
        assert!(matches!(decl.base()[0], StyleValue::Object(_)));
    }

    #[test]
    fn test_pair_is_conditional() {
        let decl = DynamicStyle::from_json(&json!([["m1"], {"x": ["m2"]}])).unwrap();
        match decl {
            DynamicStyle::Conditional {
                base,
                styles: ConditionalStyles::Map(map),
            } => {
                assert_eq!(base, style_list(["m1"]));
                assert_eq!(map.get("x"), Some(&CondStyles::List(style_list(["m2"]))));
            }
            other => panic!("expected conditional, got {other:?}"),
        }
    }

    #[test]
    fn test_single_nested_array_is_conditional_without_map() {
        let decl = DynamicStyle::from_json(&json!([["m1", "p1"]])).unwrap();
        assert!(!decl.is_static());
        assert_eq!(decl.base(), &style_list(["m1", "p1"]));
    }

    #[test]
    fn test_long_array_with_nested_first_is_static() {
        let decl = DynamicStyle::from_json(&json!([["m1"], "p1", "flx1"])).unwrap();
        assert!(decl.is_static());
        assert_eq!(decl.base().len(), 3);
    }

    #[test]
    fn test_non_object_conditional_part_rejected() {
        let err = DynamicStyle::from_json(&json!([["m1"], ["m2"]])).unwrap_err();
        assert!(err.to_string().starts_with("invalid dynamic style declaration"));
        assert!(DynamicStyle::from_json(&json!([["m1"], "hover"])).is_err());
    }

    #[test]
    fn test_nested_pair_as_static_part_rejected() {
        let result = DynamicStyle::from_json(&json!([[["m1"], {"x": ["m2"]}], {"y": ["m3"]}]));
        assert!(result.is_err());
    }

    #[test]
    fn test_sub_condition_map_vs_literal_style() {
        let decl = DynamicStyle::from_json(&json!([[], {
            "media": {"sm": ["p1"], "lg": ["p3"]},
            "hover": {"backgroundColor": "blue"}
        }]))
        .unwrap();
        let DynamicStyle::Conditional {
            styles: ConditionalStyles::Map(map),
            ..
        } = decl
        else {
            panic!("expected condition map");
        };
        assert!(matches!(map.get("media"), Some(CondStyles::Nested(_))));
        match map.get("hover") {
            Some(CondStyles::List(list)) => assert!(matches!(list[0], StyleValue::Object(_))),
            other => panic!("expected literal style, got {other:?}"),
        }
    }

    #[test]
    fn test_numbers_pass_through_as_native_ids() {
        let decl = DynamicStyle::from_json(&json!(12)).unwrap();
        assert_eq!(decl.base(), &vec![StyleValue::from(12i64)]);
        let decl = DynamicStyle::from_json(&json!(["m1", 3])).unwrap();
        assert_eq!(decl.base(), &vec![StyleValue::from("m1"), StyleValue::from(3i64)]);
        let decl = DynamicStyle::from_json(&json!([[7], {"hover": [8]}])).unwrap();
        assert_eq!(decl.base(), &vec![StyleValue::from(7i64)]);
    }

    #[test]
    fn test_builder_keeps_insertion_order() {
        let map = CondStyleMap::new()
            .when("hover", ["a"])
            .when("focus", ["b"])
            .when("hover", ["c"]);
        let names: Vec<&str> = map.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["hover", "focus"]);
        assert_eq!(map.get("hover"), Some(&CondStyles::List(style_list(["c"]))));
    }
}
