//! Evaluation of dynamic style declarations.

use super::conditions::{Condition, Conditions};
use super::declaration::{CondStyleMap, CondStyles, ConditionalStyles, DynamicStyle};
use crate::error::{DeclarationError, StyleError};
use crate::style::StyleList;

/// Resolves a declaration against the active conditions.
///
/// Static entries always come first, followed by the active conditional
/// entries in the order the declaration lists its conditions. Tokens are not
/// looked up here; pass the result to a [`StyleRegistry`](crate::StyleRegistry)
/// for that.
///
/// For a condition map, each named condition is matched as follows:
///
/// | Condition | Styles | Contributes |
/// |-----------|--------|-------------|
/// | absent | any | error: condition not found |
/// | `false` | any | nothing |
/// | `true` | list | the list |
/// | `true` | sub-condition map | every sub-list, as literal styles |
/// | group | sub-condition map | the sub-lists whose sub-condition is on |
/// | group | list | error: shape mismatch |
///
/// Inside a group, a sub-condition missing from the caller's group counts as off.
///
/// # Errors
///
/// Returns [`StyleError::InvalidStyleDeclaration`] if a condition named by
/// the declaration is missing from `conditions`, or a group is matched
/// against a flat list.
///
/// # Example
///
/// ```rust
/// use stylekit::{resolve_style, Conditions, DynamicStyle, style_list};
/// use serde_json::json;
///
/// let decl = DynamicStyle::from_json(&json!([["m1"], {"nested": {"x": ["m2"], "y": ["m3"]}}])).unwrap();
/// let conditions = Conditions::from_json(&json!({"nested": {"y": true}})).unwrap();
/// assert_eq!(resolve_style(&decl, &conditions).unwrap(), style_list(["m1", "m3"]));
/// ```
pub fn resolve_style(
    declaration: &DynamicStyle,
    conditions: &Conditions,
) -> Result<StyleList, StyleError> {
    match declaration {
        DynamicStyle::Static(styles) => Ok(styles.clone()),
        DynamicStyle::Conditional { base, styles } => {
            let mut out = base.clone();
            match styles {
                ConditionalStyles::Function(f) => out.extend(f(conditions)),
                ConditionalStyles::Map(map) => collect_active(map, conditions, true, &mut out)?,
            }
            Ok(out)
        }
    }
}

fn collect_active(
    map: &CondStyleMap,
    conditions: &Conditions,
    strict: bool,
    out: &mut StyleList,
) -> Result<(), StyleError> {
    for (name, styles) in map.iter() {
        let condition = match conditions.get(name) {
            Some(condition) => condition,
            None if strict => {
                return Err(DeclarationError::ConditionNotFound {
                    name: name.to_string(),
                }
                .into())
            }
            None => continue,
        };
        match (condition, styles) {
            (Condition::Flag(false), _) => {}
            (Condition::Flag(true), styles) => push_all(styles, out),
            (Condition::Group(group), CondStyles::Nested(sub)) => {
                collect_active(sub, group, false, out)?
            }
            (Condition::Group(_), CondStyles::List(_)) => {
                return Err(DeclarationError::ShapeMismatch {
                    name: name.to_string(),
                }
                .into())
            }
        }
    }
    Ok(())
}

fn push_all(styles: &CondStyles, out: &mut StyleList) {
    match styles {
        CondStyles::List(list) => out.extend(list.iter().cloned()),
        CondStyles::Nested(sub) => {
            for (_, styles) in sub.iter() {
                push_all(styles, out);
            }
        }
    }
}
