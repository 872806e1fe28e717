//! Runtime conditions a dynamic style is evaluated against.

use serde_json::Value;

use crate::error::StyleError;

/// The state of one named condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// A plain on/off condition such as `hover`.
    Flag(bool),
    /// A group of sub-conditions such as `media: {sm: true, md: false}`.
    Group(Conditions),
}

impl From<bool> for Condition {
    fn from(value: bool) -> Self {
        Condition::Flag(value)
    }
}

impl From<Conditions> for Condition {
    fn from(group: Conditions) -> Self {
        Condition::Group(group)
    }
}

/// Insertion-ordered map of condition name to [`Condition`].
///
/// Only names present in the map may be referenced by a declaration; a
/// missing name is an error, while a name set to `false` simply contributes
/// nothing.
///
/// # Example
///
/// ```rust
/// use stylekit::Conditions;
///
/// let conditions = Conditions::new()
///     .flag("hover", true)
///     .flag("focus", false)
///     .group("media", Conditions::new().flag("lg", true));
///
/// assert_eq!(conditions.len(), 3);
/// assert!(conditions.get("pressed").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conditions {
    entries: Vec<(String, Condition)>,
}

impl Conditions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a flag condition, returning the updated map for chaining.
    pub fn flag(mut self, name: &str, value: bool) -> Self {
        self.insert(name, Condition::Flag(value));
        self
    }

    /// Adds a group condition, returning the updated map for chaining.
    pub fn group(mut self, name: &str, group: Conditions) -> Self {
        self.insert(name, Condition::Group(group));
        self
    }

    /// Sets a condition. An existing name keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, condition: impl Into<Condition>) {
        let name = name.into();
        let condition = condition.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = condition,
            None => self.entries.push((name, condition)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Condition> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Condition)> {
        self.entries.iter().map(|(n, c)| (n.as_str(), c))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `self` with every entry of `overrides` applied on top.
    pub fn merged(mut self, overrides: &Conditions) -> Self {
        for (name, condition) in overrides.iter() {
            self.insert(name, condition.clone());
        }
        self
    }

    /// Every flag, depth-first in insertion order, with its dotted path.
    pub(crate) fn flattened(&self) -> Vec<(String, bool)> {
        let mut out = Vec::new();
        self.flatten_into("", &mut out);
        out
    }

    fn flatten_into(&self, prefix: &str, out: &mut Vec<(String, bool)>) {
        for (name, condition) in &self.entries {
            let path = if prefix.is_empty() {
                name.clone()
            } else {
                format!("{prefix}.{name}")
            };
            match condition {
                Condition::Flag(value) => out.push((path, *value)),
                Condition::Group(group) => group.flatten_into(&path, out),
            }
        }
    }

    /// Builds conditions from a JSON object of booleans and nested objects.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidStyleDeclaration`] if the value is not an
    /// object or holds anything other than booleans and objects.
    pub fn from_json(value: &Value) -> Result<Self, StyleError> {
        let Value::Object(map) = value else {
            return Err(StyleError::malformed("conditions must be an object"));
        };
        let mut conditions = Conditions::new();
        for (name, value) in map {
            let condition = match value {
                Value::Bool(b) => Condition::Flag(*b),
                Value::Null => Condition::Flag(false),
                Value::Object(_) => Condition::Group(Conditions::from_json(value)?),
                other => {
                    return Err(StyleError::malformed(format!(
                        "condition \"{name}\" must be a boolean or an object, got {other}"
                    )))
                }
            };
            conditions.insert(name.clone(), condition);
        }
        Ok(conditions)
    }
}

impl<const N: usize> From<[(&str, bool); N]> for Conditions {
    fn from(flags: [(&str, bool); N]) -> Self {
        flags
            .into_iter()
            .fold(Conditions::new(), |acc, (name, value)| acc.flag(name, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_keeps_position() {
        let mut conditions = Conditions::from([("hover", true), ("focus", false)]);
        conditions.insert("hover", false);
        let names: Vec<&str> = conditions.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["hover", "focus"]);
        assert_eq!(conditions.get("hover"), Some(&Condition::Flag(false)));
    }

    #[test]
    fn test_from_json_nested() {
        let conditions = Conditions::from_json(&json!({"hover": true, "media": {"sm": true, "md": false}})).unwrap();
        assert_eq!(conditions.get("hover"), Some(&Condition::Flag(true)));
        match conditions.get("media") {
            Some(Condition::Group(g)) => assert_eq!(g.get("md"), Some(&Condition::Flag(false))),
            other => panic!("expected group, got {other:?}"),
        }
    }

    #[test]
    fn test_from_json_preserves_order() {
        let conditions = Conditions::from_json(&json!({"z": true, "a": true, "m": false})).unwrap();
        let names: Vec<&str> = conditions.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_from_json_rejects_scalars() {
        assert!(Conditions::from_json(&json!({"hover": 1})).is_err());
        assert!(Conditions::from_json(&json!(["hover"])).is_err());
    }

    #[test]
    fn test_flattened_paths() {
        let conditions = Conditions::new()
            .flag("hover", true)
            .group("media", Conditions::from([("sm", true), ("md", false)]));
        assert_eq!(
            conditions.flattened(),
            vec![
                ("hover".to_string(), true),
                ("media.sm".to_string(), true),
                ("media.md".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_merged_overrides() {
        let base = Conditions::new().group("media", Conditions::from([("sm", true)]));
        let merged = base.merged(&Conditions::from([("hover", true)]).flag("media", false));
        assert_eq!(merged.get("media"), Some(&Condition::Flag(false)));
        assert_eq!(merged.len(), 2);
    }
}
