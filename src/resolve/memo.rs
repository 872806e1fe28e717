//! Render-cycle memoization of resolved styles.

use std::rc::Rc;

use super::conditions::Conditions;
use super::declaration::{CondStyleMap, ConditionalStyles, DynamicStyle, StyleFn};
use super::resolver::resolve_style;
use crate::error::StyleError;
use crate::style::StyleList;

/// The conditional half of a declaration, as far as the memo can compare it.
#[derive(Clone)]
enum Shape {
    Static,
    Map(CondStyleMap),
    Function(StyleFn),
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Shape::Static, Shape::Static) => true,
            (Shape::Map(a), Shape::Map(b)) => a == b,
            (Shape::Function(a), Shape::Function(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl std::fmt::Debug for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shape::Static => f.write_str("Static"),
            Shape::Map(map) => f.debug_tuple("Map").field(map).finish(),
            Shape::Function(_) => f.write_str("Function(..)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct MemoKey {
    base: StyleList,
    shape: Shape,
    flags: Vec<(String, bool)>,
}

impl MemoKey {
    fn new(declaration: &DynamicStyle, conditions: &Conditions) -> Self {
        let shape = match declaration {
            DynamicStyle::Static(_) => Shape::Static,
            DynamicStyle::Conditional { styles, .. } => match styles {
                ConditionalStyles::Map(map) => Shape::Map(map.clone()),
                ConditionalStyles::Function(f) => Shape::Function(Rc::clone(f)),
            },
        };
        Self {
            base: declaration.base().clone(),
            shape,
            flags: conditions.flattened(),
        }
    }
}

/// Caches the last resolution of a view's declaration.
///
/// A view holds one memo per style-bearing prop and calls
/// [`resolve`](Self::resolve) on every render. The result is recomputed only
/// when the declaration or any condition flag changed.
///
/// Condition maps are compared by value, style functions by identity: a
/// function that reads state it captured keeps the cached result while that
/// state changes. Call [`invalidate`](Self::invalidate) in that case.
///
/// # Example
///
/// ```rust
/// use stylekit::{CondStyleMap, Conditions, DynamicStyle, StyleMemo, style_list};
///
/// let decl = DynamicStyle::conditional(style_list(["p1"]), CondStyleMap::new().when("hover", ["o80"]));
/// let mut memo = StyleMemo::new();
///
/// let idle = memo.resolve(&decl, &Conditions::from([("hover", false)])).unwrap().clone();
/// assert_eq!(idle, style_list(["p1"]));
///
/// let hovered = memo.resolve(&decl, &Conditions::from([("hover", true)])).unwrap();
/// assert_eq!(hovered, &style_list(["p1", "o80"]));
/// assert_eq!(memo.recomputations(), 2);
/// ```
#[derive(Debug, Default)]
pub struct StyleMemo {
    key: Option<MemoKey>,
    value: StyleList,
    recomputations: u64,
}

impl StyleMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached styles, resolving again if the inputs changed.
    ///
    /// Errors are returned to the caller and never cached: the next call
    /// resolves again.
    pub fn resolve(
        &mut self,
        declaration: &DynamicStyle,
        conditions: &Conditions,
    ) -> Result<&StyleList, StyleError> {
        let key = MemoKey::new(declaration, conditions);
        if self.key.as_ref() == Some(&key) {
            log::trace!(target: "stylekit::resolve", "style memo hit");
            return Ok(&self.value);
        }

        log::trace!(target: "stylekit::resolve", "style memo miss, resolving");
        self.key = None;
        self.value = resolve_style(declaration, conditions)?;
        self.key = Some(key);
        self.recomputations += 1;
        Ok(&self.value)
    }

    /// Drops the cached result so the next call resolves again.
    pub fn invalidate(&mut self) {
        self.key = None;
    }

    pub fn is_cached(&self) -> bool {
        self.key.is_some()
    }

    /// Number of times the declaration was actually resolved.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }
}
