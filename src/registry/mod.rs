//! Registry of shorthand style tokens.
//!
//! A [`StyleRegistry`] maps short tokens such as `"flx1"` or `"mv3"` to native
//! [`StyleObject`]s. Tokens are split into two disjoint namespaces:
//!
//! | Namespace | Tokens |
//! |-----------|--------|
//! | [`Namespace::View`] | flex, position, dimension, spacing, border, opacity |
//! | [`Namespace::Text`] | font size/weight/style, text alignment, text decoration |
//!
//! Length-bearing tokens are scaled from a base unit (16 by default) using
//! the multiplier tables in [`scale`]. The registry is built once and is
//! immutable afterwards; share it by reference.
//!
//! # Lookup
//!
//! Lookups search the requested namespaces in order and return the first
//! hit. A token that exists in none of them is a hard error
//! ([`StyleError::UnknownStyleKey`]), never a silent no-op.

pub mod scale;
mod text;
mod view;

use std::collections::HashMap;

use crate::error::StyleError;
use crate::options::{Options, DEFAULT_BASE_UNIT};
use crate::style::{NativeStyle, StyleObject, StyleValue};

type Entry = (&'static str, StyleObject);

/// A token namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// Layout, spacing, border, position and opacity tokens.
    View,
    /// Font and text tokens.
    Text,
}

impl Namespace {
    /// Both namespaces, view first.
    pub const ALL: [Namespace; 2] = [Namespace::View, Namespace::Text];

    pub fn as_str(self) -> &'static str {
        match self {
            Namespace::View => "view",
            Namespace::Text => "text",
        }
    }
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default)]
struct TokenTable {
    entries: Vec<Entry>,
    index: HashMap<&'static str, usize>,
}

impl TokenTable {
    fn new(entries: Vec<Entry>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, (token, _))| (*token, i))
            .collect();
        Self { entries, index }
    }

    fn get(&self, token: &str) -> Option<&StyleObject> {
        self.index.get(token).map(|&i| &self.entries[i].1)
    }
}

/// Immutable mapping from shorthand tokens to native style objects.
///
/// # Example
///
/// ```rust
/// use stylekit::{Namespace, StyleRegistry, StyleObject, style_list};
///
/// let registry = StyleRegistry::default();
/// assert_eq!(
///     registry.lookup("flx1", &Namespace::ALL).unwrap(),
///     &StyleObject::new().number("flex", 1.0)
/// );
///
/// let resolved = registry.resolve_all(&style_list(["m1", "fwB"])).unwrap();
/// assert_eq!(resolved[0].get_number("margin"), Some(4.0));
/// assert_eq!(resolved[1].get_keyword("fontWeight"), Some("bold"));
///
/// assert!(registry.lookup("foo", &Namespace::ALL).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct StyleRegistry {
    base_unit: f64,
    view: TokenTable,
    text: TokenTable,
}

impl StyleRegistry {
    /// Builds the token catalogue scaled by `base_unit`.
    pub fn new(base_unit: f64) -> Self {
        let view = TokenTable::new(view::view_styles(base_unit));
        let text = TokenTable::new(text::text_styles(base_unit));
        log::debug!(
            target: "stylekit::registry",
            "built style registry: base unit {}, {} view tokens, {} text tokens",
            base_unit,
            view.entries.len(),
            text.entries.len()
        );
        Self {
            base_unit,
            view,
            text,
        }
    }

    /// Builds the catalogue from stylesheet options.
    pub fn from_options(options: &Options) -> Self {
        Self::new(options.base_unit)
    }

    pub fn base_unit(&self) -> f64 {
        self.base_unit
    }

    fn table(&self, namespace: Namespace) -> &TokenTable {
        match namespace {
            Namespace::View => &self.view,
            Namespace::Text => &self.text,
        }
    }

    /// Returns true if `token` exists in `namespace`.
    pub fn contains(&self, token: &str, namespace: Namespace) -> bool {
        self.table(namespace).get(token).is_some()
    }

    /// Iterates the tokens of a namespace in catalogue order.
    pub fn tokens(&self, namespace: Namespace) -> impl Iterator<Item = &'static str> + '_ {
        self.table(namespace).entries.iter().map(|(t, _)| *t)
    }

    /// Total number of tokens across both namespaces.
    pub fn len(&self) -> usize {
        self.view.entries.len() + self.text.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks up `token` in the given namespaces, returning the first hit.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::UnknownStyleKey`] naming the token if no
    /// namespace contains it.
    pub fn lookup(&self, token: &str, namespaces: &[Namespace]) -> Result<&StyleObject, StyleError> {
        namespaces
            .iter()
            .find_map(|ns| self.table(*ns).get(token))
            .ok_or_else(|| StyleError::unknown_key(token))
    }

    /// Resolves a single style value.
    ///
    /// Tokens are replaced by their style object. Every other value (raw
    /// objects, native style IDs, groups, placeholders) passes through
    /// unchanged, which is what lets raw styles sit next to shorthand tokens
    /// in one list.
    pub fn resolve_token(
        &self,
        value: &StyleValue,
        namespaces: &[Namespace],
    ) -> Result<StyleValue, StyleError> {
        match value {
            StyleValue::Token(token) => self
                .lookup(token, namespaces)
                .map(|style| StyleValue::Object(style.clone())),
            other => Ok(other.clone()),
        }
    }

    /// Flattens and resolves styles against both namespaces.
    ///
    /// Nested groups are unwrapped recursively and placeholders dropped, so
    /// the result holds only style objects and native style IDs, in
    /// declaration order.
    pub fn resolve_all(&self, styles: &[StyleValue]) -> Result<Vec<NativeStyle>, StyleError> {
        self.resolve_in(styles, &Namespace::ALL)
    }

    /// Like [`resolve_all`](Self::resolve_all), restricted to view tokens.
    pub fn resolve_view(&self, styles: &[StyleValue]) -> Result<Vec<NativeStyle>, StyleError> {
        self.resolve_in(styles, &[Namespace::View])
    }

    /// Like [`resolve_all`](Self::resolve_all), restricted to text tokens.
    pub fn resolve_text(&self, styles: &[StyleValue]) -> Result<Vec<NativeStyle>, StyleError> {
        self.resolve_in(styles, &[Namespace::Text])
    }

    fn resolve_in(
        &self,
        styles: &[StyleValue],
        namespaces: &[Namespace],
    ) -> Result<Vec<NativeStyle>, StyleError> {
        let mut out = Vec::with_capacity(styles.len());
        self.collect_into(styles, namespaces, &mut out)?;
        Ok(out)
    }

    fn collect_into(
        &self,
        styles: &[StyleValue],
        namespaces: &[Namespace],
        out: &mut Vec<NativeStyle>,
    ) -> Result<(), StyleError> {
        for value in styles {
            match value {
                StyleValue::Token(token) => {
                    out.push(NativeStyle::Object(self.lookup(token, namespaces)?.clone()))
                }
                StyleValue::Object(style) => out.push(NativeStyle::Object(style.clone())),
                StyleValue::Id(id) => out.push(NativeStyle::Id(id.clone())),
                StyleValue::List(inner) => self.collect_into(inner, namespaces, out)?,
                StyleValue::Skip => {}
            }
        }
        Ok(())
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_UNIT)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn spacing_scales_linearly_with_base_unit(base in 1u32..64, step in 1usize..=5) {
            let base = base as f64;
            let registry = StyleRegistry::new(base);
            let token = format!("p{}", step);
            let padding = registry
                .lookup(&token, &[Namespace::View])
                .unwrap()
                .get_number("padding")
                .unwrap();
            prop_assert!((padding - scale::SPACING[step - 1] * base).abs() < 1e-9);
        }

        #[test]
        fn zero_tokens_never_scale(base in 1u32..64) {
            let registry = StyleRegistry::new(base as f64);
            for token in ["m0", "p0", "tp0", "br0", "bw0"] {
                let style = registry.lookup(token, &[Namespace::View]).unwrap();
                prop_assert!(style.iter().all(|(_, v)| v.as_f64() == Some(0.0)));
            }
        }
    }
}
