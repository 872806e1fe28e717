//! Breakpoint-aware resolution through the `media` condition.

use super::conditions::Conditions;
use super::declaration::DynamicStyle;
use super::resolver::resolve_style;
use crate::error::StyleError;
use crate::media::{ActiveBreakpoints, Breakpoints};
use crate::style::StyleList;

/// Name of the condition group carrying breakpoint flags.
pub const MEDIA_CONDITION: &str = "media";

/// Builds the `media` condition group.
///
/// Every configured breakpoint is present, smallest first, flagged `true`
/// exactly when it is active.
pub fn media_conditions(breakpoints: &Breakpoints, active: &ActiveBreakpoints) -> Conditions {
    breakpoints
        .names()
        .fold(Conditions::new(), |acc, name| {
            acc.flag(name, active.contains(name))
        })
}

/// Resolves a declaration with the `media` group added to `conditions`.
///
/// Caller conditions take precedence over the generated group, so a caller
/// may still pass its own `media` entry.
///
/// # Example
///
/// ```rust
/// use stylekit::{resolve_media_style, Breakpoints, Conditions, DynamicStyle, style_list};
/// use serde_json::json;
///
/// let bps = Breakpoints::default();
/// let decl = DynamicStyle::from_json(&json!([["p1"], {"media": {"md": ["p2"], "xl": ["p4"]}}])).unwrap();
///
/// let out = resolve_media_style(&decl, &Conditions::new(), &bps, &bps.active(900.0)).unwrap();
/// assert_eq!(out, style_list(["p1", "p2"]));
/// ```
pub fn resolve_media_style(
    declaration: &DynamicStyle,
    conditions: &Conditions,
    breakpoints: &Breakpoints,
    active: &ActiveBreakpoints,
) -> Result<StyleList, StyleError> {
    let conditions = Conditions::new()
        .group(MEDIA_CONDITION, media_conditions(breakpoints, active))
        .merged(conditions);
    resolve_style(declaration, &conditions)
}
