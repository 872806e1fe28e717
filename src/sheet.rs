//! Stylesheet: the registry, its options and the resolution pipeline.

use crate::error::{OptionsError, StyleError};
use crate::media::{
    active_breakpoints, ActiveBreakpoints, BreakpointTracker, Breakpoints, LiveBreakpoints,
    ViewportProvider,
};
use crate::options::Options;
use crate::registry::StyleRegistry;
use crate::resolve::{resolve_media_style, resolve_style, Conditions, DynamicStyle, StyleMemo};
use crate::style::{NativeStyle, StyleObject};

/// A token registry together with the options it was built from.
///
/// The stylesheet is an ordinary value: build one at startup and pass it to
/// whatever renders views. It takes a declaration all the way to native
/// style objects:
///
/// 1. the declaration is resolved against the conditions,
/// 2. the resulting tokens are looked up in the registry.
///
/// # Example
///
/// ```rust
/// use stylekit::{Conditions, DynamicStyle, Options, StyleSheet};
/// use serde_json::json;
///
/// let sheet = StyleSheet::new(Options::new().base_unit(8.0)).unwrap();
/// let decl = DynamicStyle::from_json(&json!([["flx1", "p2"], {"hover": ["o80"]}])).unwrap();
///
/// let styles = sheet.resolve(&decl, &Conditions::from([("hover", true)])).unwrap();
/// assert_eq!(styles.len(), 3);
/// assert_eq!(styles[1].get_number("padding"), Some(4.0));
/// ```
#[derive(Debug, Clone)]
pub struct StyleSheet {
    options: Options,
    registry: StyleRegistry,
}

impl StyleSheet {
    /// Builds a stylesheet from validated options.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::InvalidBaseUnit`] if the base unit is not a
    /// positive finite number.
    pub fn new(options: Options) -> Result<Self, OptionsError> {
        options.validate()?;
        let registry = StyleRegistry::from_options(&options);
        Ok(Self { options, registry })
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    pub fn breakpoints(&self) -> &Breakpoints {
        &self.options.breakpoints
    }

    /// Active breakpoints for a viewport width, smallest first.
    pub fn active_breakpoints(&self, width: f64) -> ActiveBreakpoints {
        active_breakpoints(self.breakpoints(), width)
    }

    /// A tracker over this stylesheet's breakpoints.
    pub fn tracker(&self, width: f64) -> BreakpointTracker {
        BreakpointTracker::new(self.breakpoints().clone(), width)
    }

    /// Tracks this stylesheet's breakpoints against a viewport provider.
    pub fn attach<P: ViewportProvider + ?Sized>(&self, provider: &P) -> LiveBreakpoints {
        LiveBreakpoints::attach(provider, self.breakpoints().clone())
    }

    /// Resolves a declaration to native style objects, in application order.
    pub fn resolve(
        &self,
        declaration: &DynamicStyle,
        conditions: &Conditions,
    ) -> Result<Vec<NativeStyle>, StyleError> {
        let styles = resolve_style(declaration, conditions)?;
        self.registry.resolve_all(&styles)
    }

    /// Like [`resolve`](Self::resolve), with the `media` condition group
    /// derived from `active`.
    pub fn resolve_media(
        &self,
        declaration: &DynamicStyle,
        conditions: &Conditions,
        active: &ActiveBreakpoints,
    ) -> Result<Vec<NativeStyle>, StyleError> {
        let styles = resolve_media_style(declaration, conditions, self.breakpoints(), active)?;
        self.registry.resolve_all(&styles)
    }

    /// Resolves through a memo, so unchanged inputs skip condition evaluation.
    pub fn resolve_memoized(
        &self,
        memo: &mut StyleMemo,
        declaration: &DynamicStyle,
        conditions: &Conditions,
    ) -> Result<Vec<NativeStyle>, StyleError> {
        let styles = memo.resolve(declaration, conditions)?;
        self.registry.resolve_all(styles)
    }

    /// Resolves and merges into a single style object; later entries win.
    ///
    /// Native style IDs are left out, since their properties live in the host.
    pub fn flatten(
        &self,
        declaration: &DynamicStyle,
        conditions: &Conditions,
    ) -> Result<StyleObject, StyleError> {
        Ok(NativeStyle::merge_objects(&self.resolve(declaration, conditions)?))
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        let options = Options::default();
        let registry = StyleRegistry::from_options(&options);
        Self { options, registry }
    }
}
