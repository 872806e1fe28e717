//! Dynamic style resolution for view trees.
//!
//! `stylekit` turns compact style declarations into the ordered list of
//! native style objects a view should apply. It has three parts:
//!
//! - a [`StyleRegistry`] of shorthand tokens (`"flx1"`, `"mv3"`, `"fs4"`),
//!   with lengths scaled from a configurable base unit
//! - a resolver that evaluates a [`DynamicStyle`] against runtime
//!   [`Conditions`], with [`StyleMemo`] to skip work across renders
//! - breakpoint tracking ([`Breakpoints`], [`BreakpointTracker`],
//!   [`LiveBreakpoints`]) feeding the `media` condition
//!
//! [`StyleSheet`] ties them together behind one value built from [`Options`].
//!
//! # Declarations
//!
//! A declaration is either a plain list of styles, or a pair of a static list
//! and a condition map:
//!
//! ```text
//! ["flx1", "aiC"]
//! [["p2"], {"pressed": ["o50"], "media": {"md": ["p4"]}}]
//! ```
//!
//! Static entries always apply first. Each condition named in the map must be
//! present in the caller's conditions; an active condition contributes its
//! styles in declaration order. Grouped conditions (such as `media`) select
//! entries of a nested map.
//!
//! # Example
//!
//! ```rust
//! use stylekit::{Conditions, DynamicStyle, StyleSheet};
//! use serde_json::json;
//!
//! let sheet = StyleSheet::default();
//! let decl = DynamicStyle::from_json(&json!([
//!     ["flx1", "p2"],
//!     {"pressed": ["o50"], "media": {"md": ["p4"]}}
//! ]))
//! .unwrap();
//!
//! let active = sheet.active_breakpoints(800.0);
//! let style = sheet
//!     .resolve_media(&decl, &Conditions::from([("pressed", true)]), &active)
//!     .unwrap();
//!
//! assert_eq!(style.len(), 4);
//! assert_eq!(style[3].get_number("padding"), Some(32.0));
//! ```
//!
//! # Errors
//!
//! Unknown tokens fail with [`StyleError::UnknownStyleKey`]; declarations
//! that name a missing condition, or are not shaped as above, fail with
//! [`StyleError::InvalidStyleDeclaration`]. Nothing is skipped silently.
//!
//! # Logging
//!
//! Diagnostics go through the [`log`] facade under the `stylekit::registry`,
//! `stylekit::resolve` and `stylekit::media` targets.

mod error;
mod options;
mod sheet;

pub mod media;
pub mod registry;
pub mod resolve;
pub mod style;

pub use error::{DeclarationError, OptionsError, StyleError};
pub use media::{
    active_breakpoints, ActiveBreakpoints, BreakpointTracker, Breakpoints, LiveBreakpoints,
    SharedViewport, Subscription, Viewport, ViewportListener, ViewportProvider,
};
pub use options::{Options, DEFAULT_BASE_UNIT};
pub use registry::{Namespace, StyleRegistry};
pub use resolve::{
    media_conditions, resolve_media_style, resolve_style, CondStyleMap, CondStyles, Condition,
    ConditionalStyles, Conditions, DynamicStyle, StyleFn, StyleMemo, MEDIA_CONDITION,
};
pub use sheet::StyleSheet;
pub use style::{style_list, NativeStyle, StyleList, StyleObject, StyleValue};
