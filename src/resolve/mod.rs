//! Dynamic style declarations and their resolution.
//!
//! This module turns a declaration plus the current runtime conditions into
//! the ordered list of styles that apply:
//!
//! - [`DynamicStyle`]: a static list, or a static list paired with
//!   conditional styles (a [`CondStyleMap`] or a function)
//! - [`Conditions`]: which conditions are on, possibly grouped
//! - [`resolve_style`]: the resolver itself
//! - [`StyleMemo`]: per-view caching across renders
//! - [`resolve_media_style`]: resolution with breakpoint flags under `media`
//!
//! Resolution orders and filters entries but never looks tokens up or merges
//! style objects; both happen later, in the registry and in the view.

mod conditions;
mod declaration;
mod media;
mod memo;
mod resolver;

pub use conditions::{Condition, Conditions};
pub use declaration::{CondStyleMap, CondStyles, ConditionalStyles, DynamicStyle, StyleFn};
pub use media::{media_conditions, resolve_media_style, MEDIA_CONDITION};
pub use memo::StyleMemo;
pub use resolver::resolve_style;
