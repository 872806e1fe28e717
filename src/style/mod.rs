//! Style values and native style objects.
//!
//! This module provides the primitives every other module trades in:
//!
//! - [`StyleObject`]: a native style object (`{flex: 1}`)
//! - [`StyleValue`]: one entry of a declaration, either a shorthand token,
//!   a raw style object, a nested group or a skipped placeholder
//! - [`StyleList`]: an ordered list of style values
//! - [`NativeStyle`]: one entry of a resolved list, a style object or a
//!   host-registered style ID

mod native;
mod object;
mod value;

pub use native::NativeStyle;
pub use object::StyleObject;
pub use value::{style_list, StyleList, StyleValue};
