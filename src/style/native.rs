//! Resolved styles as handed to the host view.

use serde_json::Number;

use super::object::StyleObject;

/// One entry of a resolved style list.
///
/// Most entries are style objects. A declaration may also carry a numeric
/// style ID the host registered natively; its properties are unknown here, so
/// it is handed back untouched for the host to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeStyle {
    Object(StyleObject),
    Id(Number),
}

impl NativeStyle {
    pub fn as_object(&self) -> Option<&StyleObject> {
        match self {
            NativeStyle::Object(style) => Some(style),
            NativeStyle::Id(_) => None,
        }
    }

    pub fn as_id(&self) -> Option<&Number> {
        match self {
            NativeStyle::Id(id) => Some(id),
            NativeStyle::Object(_) => None,
        }
    }

    /// Reads a numeric property. Always `None` for a style ID.
    pub fn get_number(&self, prop: &str) -> Option<f64> {
        self.as_object().and_then(|s| s.get_number(prop))
    }

    /// Reads a keyword property. Always `None` for a style ID.
    pub fn get_keyword(&self, prop: &str) -> Option<&str> {
        self.as_object().and_then(|s| s.get_keyword(prop))
    }

    /// Merges the style objects of a resolved list; later entries win.
    ///
    /// Style IDs are skipped, since only the host knows what they contain.
    pub fn merge_objects<'a>(styles: impl IntoIterator<Item = &'a NativeStyle>) -> StyleObject {
        StyleObject::flatten(styles.into_iter().filter_map(NativeStyle::as_object))
    }
}

impl From<StyleObject> for NativeStyle {
    fn from(style: StyleObject) -> Self {
        NativeStyle::Object(style)
    }
}
