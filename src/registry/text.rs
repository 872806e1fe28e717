//! Text token catalogue: font size, weight and style, alignment, decoration.

use once_cell::sync::Lazy;

use super::scale::{scaled, FONT_SIZE};
use super::Entry;
use crate::style::StyleObject;

fn k(prop: &str, value: &str) -> StyleObject {
    StyleObject::new().keyword(prop, value)
}

static FONT_KEYWORDS: Lazy<Vec<Entry>> = Lazy::new(|| {
    vec![
        ("fsI", k("fontStyle", "italic")),
        ("fwN", k("fontWeight", "normal")),
        ("fwB", k("fontWeight", "bold")),
        ("fw1", k("fontWeight", "100")),
        ("fw2", k("fontWeight", "200")),
        ("fw3", k("fontWeight", "300")),
        ("fw4", k("fontWeight", "400")),
        ("fw5", k("fontWeight", "500")),
        ("fw6", k("fontWeight", "600")),
        ("fw7", k("fontWeight", "700")),
        ("fw8", k("fontWeight", "800")),
        ("fw9", k("fontWeight", "900")),
        ("taL", k("textAlign", "left")),
        ("taC", k("textAlign", "center")),
        ("taR", k("textAlign", "right")),
        ("taJ", k("textAlign", "justify")),
        ("tdN", k("textDecorationLine", "none")),
        ("tdLT", k("textDecorationLine", "line-through")),
        ("tdU", k("textDecorationLine", "underline")),
        ("tdTU", k("textDecorationLine", "underline line-through")),
    ]
});

/// Builds the full text namespace for the given base unit.
pub(crate) fn text_styles(rem: f64) -> Vec<Entry> {
    let nth = scaled(FONT_SIZE, rem);
    let fs = |v: f64| StyleObject::new().number("fontSize", v);
    let mut entries = vec![
        ("fs1", fs(nth[0])),
        ("fs2", fs(nth[1])),
        ("fs3", fs(nth[2])),
        ("fs4", fs(nth[3])),
        ("fs5", fs(nth[4])),
        ("fs6", fs(nth[5])),
        ("fs7", fs(nth[6])),
        ("fs8", fs(nth[7])),
    ];
    entries.extend(FONT_KEYWORDS.iter().cloned());
    entries
}
