//! View token catalogue: flex, position, dimension, spacing, border, opacity.

use once_cell::sync::Lazy;

use super::scale::{scaled, BORDER_RADIUS, DIMENSION, POSITION, SPACING};
use super::Entry;
use crate::style::StyleObject;

fn n(prop: &str, value: f64) -> StyleObject {
    StyleObject::new().number(prop, value)
}

fn k(prop: &str, value: &str) -> StyleObject {
    StyleObject::new().keyword(prop, value)
}

static FLEX: Lazy<Vec<Entry>> = Lazy::new(|| {
    vec![
        ("flx1", n("flex", 1.0)),
        ("flxg1", n("flexGrow", 1.0)),
        ("flxdC", k("flexDirection", "column")),
        ("flxdR", k("flexDirection", "row")),
        ("flxdRR", k("flexDirection", "row-reverse")),
        ("flxdCR", k("flexDirection", "column-reverse")),
        ("flxW", k("flexWrap", "wrap")),
        ("aiFS", k("alignItems", "flex-start")),
        ("aiC", k("alignItems", "center")),
        ("aiFE", k("alignItems", "flex-end")),
        ("aisFS", k("alignSelf", "flex-start")),
        ("aisC", k("alignSelf", "center")),
        ("aisFE", k("alignSelf", "flex-end")),
        ("aisS", k("alignSelf", "stretch")),
        ("jcFS", k("justifyContent", "flex-start")),
        ("jcFE", k("justifyContent", "flex-end")),
        ("jcC", k("justifyContent", "center")),
        ("jcSB", k("justifyContent", "space-between")),
        ("jcSA", k("justifyContent", "space-around")),
    ]
});

static OPACITY: Lazy<Vec<Entry>> = Lazy::new(|| {
    vec![
        ("o100", n("opacity", 1.0)),
        ("o90", n("opacity", 0.9)),
        ("o80", n("opacity", 0.8)),
        ("o70", n("opacity", 0.7)),
        ("o60", n("opacity", 0.6)),
        ("o50", n("opacity", 0.5)),
        ("o40", n("opacity", 0.4)),
        ("o30", n("opacity", 0.3)),
        ("o20", n("opacity", 0.2)),
        ("o10", n("opacity", 0.1)),
        ("o05", n("opacity", 0.05)),
        ("o025", n("opacity", 0.025)),
    ]
});

/// Builds the full view namespace for the given base unit.
pub(crate) fn view_styles(rem: f64) -> Vec<Entry> {
    let mut entries = FLEX.clone();
    entries.extend(position_styles(rem));
    entries.extend(dimension_styles(rem));
    entries.extend(spacing_styles(rem));
    entries.extend(border_styles(rem));
    entries.extend(OPACITY.iter().cloned());
    entries
}

fn position_styles(rem: f64) -> Vec<Entry> {
    let nth = scaled(POSITION, rem);
    vec![
        ("posA", k("position", "absolute")),
        (
            "posA0",
            k("position", "absolute")
                .number("top", 0.0)
                .number("bottom", 0.0)
                .number("right", 0.0)
                .number("left", 0.0),
        ),
        ("tp0", n("top", 0.0)),
        ("tp1", n("top", nth[0])),
        ("tp2", n("top", nth[1])),
        ("rt0", n("right", 0.0)),
        ("rt1", n("right", nth[0])),
        ("rt2", n("right", nth[1])),
        ("bt0", n("bottom", 0.0)),
        ("bt1", n("bottom", nth[0])),
        ("bt2", n("bottom", nth[1])),
        ("lt0", n("left", 0.0)),
        ("lt1", n("left", nth[0])),
        ("lt2", n("left", nth[1])),
    ]
}

fn dimension_styles(rem: f64) -> Vec<Entry> {
    let nth = scaled(DIMENSION, rem);
    vec![
        // heights
        ("h1", n("height", nth[0])),
        ("h2", n("height", nth[1])),
        ("h3", n("height", nth[2])),
        ("h4", n("height", nth[3])),
        ("h5", n("height", nth[4])),
        ("mxh1", n("maxHeight", nth[0])),
        ("mxh2", n("maxHeight", nth[1])),
        ("mxh3", n("maxHeight", nth[2])),
        ("mxh4", n("maxHeight", nth[3])),
        ("mxh5", n("maxHeight", nth[4])),
        ("mnh1", n("minHeight", nth[0])),
        ("mnh2", n("minHeight", nth[1])),
        ("mnh3", n("minHeight", nth[2])),
        ("mnh4", n("minHeight", nth[3])),
        ("mnh5", n("minHeight", nth[4])),
        // widths
        ("w1", n("width", nth[0])),
        ("w2", n("width", nth[1])),
        ("w3", n("width", nth[2])),
        ("w4", n("width", nth[3])),
        ("w5", n("width", nth[4])),
        ("w6", n("width", nth[5])),
        ("mxw1", n("maxWidth", nth[0])),
        ("mxw2", n("maxWidth", nth[1])),
        ("mxw3", n("maxWidth", nth[2])),
        ("mxw4", n("maxWidth", nth[3])),
        ("mxw5", n("maxWidth", nth[4])),
        ("mxw6", n("maxWidth", nth[5])),
        ("mnw1", n("minWidth", nth[0])),
        ("mnw2", n("minWidth", nth[1])),
        ("mnw3", n("minWidth", nth[2])),
        ("mnw4", n("minWidth", nth[3])),
        ("mnw5", n("minWidth", nth[4])),
        ("mnw6", n("minWidth", nth[5])),
    ]
}

fn spacing_styles(rem: f64) -> Vec<Entry> {
    let nth = scaled(SPACING, rem);
    vec![
        ("m0", n("margin", 0.0)),
        ("m1", n("margin", nth[0])),
        ("m2", n("margin", nth[1])),
        ("m3", n("margin", nth[2])),
        ("m4", n("margin", nth[3])),
        ("m5", n("margin", nth[4])),
        ("mh0", n("marginHorizontal", 0.0)),
        ("mh1", n("marginHorizontal", nth[0])),
        ("mh2", n("marginHorizontal", nth[1])),
        ("mh3", n("marginHorizontal", nth[2])),
        ("mh4", n("marginHorizontal", nth[3])),
        ("mh5", n("marginHorizontal", nth[4])),
        ("mv0", n("marginVertical", 0.0)),
        ("mv1", n("marginVertical", nth[0])),
        ("mv2", n("marginVertical", nth[1])),
        ("mv3", n("marginVertical", nth[2])),
        ("mv4", n("marginVertical", nth[3])),
        ("mv5", n("marginVertical", nth[4])),
        ("mt0", n("marginTop", 0.0)),
        ("mt1", n("marginTop", nth[0])),
        ("mt2", n("marginTop", nth[1])),
        ("mt3", n("marginTop", nth[2])),
        ("mt4", n("marginTop", nth[3])),
        ("mt5", n("marginTop", nth[4])),
        ("mr0", n("marginRight", 0.0)),
        ("mr1", n("marginRight", nth[0])),
        ("mr2", n("marginRight", nth[1])),
        ("mr3", n("marginRight", nth[2])),
        ("mr4", n("marginRight", nth[3])),
        ("mr5", n("marginRight", nth[4])),
        ("mb0", n("marginBottom", 0.0)),
        ("mb1", n("marginBottom", nth[0])),
        ("mb2", n("marginBottom", nth[1])),
        ("mb3", n("marginBottom", nth[2])),
        ("mb4", n("marginBottom", nth[3])),
        ("mb5", n("marginBottom", nth[4])),
        ("ml0", n("marginLeft", 0.0)),
        ("ml1", n("marginLeft", nth[0])),
        ("ml2", n("marginLeft", nth[1])),
        ("ml3", n("marginLeft", nth[2])),
        ("ml4", n("marginLeft", nth[3])),
        ("ml5", n("marginLeft", nth[4])),
        ("p0", n("padding", 0.0)),
        ("p1", n("padding", nth[0])),
        ("p2", n("padding", nth[1])),
        ("p3", n("padding", nth[2])),
        ("p4", n("padding", nth[3])),
        ("p5", n("padding", nth[4])),
        ("ph0", n("paddingHorizontal", 0.0)),
        ("ph1", n("paddingHorizontal", nth[0])),
        ("ph2", n("paddingHorizontal", nth[1])),
        ("ph3", n("paddingHorizontal", nth[2])),
        ("ph4", n("paddingHorizontal", nth[3])),
        ("ph5", n("paddingHorizontal", nth[4])),
        ("pv0", n("paddingVertical", 0.0)),
        ("pv1", n("paddingVertical", nth[0])),
        ("pv2", n("paddingVertical", nth[1])),
        ("pv3", n("paddingVertical", nth[2])),
        ("pv4", n("paddingVertical", nth[3])),
        ("pv5", n("paddingVertical", nth[4])),
        ("pt0", n("paddingTop", 0.0)),
        ("pt1", n("paddingTop", nth[0])),
        ("pt2", n("paddingTop", nth[1])),
        ("pt3", n("paddingTop", nth[2])),
        ("pt4", n("paddingTop", nth[3])),
        ("pt5", n("paddingTop", nth[4])),
        ("pr0", n("paddingRight", 0.0)),
        ("pr1", n("paddingRight", nth[0])),
        ("pr2", n("paddingRight", nth[1])),
        ("pr3", n("paddingRight", nth[2])),
        ("pr4", n("paddingRight", nth[3])),
        ("pr5", n("paddingRight", nth[4])),
        ("pb0", n("paddingBottom", 0.0)),
        ("pb1", n("paddingBottom", nth[0])),
        ("pb2", n("paddingBottom", nth[1])),
        ("pb3", n("paddingBottom", nth[2])),
        ("pb4", n("paddingBottom", nth[3])),
        ("pb5", n("paddingBottom", nth[4])),
        ("pl0", n("paddingHorizontal", 0.0)),
        ("pl1", n("paddingHorizontal", nth[0])),
        ("pl2", n("paddingHorizontal", nth[1])),
        ("pl3", n("paddingHorizontal", nth[2])),
        ("pl4", n("paddingHorizontal", nth[3])),
        ("pl5", n("paddingHorizontal", nth[4])),
    ]
}

fn border_styles(rem: f64) -> Vec<Entry> {
    let nth = scaled(BORDER_RADIUS, rem);
    vec![
        ("bw0", n("borderWidth", 0.0)),
        ("bw1", n("borderWidth", 1.0)),
        ("br0", n("borderRadius", 0.0)),
        ("br1", n("borderRadius", nth[0])),
        ("br2", n("borderRadius", nth[1])),
        ("br3", n("borderRadius", nth[2])),
        ("br4", n("borderRadius", nth[3])),
        ("br5", n("borderRadius", nth[4])),
        (
            "brT0",
            n("borderTopLeftRadius", 0.0).number("borderTopRightRadius", 0.0),
        ),
        (
            "brL0",
            n("borderTopRightRadius", 0.0).number("borderBottomRightRadius", 0.0),
        ),
        (
            "brB0",
            n("borderBottomLeftRadius", 0.0).number("borderBottomRightRadius", 0.0),
        ),
        (
            "brR0",
            n("borderTopLeftRadius", 0.0).number("borderBottomLeftRadius", 0.0),
        ),
    ]
}
