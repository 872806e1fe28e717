//! Integration tests for the full resolution pipeline.
//!
//! These tests drive declarations written as JSON through a [`StyleSheet`],
//! from condition evaluation down to native style objects.

use serde_json::json;
use stylekit::{
    style_list, CondStyleMap, Condition, Conditions, DynamicStyle, NativeStyle, Options,
    SharedViewport, StyleError, StyleMemo, StyleObject, StyleSheet, Viewport, ViewportProvider,
};

fn decl(value: serde_json::Value) -> DynamicStyle {
    DynamicStyle::from_json(&value).expect("declaration should parse")
}

#[test]
fn test_button_states() {
    let sheet = StyleSheet::default();
    let button = decl(json!([
        ["flx1", "aiC", "br2", "ph3"],
        {"pressed": ["o50"], "disabled": ["o30"]}
    ]));

    let idle = sheet
        .flatten(&button, &Conditions::from([("pressed", false), ("disabled", false)]))
        .unwrap();
    assert_eq!(idle.get_number("opacity"), None);
    assert_eq!(idle.get_number("paddingHorizontal"), Some(16.0));
    assert_eq!(idle.get_keyword("alignItems"), Some("center"));

    let pressed = sheet
        .flatten(&button, &Conditions::from([("pressed", true), ("disabled", false)]))
        .unwrap();
    assert_eq!(pressed.get_number("opacity"), Some(0.5));

    // Later conditions win when both apply.
    let both = sheet
        .flatten(&button, &Conditions::from([("pressed", true), ("disabled", true)]))
        .unwrap();
    assert_eq!(both.get_number("opacity"), Some(0.3));
}

#[test]
fn test_missing_condition_reports_name() {
    let sheet = StyleSheet::default();
    let button = decl(json!([["flx1"], {"pressed": ["o50"]}]));
    let err = sheet.resolve(&button, &Conditions::new()).unwrap_err();
    assert_eq!(err.to_string(), "style condition \"pressed\" not found");
}

#[test]
fn test_unknown_token_in_static_styles() {
    let sheet = StyleSheet::default();
    let err = sheet.resolve(&decl(json!(["flx1", "nope"])), &Conditions::new()).unwrap_err();
    assert!(matches!(err, StyleError::UnknownStyleKey { ref key } if key == "nope"));
}

#[test]
fn test_raw_objects_mix_with_tokens() {
    let sheet = StyleSheet::default();
    let card = decl(json!([
        ["p2", {"backgroundColor": "#fff"}],
        {"selected": {"borderColor": "tomato"}}
    ]));
    let styles = sheet
        .resolve(&card, &Conditions::from([("selected", true)]))
        .unwrap();
    assert_eq!(
        styles,
        vec![
            NativeStyle::from(StyleObject::new().number("padding", 8.0)),
            NativeStyle::from(StyleObject::new().keyword("backgroundColor", "#fff")),
            NativeStyle::from(StyleObject::new().keyword("borderColor", "tomato")),
        ]
    );
}

#[test]
fn test_text_tokens_resolve_through_text_namespace() {
    let sheet = StyleSheet::default();
    let title = sheet
        .registry()
        .resolve_text(&style_list(["fs4", "fwB", "taC"]))
        .unwrap();
    let merged = NativeStyle::merge_objects(&title);
    assert_eq!(merged.get_number("fontSize"), Some(24.0));
    assert_eq!(merged.get_keyword("fontWeight"), Some("bold"));

    assert!(sheet.registry().resolve_view(&style_list(["fs4"])).is_err());
}

#[test]
fn test_base_unit_from_yaml() {
    let options = Options::from_yaml("rem: 10\n").unwrap();
    let sheet = StyleSheet::new(options).unwrap();
    let style = sheet.flatten(&decl(json!(["m3", "w2"])), &Conditions::new()).unwrap();
    assert_eq!(style.get_number("margin"), Some(10.0));
    assert_eq!(style.get_number("width"), Some(20.0));
}

#[test]
fn test_responsive_layout_follows_viewport() {
    let sheet = StyleSheet::default();
    let viewport = SharedViewport::new(Viewport::new(375.0, 812.0));
    let live = sheet.attach(&viewport);
    let column = decl(json!([
        ["p1"],
        {"media": {"sm": ["p2"], "md": ["p3"], "lg": ["p4"]}}
    ]));

    let padding = |sheet: &StyleSheet| {
        sheet
            .resolve_media(&column, &Conditions::new(), &live.active())
            .map(|styles| NativeStyle::merge_objects(&styles).get_number("padding"))
            .unwrap()
    };

    assert_eq!(padding(&sheet), Some(4.0));

    viewport.set_size(Viewport::new(700.0, 812.0));
    assert_eq!(padding(&sheet), Some(8.0));

    viewport.set_size(Viewport::new(1280.0, 812.0));
    assert_eq!(padding(&sheet), Some(32.0));
    assert_eq!(live.revision(), 2);
}

#[test]
fn test_breakpoints_follow_resize_made_by_a_listener() {
    let sheet = StyleSheet::default();
    let viewport = SharedViewport::new(Viewport::new(375.0, 812.0));
    let live = sheet.attach(&viewport);

    let handle = viewport.clone();
    let _snap = viewport.subscribe(Box::new(move |v| {
        if v.width == 700.0 {
            handle.set_size(Viewport::new(1300.0, v.height));
        }
    }));

    viewport.set_size(Viewport::new(700.0, 812.0));
    assert_eq!(viewport.viewport().width, 1300.0);
    assert_eq!(live.active().names(), vec!["sm", "md", "lg", "xl"]);
    assert_eq!(live.active(), sheet.active_breakpoints(viewport.viewport().width));
}

#[test]
fn test_native_style_ids_survive_resolution() {
    let sheet = StyleSheet::default();
    let row = decl(json!([["flx1", 7], {"hover": [8, "o80"]}]));
    let styles = sheet
        .resolve(&row, &Conditions::from([("hover", true)]))
        .unwrap();
    let ids: Vec<i64> = styles
        .iter()
        .filter_map(|s| s.as_id().and_then(|id| id.as_i64()))
        .collect();
    assert_eq!(ids, vec![7, 8]);
    assert_eq!(styles.len(), 4);
}

#[test]
fn test_subscription_released_with_live_breakpoints() {
    let sheet = StyleSheet::default();
    let viewport = SharedViewport::new(Viewport::new(375.0, 812.0));
    {
        let _live = sheet.attach(&viewport);
        assert_eq!(viewport.listener_count(), 1);
    }
    assert_eq!(viewport.listener_count(), 0);
}

#[test]
fn test_memo_across_renders() {
    let sheet = StyleSheet::default();
    let mut memo = StyleMemo::new();
    let row = DynamicStyle::conditional(
        style_list(["flxdR", "aiC"]),
        CondStyleMap::new().when("hover", ["o80"]),
    );

    for hover in [false, false, true, true, false] {
        let styles = sheet
            .resolve_memoized(&mut memo, &row, &Conditions::from([("hover", hover)]))
            .unwrap();
        assert_eq!(styles.len(), if hover { 3 } else { 2 });
    }
    assert_eq!(memo.recomputations(), 3);
}

#[test]
fn test_computed_declaration() {
    let sheet = StyleSheet::default();
    let badge = DynamicStyle::computed(style_list(["br5"]), |conds| {
        let urgent = matches!(conds.get("urgent"), Some(Condition::Flag(true)));
        style_list([urgent.then_some("bw1")])
    });
    let styles = sheet
        .resolve(&badge, &Conditions::from([("urgent", true)]))
        .unwrap();
    assert_eq!(styles.len(), 2);
    let styles = sheet.resolve(&badge, &Conditions::new()).unwrap();
    assert_eq!(styles.len(), 1);
}
