use super::*;

#[test]
fn defaults_match_the_plugin_conventions() {
    let cfg = GroupConfig::default();
    assert_eq!(cfg.repeat, RepeatPolicy::Unbounded);
    assert_eq!(cfg.element.animation, "explode");
    assert_eq!(cfg.element.offset, Millis::ZERO);
    assert_eq!(cfg.position.duration, Millis(1000.0));
    assert_eq!(cfg.position.easing, Easing::from("linear"));
    assert_eq!(
        cfg.container.base_style["list-style"],
        StyleValue::from("none")
    );
    assert_eq!(
        cfg.element.base_style["position"],
        StyleValue::from("absolute")
    );
}

#[test]
fn partial_json_merges_onto_defaults() {
    let json = r#"{
        "repeat": 2,
        "element": {"baseStyle": {"height": "200px"}},
        "elementDefault": {"offset": 150, "animationName": "fadeIn", "baseStyle": {"color": "red"}},
        "position": {"defaultDuration": 400}
    }"#;
    let def: ConfigDef = serde_json::from_str(json).unwrap();
    let cfg = GroupConfig::from_def(&def);

    assert_eq!(cfg.repeat, RepeatPolicy::Bounded(2));
    assert_eq!(cfg.container.base_style["height"], StyleValue::from("200px"));
    assert_eq!(cfg.container.base_style["width"], StyleValue::from("100%"));
    assert_eq!(cfg.element.base_style["color"], StyleValue::from("red"));
    assert_eq!(cfg.element.base_style["position"], StyleValue::from("absolute"));
    assert_eq!(cfg.element.offset, Millis(150.0));
    assert_eq!(cfg.element.animation, "fadeIn");
    assert_eq!(cfg.position.duration, Millis(400.0));
    assert_eq!(cfg.position.easing, Easing::from("linear"));
}

#[test]
fn invalid_numbers_keep_defaults() {
    let json = r#"{
        "elementDefault": {"offset": -10},
        "position": {"defaultDuration": "soon", "defaultEasing": "swing"}
    }"#;
    let def: ConfigDef = serde_json::from_str(json).unwrap();
    let cfg = GroupConfig::from_def(&def);

    assert_eq!(cfg.element.offset, Millis::ZERO);
    assert_eq!(cfg.position.duration, Millis(1000.0));
    assert_eq!(cfg.position.easing, Easing::from("swing"));
}

#[test]
fn empty_def_is_identity() {
    assert_eq!(
        GroupConfig::from_def(&ConfigDef::default()),
        GroupConfig::default()
    );
}
