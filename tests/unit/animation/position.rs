use super::*;
use crate::animation::style::{StyleValue, style};

#[test]
fn position_keys_parse_start_and_ordinals() {
    assert_eq!(PositionKey::parse("start"), Some(PositionKey::Start));
    assert_eq!(PositionKey::parse("0"), Some(PositionKey::Step(0)));
    assert_eq!(PositionKey::parse("12"), Some(PositionKey::Step(12)));
    assert_eq!(PositionKey::parse("-1"), None);
    assert_eq!(PositionKey::parse("middle"), None);
    assert!(PositionKey::Start < PositionKey::Step(0));
}

#[test]
fn positions_deserialize_from_keyframe_object() {
    let json = r#"{
        "start": {"opacity": 0, "top": "50%", "duration": 999},
        "0": {"opacity": 1, "duration": 600, "easing": "swing"},
        "1": {"duration": "slow"},
        "later": {"opacity": 0}
    }"#;
    let p: PositionsDef = serde_json::from_str(json).unwrap();

    assert_eq!(
        p.start,
        Some(style([
            ("opacity", StyleValue::from(0.0)),
            ("top", StyleValue::from("50%")),
        ]))
    );
    assert_eq!(p.steps.len(), 2);
    assert_eq!(p.steps[&0].duration, Some(600.0));
    assert_eq!(p.steps[&0].easing, Some(Easing::from("swing")));
    assert_eq!(p.steps[&0].style, style([("opacity", 1.0)]));
    assert!(p.steps[&1].duration.is_some_and(f64::is_nan));
    assert!(p.steps[&1].style.is_empty());
}

#[test]
fn positions_serialize_with_string_keys() {
    let p = PositionsDef::default()
        .with_start(style([("opacity", 0.0)]))
        .with_step(0, PositionDef::new(style([("opacity", 1.0)])).duration(250.0));
    let v = serde_json::to_value(&p).unwrap();
    assert_eq!(v["start"]["opacity"], 0.0);
    assert_eq!(v["0"]["opacity"], 1.0);
    assert_eq!(v["0"]["duration"], 250.0);
    assert!(v["0"].get("easing").is_none());
}

#[test]
fn step_override_replaces_only_named_properties() {
    let base = PositionsDef::default()
        .with_start(style([("opacity", 0.0)]))
        .with_step(0, PositionDef::new(style([("opacity", 1.0)])).duration(0.0))
        .with_step(
            1,
            PositionDef::new(style([("top", 0.0), ("opacity", 0.0)])).duration(1000.0),
        );
    let overlay =
        PositionsDef::default().with_step(1, PositionDef::new(style([("opacity", 0.5)])));

    let merged = base.deep_merge(&overlay);
    assert_eq!(merged.start, base.start);
    assert_eq!(merged.steps[&0], base.steps[&0]);
    assert_eq!(merged.steps[&1].style, style([("top", 0.0), ("opacity", 0.5)]));
    assert_eq!(merged.steps[&1].duration, Some(1000.0));
}
