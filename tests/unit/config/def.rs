use super::*;
use crate::config::repeat::RepeatPolicy;

#[test]
fn parses_full_definition() {
    let json = r#"{
        "elements": [
            {"animationName": "fadeIn", "offset": 250},
            {"animationName": "blink", "duration": 400, "positions": {"0": {"opacity": 0.5}}}
        ],
        "config": {"repeat": false},
        "animations": {"blink": {"positions": {"start": {"opacity": 1}, "0": {"opacity": 0}}}}
    }"#;
    let def = GroupDef::from_json(json).unwrap();

    assert_eq!(def.elements.len(), 2);
    assert_eq!(def.elements[0].animation_name.as_deref(), Some("fadeIn"));
    assert_eq!(def.elements[0].offset, Some(250.0));
    assert_eq!(def.elements[1].animation_name.as_deref(), Some("blink"));
    assert_eq!(def.elements[1].duration, Some(400.0));
    assert!(def.elements[1].positions.steps.contains_key(&0));
    assert_eq!(def.config.repeat, Some(RepeatPolicy::NEVER));
    assert!(def.animations.contains_key("blink"));
}

#[test]
fn empty_object_is_an_empty_group() {
    let def = GroupDef::from_json("{}").unwrap();
    assert_eq!(def, GroupDef::default());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = GroupDef::from_json("{\"elements\": 3}").unwrap_err();
    assert!(matches!(err, AnimTextError::Serde(_)));
    assert!(err.to_string().contains("parse group definition JSON"));
}

#[test]
fn missing_file_reports_path() {
    let err = GroupDef::from_path("/nonexistent/animtext/group.json").unwrap_err();
    assert!(matches!(err, AnimTextError::Other(_)));
    assert!(format!("{err:#}").contains("/nonexistent/animtext/group.json"));
}

#[test]
fn pretty_json_reparses_to_the_same_definition() {
    let json = r#"{"elements": [{"animationName": "implode", "offset": 100}], "config": {"repeat": 3}}"#;
    let def = GroupDef::from_json(json).unwrap();
    let again = GroupDef::from_json(&def.to_json_pretty().unwrap()).unwrap();
    assert_eq!(def, again);
}

#[test]
fn foreign_animation_key_is_ignored_not_rejected() {
    let json = r#"{"elements": [{"animation": "fadeIn", "animationName": "implode"}, {"animation": "fadeIn"}]}"#;
    let def = GroupDef::from_json(json).unwrap();
    assert_eq!(def.elements[0].animation_name.as_deref(), Some("implode"));
    assert_eq!(def.elements[1].animation_name, None);
}
