use super::*;

#[test]
fn builtin_set_has_the_documented_recipes() {
    let reg = TemplateRegistry::builtin();
    for name in [
        "fadeIn",
        "fadeOut",
        "left-to-right",
        "right-to-left",
        "explode",
        "implode",
    ] {
        let t = reg.get(name).unwrap_or_else(|| panic!("missing {name}"));
        assert!(t.positions.start.is_some(), "{name} has no start snapshot");
        assert!(!t.positions.steps.is_empty(), "{name} has no steps");
        assert!(t.positions.steps.contains_key(&0), "{name} lacks step 0");
    }
    assert_eq!(reg.len(), 6);
}

#[test]
fn caller_override_of_one_step_keeps_the_rest() {
    let mut overrides = BTreeMap::new();
    overrides.insert(
        "explode".to_owned(),
        TemplateDef::new(
            PositionsDef::default().with_step(1, step(&[("font-size", StyleValue::from("90px"))])),
        ),
    );

    let base = TemplateRegistry::builtin();
    let reg = base.merged(&overrides);
    let explode = reg.get("explode").unwrap();
    let builtin = base.get("explode").unwrap();

    assert_eq!(explode.positions.start, builtin.positions.start);
    assert_eq!(explode.positions.steps[&0], builtin.positions.steps[&0]);
    let s1 = &explode.positions.steps[&1];
    assert_eq!(s1.style["font-size"], StyleValue::from("90px"));
    assert_eq!(s1.style["top"], StyleValue::from("0%"));
    assert_eq!(s1.duration, Some(1000.0));

    // The shared built-in is untouched.
    assert_eq!(builtin.positions.steps[&1].style["font-size"], StyleValue::from("150px"));
}

#[test]
fn caller_templates_are_added_alongside_builtins() {
    let json = r#"{"blink": {"positions": {"start": {"opacity": 1}, "0": {"opacity": 0}}}}"#;
    let overrides: BTreeMap<String, TemplateDef> = serde_json::from_str(json).unwrap();
    let reg = TemplateRegistry::builtin_with(&overrides);

    assert!(reg.contains("blink"));
    assert!(reg.contains("fadeIn"));
    assert_eq!(reg.len(), 7);
    let names: Vec<_> = reg.iter().map(|(n, _)| n).collect();
    assert!(names.windows(2).all(|w| w[0] < w[1]));
}
