use super::*;
use crate::animation::style::style;

#[test]
fn overlay_wins_per_key_and_base_falls_through() {
    let base = style([("opacity", 0.0), ("top", 30.0)]);
    let overlay = style([("opacity", 1.0), ("left", 5.0)]);

    let merged = base.deep_merge(&overlay);
    assert_eq!(merged, style([("opacity", 1.0), ("top", 30.0), ("left", 5.0)]));
}

#[test]
fn nested_maps_merge_recursively_without_touching_inputs() {
    let mut base = BTreeMap::new();
    base.insert(1u32, style([("opacity", 0.0), ("top", 10.0)]));
    base.insert(2u32, style([("top", 20.0)]));
    let mut overlay = BTreeMap::new();
    overlay.insert(1u32, style([("opacity", 0.5)]));

    let merged = base.deep_merge(&overlay);
    assert_eq!(merged[&1], style([("opacity", 0.5), ("top", 10.0)]));
    assert_eq!(merged[&2], style([("top", 20.0)]));

    assert_eq!(base[&1], style([("opacity", 0.0), ("top", 10.0)]));
}

#[test]
fn optional_helpers_keep_present_side() {
    let a = Some(style([("x", 1.0)]));
    let b = Some(style([("y", 2.0)]));
    assert_eq!(merge_opt(&a, &None), a);
    assert_eq!(merge_opt(&None, &b), b);
    assert_eq!(merge_opt(&a, &b), Some(style([("x", 1.0), ("y", 2.0)])));

    assert_eq!(pick(&Some(1), &None), Some(1));
    assert_eq!(pick(&Some(1), &Some(2)), Some(2));
    assert_eq!(pick::<i32>(&None, &None), None);
}
