use super::*;

#[test]
fn non_negative_rejects_negative_and_nan() {
    assert_eq!(Millis::non_negative(0.0), Some(Millis::ZERO));
    assert_eq!(Millis::non_negative(250.5), Some(Millis(250.5)));
    assert_eq!(Millis::non_negative(-1.0), None);
    assert_eq!(Millis::non_negative(f64::NAN), None);
    assert_eq!(Millis::non_negative(f64::INFINITY), None);
}

#[test]
fn millis_sum_and_display() {
    let total: Millis = [Millis(600.0), Millis(600.0)].into_iter().sum();
    assert_eq!(total, Millis(1200.0));
    assert_eq!(total.to_string(), "1200ms");
    assert!(total.is_positive());
    assert!(!Millis::ZERO.is_positive());
}

#[test]
fn easing_defaults_to_linear() {
    assert_eq!(Easing::default().as_str(), "linear");
    let json = serde_json::to_string(&Easing::from("swing")).unwrap();
    assert_eq!(json, "\"swing\"");
}
