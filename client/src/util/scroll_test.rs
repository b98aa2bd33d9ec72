use super::*;

#[test]
fn exactly_at_bottom_is_near() {
    assert!(is_near_bottom(1000, 600, 400));
}

#[test]
fn within_threshold_is_near() {
    assert!(is_near_bottom(1000, 520, 400));
}

#[test]
fn beyond_threshold_is_not_near() {
    assert!(!is_near_bottom(1000, 519, 400));
    assert!(!is_near_bottom(5000, 0, 400));
}

#[test]
fn content_shorter_than_viewport_is_near() {
    assert!(is_near_bottom(200, 0, 400));
}
