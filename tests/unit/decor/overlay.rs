use super::*;

#[test]
fn float_bobs_up_fifteen_pixels_mid_cycle() {
    let o = sample_overlay(ElementAnimation::Float, 1.5, 3.0);
    assert!((o.translate.y + 15.0).abs() < 1e-6);
    assert_eq!(sample_overlay(ElementAnimation::Float, 0.0, 3.0), Overlay::IDENTITY);
}

#[test]
fn blink_cycle_is_at_least_one_second() {
    assert_eq!(overlay_cycle(ElementAnimation::Blink, 0.5), 1.0);
    let o = sample_overlay(ElementAnimation::Blink, 0.5, 0.5);
    assert!((o.opacity - 0.2).abs() < 1e-6);
}

#[test]
fn pop_starts_small_and_overshoots() {
    assert_eq!(overlay_cycle(ElementAnimation::Pop, 0.5), 0.8);
    assert!((sample_overlay(ElementAnimation::Pop, 0.0, 1.2).scale - 0.6).abs() < 1e-9);
    assert!((sample_overlay(ElementAnimation::Pop, 0.6, 1.2).scale - 1.15).abs() < 1e-6);
}

#[test]
fn shake_swings_both_ways() {
    let left = sample_overlay(ElementAnimation::Shake, 0.125, 0.5);
    let right = sample_overlay(ElementAnimation::Shake, 0.375, 0.5);
    assert!((left.translate.x + 10.0).abs() < 1e-6);
    assert!((right.translate.x - 10.0).abs() < 1e-6);
}

#[test]
fn spins_are_linear_in_opposite_directions() {
    let cw = sample_overlay(ElementAnimation::RotateCw, 1.0, 4.0);
    let ccw = sample_overlay(ElementAnimation::SpinCcw, 1.0, 4.0);
    assert!((cw.rotate_deg - 90.0).abs() < 1e-9);
    assert!((ccw.rotate_deg + 90.0).abs() < 1e-9);
}

#[test]
fn travel_and_none_have_no_overlay() {
    assert!(sample_overlay(ElementAnimation::Travel, 2.3, 6.0).is_identity());
    assert!(sample_overlay(ElementAnimation::None, 2.3, 3.0).is_identity());
}
