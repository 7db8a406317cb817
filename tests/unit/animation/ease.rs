use super::*;

const ALL: [Ease; 3] = [Ease::Linear, Ease::CssEaseInOut, Ease::Standard];

#[test]
fn endpoints_are_fixed() {
    for ease in ALL {
        assert!(ease.apply(0.0).abs() < 1e-9, "{ease:?}");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-9, "{ease:?}");
    }
}

#[test]
fn input_is_clamped() {
    for ease in ALL {
        assert_eq!(ease.apply(-2.0), ease.apply(0.0));
        assert_eq!(ease.apply(5.0), ease.apply(1.0));
        assert_eq!(ease.apply(f64::NAN), ease.apply(0.0));
    }
}

#[test]
fn curves_are_monotonic() {
    for ease in ALL {
        let mut prev = 0.0;
        for i in 1..=200 {
            let v = ease.apply(i as f64 / 200.0);
            assert!(v + 1e-9 >= prev, "{ease:?} at {i}");
            prev = v;
        }
    }
}

#[test]
fn css_ease_in_out_is_symmetric() {
    let mid = Ease::CssEaseInOut.apply(0.5);
    assert!((mid - 0.5).abs() < 1e-4);
    let a = Ease::CssEaseInOut.apply(0.2);
    let b = Ease::CssEaseInOut.apply(0.8);
    assert!((a + b - 1.0).abs() < 1e-4);
    assert!(a < 0.2);
}

#[test]
fn standard_curve_front_loads_progress() {
    assert!(Ease::Standard.apply(0.3) > 0.3);
    assert!(Ease::Standard.apply(0.5) > 0.5);
}
