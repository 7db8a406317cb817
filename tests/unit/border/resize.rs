use super::*;

fn ok(w: f64, h: f64) -> Result<Size, String> {
    Ok(Size::new(w, h))
}

#[test]
fn first_measurement_commits_immediately_and_rounds() {
    let mut ro = ResizeObserver::new(50.0);
    assert_eq!(ro.size(), Size::ZERO);
    assert!(ro.observe(ok(399.6, 200.2), FrameTime(0.0)));
    assert_eq!(ro.size(), Size::new(400.0, 200.0));
}

#[test]
fn later_measurements_wait_for_quiet_period() {
    let mut ro = ResizeObserver::new(50.0);
    ro.observe(ok(400.0, 200.0), FrameTime(0.0));

    assert!(!ro.observe(ok(300.0, 200.0), FrameTime(100.0)));
    assert!(!ro.poll(FrameTime(120.0)));
    // A newer measurement restarts the wait.
    ro.observe(ok(320.0, 180.0), FrameTime(140.0));
    assert!(!ro.poll(FrameTime(160.0)));
    assert_eq!(ro.size(), Size::new(400.0, 200.0));
    assert!(ro.poll(FrameTime(190.0)));
    assert_eq!(ro.size(), Size::new(320.0, 180.0));
    assert!(!ro.has_pending());
}

#[test]
fn errors_keep_the_last_size() {
    let mut ro = ResizeObserver::new(50.0);
    ro.observe(ok(400.0, 200.0), FrameTime(0.0));
    assert!(!ro.observe(Err::<Size, _>("detached"), FrameTime(10.0)));
    assert!(!ro.poll(FrameTime(100.0)));
    assert_eq!(ro.size(), Size::new(400.0, 200.0));
}

#[test]
fn negative_and_nan_sizes_floor_at_zero() {
    let mut ro = ResizeObserver::default();
    ro.observe(ok(-5.0, f64::NAN), FrameTime(0.0));
    assert_eq!(ro.size(), Size::ZERO);
}

#[test]
fn unchanged_commit_reports_no_change() {
    let mut ro = ResizeObserver::new(0.0);
    ro.observe(ok(10.0, 10.0), FrameTime(0.0));
    ro.observe(ok(10.0, 10.0), FrameTime(1.0));
    assert!(!ro.poll(FrameTime(1.0)));
    assert!(!ro.has_pending());
}
