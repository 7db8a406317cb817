use super::*;

#[test]
fn transform_table_matches_each_variant() {
    let css = |v| transform_for(v, RevealState::Revealed).to_css();
    assert_eq!(css(RevealType::Flip), "rotateY(180deg) scale(0.8)");
    assert_eq!(css(RevealType::SwipeUp), "translateY(-120%) scale(0.95)");
    assert_eq!(css(RevealType::SwipeDown), "translateY(120%) scale(0.95)");
    assert_eq!(css(RevealType::SwipeLeft), "translateX(-120%) scale(0.95)");
    assert_eq!(css(RevealType::SwipeRight), "translateX(120%) scale(0.95)");
    assert_eq!(css(RevealType::Door), "rotateY(110deg) translateX(-50%)");
    assert_eq!(css(RevealType::Lock), "scale(0.1) rotate(720deg)");
    assert_eq!(
        css(RevealType::Vanish),
        "scale(0.1) rotate(360deg) translateY(-50%)"
    );
    assert_eq!(css(RevealType::Zoom), "scale(3) rotate(15deg)");
    assert_eq!(css(RevealType::Curtain), "scaleY(0) translateY(-100%)");
}

#[test]
fn covered_state_is_identity_for_all_variants() {
    for v in RevealType::ALL {
        assert_eq!(
            transform_for(v, RevealState::Covered),
            TransformDescriptor::identity()
        );
        assert!(!transform_for(v, RevealState::Revealed).is_identity());
    }
}

#[test]
fn only_the_first_click_reveals() {
    let mut m = RevealMachine::new(RevealType::Zoom);
    assert!(!m.is_revealed());
    assert!(!m.content_visible());
    assert!(m.click(FrameTime(100.0)));
    assert!(!m.click(FrameTime(200.0)));
    assert!(m.is_revealed());
    assert!(m.content_visible());
    // The transition still counts from the first click.
    assert!((m.transition_progress(FrameTime(600.0)) - 0.5).abs() < 1e-12);
}

#[test]
fn cover_fades_over_one_second() {
    let mut m = RevealMachine::new(RevealType::SwipeLeft);
    let before = m.cover_at(FrameTime(0.0));
    assert_eq!(before.opacity, 1.0);
    assert!(before.interactive);
    assert!(before.transform.is_identity());

    m.click(FrameTime(1000.0));
    let mid = m.cover_at(FrameTime(1500.0));
    assert!((mid.opacity - 0.5).abs() < 1e-4);
    assert!(!mid.interactive);
    assert!(m.is_animating(FrameTime(1500.0)));

    let done = m.cover_at(FrameTime(2000.0));
    assert!(done.is_gone());
    assert_eq!(done.transform, transform_for(RevealType::SwipeLeft, RevealState::Revealed));
    assert!(!m.is_animating(FrameTime(2000.0)));
}

#[test]
fn loop_runs_only_during_the_transition() {
    let mut m = RevealMachine::new(RevealType::Flip);
    assert_eq!(m.tick(FrameTime(0.0)).unwrap(), LoopControl::Stop);
    m.click(FrameTime(0.0));
    assert_eq!(m.tick(FrameTime(500.0)).unwrap(), LoopControl::Continue);
    assert_eq!(m.tick(FrameTime(1000.0)).unwrap(), LoopControl::Stop);
}

#[test]
fn hint_icon_depends_on_variant_and_disappears() {
    let mut lock = RevealMachine::new(RevealType::Lock);
    let hint = lock.hint().unwrap();
    assert_eq!(hint.icon, Some(HintIcon::Lock));
    assert_eq!(hint.label, REVEAL_HINT_LABEL);
    assert_eq!(reveal_hint(RevealType::Door).icon, Some(HintIcon::Door));
    assert_eq!(reveal_hint(RevealType::Zoom).icon, None);
    lock.click(FrameTime(0.0));
    assert!(lock.hint().is_none());
}

#[test]
fn cover_background_fills_defaults() {
    let bg = cover_background_settings(&CoverBackground::default());
    assert_eq!(bg.color.as_deref(), Some("#7c3aed"));
    assert_eq!(bg.image_url, None);
    assert_eq!(bg.image_opacity, Some(100.0));
    let gradient = bg.gradient.unwrap();
    assert!(!gradient.enabled);
    assert_eq!(gradient.direction, "135deg");
    let pattern = bg.pattern.unwrap();
    assert_eq!(pattern.kind, "dots");
    assert!((pattern.opacity - 10.0).abs() < 1e-9);
    let animation = bg.animation.unwrap();
    assert_eq!(animation.kind, "bubbles");
    assert_eq!(animation.intensity, 50.0);
}

#[test]
fn cover_background_honors_kind() {
    let cover = CoverBackground {
        kind: CoverKind::Image,
        image: Some("https://cdn.example/cover.jpg".into()),
        image_opacity: Some(0.4),
        gradient: Some(GradientSpec {
            enabled: true,
            colors: vec!["#000".into(), "#fff".into()],
            direction: "90deg".into(),
        }),
        ..CoverBackground::default()
    };
    let bg = cover_background_settings(&cover);
    assert_eq!(bg.image_url.as_deref(), Some("https://cdn.example/cover.jpg"));
    assert!((bg.image_opacity.unwrap() - 40.0).abs() < 1e-9);
    // Gradient only paints for gradient covers.
    assert!(!bg.gradient.unwrap().enabled);
}
