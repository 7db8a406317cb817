use super::*;

#[test]
fn decodes_camel_case_document_with_defaults() {
    let json = r##"
{
  "eventType": "birthday",
  "senderName": "Ana",
  "receiverName": "Ben",
  "borderSettings": {
    "enabled": true,
    "style": "double",
    "width": 6,
    "radius": 20,
    "primaryColor": "#ff0000",
    "secondaryColor": "#0000ff",
    "decorativeElements": [
      { "id": "a", "type": "emoji", "content": "🎈", "position": 10, "size": 30, "animation": "travel",
        "flowDirection": "left-right", "borderSide": "top", "travelSpeed": 4 },
      { "id": "b", "type": "image", "content": "https://x/y.png", "position": -20, "animation": "revolve" }
    ]
  },
  "interactiveReveal": { "enabled": true, "revealType": "swipe-left" },
  "confetti": { "enabled": true, "mode": "continuous" }
}
"##;
    let cfg = CardConfig::from_json_str(json).unwrap();
    let border = &cfg.border_settings;
    assert_eq!(border.style, BorderStyle::Double);
    assert!(border.has_gradient());
    let a = &border.decorative_elements[0];
    assert_eq!(a.animation, ElementAnimation::Travel);
    assert_eq!(a.flow_direction, FlowDirection::LeftRight);
    assert_eq!(a.border_side, BorderSide::Top);
    assert_eq!(a.speed_override(), Some(4.0));
    let b = &border.decorative_elements[1];
    assert_eq!(b.kind, ElementKind::Image);
    assert_eq!(b.animation, ElementAnimation::None);
    assert_eq!(b.size_px(), 24.0);
    assert_eq!(b.start_percent(), 80.0);
    assert_eq!(cfg.interactive_reveal.reveal_type, RevealType::SwipeLeft);
    assert_eq!(cfg.confetti.mode, ConfettiMode::Continuous);
    assert_eq!(cfg.confetti.density, 150);
    assert_eq!(cfg.confetti.colors.len(), 5);
}

#[test]
fn event_name_falls_back_by_type() {
    let mut cfg = CardConfig::default();
    assert_eq!(cfg.event_name(), "event");
    cfg.event_type = "birthday".into();
    assert_eq!(cfg.event_name(), "birthday");
    cfg.event_type = "custom".into();
    assert_eq!(cfg.event_name(), "custom");
    cfg.custom_event_name = Some("Promotion Party".into());
    assert_eq!(cfg.event_name(), "Promotion Party");
    assert_eq!(cfg.event_emoji(), "🎉");
    cfg.custom_event_emoji = Some("🥂".into());
    assert_eq!(cfg.event_emoji(), "🥂");
}

#[test]
fn duplicate_element_ids_are_rejected() {
    let mut border = BorderSettings {
        enabled: true,
        ..BorderSettings::default()
    };
    border.decorative_elements = vec![
        DecorativeElement::emoji("x", "⭐", 0.0),
        DecorativeElement::emoji("x", "⭐", 50.0),
    ];
    let err = border.validate().unwrap_err();
    assert!(err.to_string().contains("duplicate"));
}

#[test]
fn enabled_confetti_needs_palette_and_duration() {
    let mut confetti = ConfettiSettings {
        enabled: true,
        ..ConfettiSettings::default()
    };
    assert!(confetti.validate().is_ok());
    confetti.colors.clear();
    assert!(confetti.validate().is_err());
    confetti.colors = vec!["#fff".into()];
    confetti.duration = 0.0;
    assert!(confetti.validate().is_err());
}

#[test]
fn stroke_width_respects_enabled_gate() {
    let mut border = BorderSettings {
        width: 0.0,
        ..BorderSettings::default()
    };
    assert_eq!(border.stroke_width(), 0.0);
    assert_eq!(border.geometry_width(), 1.0);
    border.enabled = true;
    border.width = 8.0;
    assert_eq!(border.stroke_width(), 8.0);
    assert!(!border.has_gradient());
    border.secondary_color = Some(border.primary_color.clone());
    assert!(!border.has_gradient());
}

#[test]
fn text_style_parses_pixel_sizes() {
    let style = TextStyle {
        font_size: Some("32px".into()),
        ..TextStyle::default()
    };
    assert_eq!(style.font_size_px(), Some(32.0));
    let style = TextStyle {
        font_size: Some("large".into()),
        ..TextStyle::default()
    };
    assert_eq!(style.font_size_px(), None);
}

#[test]
fn gradient_angle_defaults_to_css_default() {
    let g = GradientSpec {
        enabled: true,
        colors: vec!["#000".into(), "#fff".into()],
        direction: "135deg".into(),
    };
    assert_eq!(g.angle_deg(), 135.0);
    assert!(g.is_usable());
    assert_eq!(GradientSpec::default().angle_deg(), 180.0);
}
