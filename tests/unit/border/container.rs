use super::*;
use crate::model::card::ElementAnimation;

fn settings(ids: &[&str]) -> BorderSettings {
    BorderSettings {
        enabled: true,
        width: 4.0,
        decorative_elements: ids
            .iter()
            .enumerate()
            .map(|(i, id)| DecorativeElement {
                animation: ElementAnimation::Pulse,
                ..DecorativeElement::emoji(*id, "✨", i as f64 * 10.0)
            })
            .collect(),
        ..BorderSettings::default()
    }
}

fn mounted(ids: &[&str]) -> BorderContainer {
    let mut c = BorderContainer::new(settings(ids), 50.0, true);
    c.observe_size(Ok::<_, String>(Size::new(400.0, 200.0)), FrameTime(0.0));
    c
}

#[test]
fn tick_commits_a_frame_for_every_element() {
    let mut c = mounted(&["a", "b"]);
    assert!(c.frames().is_empty());
    assert_eq!(c.tick(FrameTime(16.0)).unwrap(), LoopControl::Continue);
    assert_eq!(c.frames().len(), 2);
    assert!(c.frame_for("a").is_some());
    assert!(c.frame_for("zzz").is_none());
}

#[test]
fn start_times_survive_setting_changes() {
    let mut c = mounted(&["a"]);
    c.tick(FrameTime(100.0)).unwrap();
    c.set_settings(settings(&["a", "b"]), FrameTime(700.0));
    c.tick(FrameTime(800.0)).unwrap();
    assert_eq!(c.timing().start_of("a"), Some(FrameTime(100.0)));
    assert_eq!(c.timing().start_of("b"), Some(FrameTime(700.0)));

    c.set_settings(settings(&["b"]), FrameTime(900.0));
    assert_eq!(c.timing().start_of("a"), None);
    assert!(c.frame_for("a").is_none());
}

#[test]
fn empty_list_stops_the_loop_and_clears_state() {
    let mut c = mounted(&["a"]);
    c.tick(FrameTime(0.0)).unwrap();
    c.set_settings(settings(&[]), FrameTime(10.0));
    assert!(!c.wants_frames());
    assert_eq!(c.tick(FrameTime(20.0)).unwrap(), LoopControl::Stop);
    assert!(c.frames().is_empty());
    assert!(c.timing().is_empty());
}

#[test]
fn disabled_border_has_no_elements_or_stroke() {
    let mut s = settings(&["a"]);
    s.enabled = false;
    let mut c = BorderContainer::new(s, 50.0, true);
    c.observe_size(Ok::<_, String>(Size::new(400.0, 200.0)), FrameTime(0.0));
    assert!(c.elements().is_empty());
    assert!(c.border_frame().is_none());
    assert_eq!(c.tick(FrameTime(0.0)).unwrap(), LoopControl::Stop);
}

#[test]
fn hover_is_single_and_last_write_wins() {
    let mut c = mounted(&["a", "b"]);
    c.pointer_enter("a");
    c.pointer_enter("b");
    assert_eq!(c.hovered(), Some("b"));
    c.pointer_enter("ghost");
    assert_eq!(c.hovered(), Some("b"));
    c.tick(FrameTime(0.0)).unwrap();
    assert_eq!(c.frame_for("b").unwrap().scale, 1.4);
    assert!(!c.frame_for("a").unwrap().hovered);
    c.pointer_leave();
    assert_eq!(c.hovered(), None);
}

#[test]
fn removing_hovered_element_clears_hover() {
    let mut c = mounted(&["a", "b"]);
    c.pointer_enter("a");
    c.set_settings(settings(&["b"]), FrameTime(5.0));
    assert_eq!(c.hovered(), None);
}

#[test]
fn only_image_elements_can_fail() {
    let mut s = settings(&["a"]);
    s.decorative_elements.push(DecorativeElement {
        id: "img".into(),
        kind: ElementKind::Image,
        content: "https://cdn.example/x.png".into(),
        ..DecorativeElement::default()
    });
    let mut c = BorderContainer::new(s, 50.0, true);
    c.mark_image_failed("a");
    c.mark_image_failed("img");
    assert!(!c.is_hidden("a"));
    assert!(c.is_hidden("img"));
}

#[test]
fn resize_is_debounced_through_ticks() {
    let mut c = mounted(&["a"]);
    c.observe_size(Ok::<_, String>(Size::new(200.0, 100.0)), FrameTime(10.0));
    c.tick(FrameTime(30.0)).unwrap();
    assert_eq!(c.size(), Size::new(400.0, 200.0));
    c.tick(FrameTime(61.0)).unwrap();
    assert_eq!(c.size(), Size::new(200.0, 100.0));
}
