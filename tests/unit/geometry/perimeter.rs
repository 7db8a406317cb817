use super::*;

const EPS: f64 = 1e-9;

fn card() -> Size {
    Size::new(400.0, 200.0)
}

fn on_boundary(p: Point, line: &Centerline) -> bool {
    let (x0, y0) = (line.inset, line.inset);
    let (x1, y1) = (line.inset + line.width, line.inset + line.height);
    let in_x = p.x >= x0 - EPS && p.x <= x1 + EPS;
    let in_y = p.y >= y0 - EPS && p.y <= y1 + EPS;
    let on_h = (p.y - y0).abs() < 1e-6 || (p.y - y1).abs() < 1e-6;
    let on_v = (p.x - x0).abs() < 1e-6 || (p.x - x1).abs() < 1e-6;
    in_x && in_y && (on_h || on_v)
}

#[test]
fn every_percent_lands_on_the_centerline() {
    let line = Centerline::new(4.0, card());
    for i in 0..400 {
        let percent = i as f64 * 0.25;
        let placement = compute_perimeter_position(percent, 24.0, 4.0, card());
        assert!(
            on_boundary(placement.center(24.0), &line),
            "percent {percent} -> {placement:?}"
        );
    }
}

#[test]
fn loop_closes_at_one_hundred_percent() {
    let start = compute_perimeter_position(0.0, 24.0, 4.0, card());
    let end = compute_perimeter_position(99.999_999, 24.0, 4.0, card());
    assert!((start.left - end.left).abs() < 1e-3);
    assert!((start.top - end.top).abs() < 1e-3);
    assert_eq!(start, Placement::new(2.0 - 12.0, 2.0 - 12.0));
}

#[test]
fn whole_laps_do_not_change_the_point() {
    for percent in [0.0, 12.5, 37.3, 50.0, 99.0] {
        let base = compute_perimeter_position(percent, 24.0, 4.0, card());
        for k in [-3.0, -1.0, 1.0, 2.0, 7.0] {
            let other = compute_perimeter_position(percent + 100.0 * k, 24.0, 4.0, card());
            assert!((base.left - other.left).abs() < 1e-6, "{percent} k={k}");
            assert!((base.top - other.top).abs() < 1e-6, "{percent} k={k}");
        }
    }
}

#[test]
fn traversal_is_continuous_and_clockwise() {
    let line = Centerline::new(4.0, card());
    let step = 0.1;
    let max_jump = line.perimeter() * step / 100.0 + 1e-6;
    let mut prev = line.point_at_percent(0.0);
    let mut corners_seen = Vec::new();
    for i in 1..1000 {
        let p = line.point_at_percent(i as f64 * step);
        assert!((p - prev).hypot() <= max_jump, "jump at step {i}");
        let edge = if (p.y - line.inset).abs() < 1e-9 && p.x > line.inset {
            0
        } else if (p.x - (line.inset + line.width)).abs() < 1e-9 {
            1
        } else if (p.y - (line.inset + line.height)).abs() < 1e-9 {
            2
        } else {
            3
        };
        if corners_seen.last() != Some(&edge) {
            corners_seen.push(edge);
        }
        prev = p;
    }
    assert_eq!(corners_seen, vec![0, 1, 2, 3]);
}

#[test]
fn zero_size_container_is_finite() {
    for percent in [0.0, 33.0, 75.0, -12.0, f64::NAN] {
        let p = compute_perimeter_position(percent, 24.0, 4.0, Size::ZERO);
        assert!(p.is_finite());
        assert_eq!(p, Placement::new(-10.0, -10.0));
    }
}

#[test]
fn oversized_stroke_clamps_inner_rect() {
    let line = Centerline::new(500.0, Size::new(100.0, 50.0));
    assert_eq!(line.width, 0.0);
    assert_eq!(line.height, 0.0);
    let p = compute_perimeter_position(40.0, 8.0, 500.0, Size::new(100.0, 50.0));
    assert!(p.is_finite());
}

#[test]
fn quarter_percent_on_wide_card_is_on_top_edge() {
    // 25% of a 1184px centerline is 296px: still on the 396px top edge.
    let p = compute_perimeter_position(25.0, 24.0, 4.0, card());
    assert!((p.left - 286.0).abs() < EPS);
    assert!((p.top + 10.0).abs() < EPS);
}

#[test]
fn right_edge_midpoint_example() {
    let percent = (396.0 + 98.0) / 1184.0 * 100.0;
    let p = compute_perimeter_position(percent, 24.0, 4.0, card()).rounded();
    assert_eq!(p, Placement::new(386.0, 88.0));
}

#[test]
fn travel_wraps_start_offset() {
    let percent = travel_percent(FlowDirection::TopDown, 0.2, 0.9);
    assert!((percent - 10.0).abs() < 1e-9);
    let p = compute_side_travel_position(
        BorderSide::All,
        FlowDirection::TopDown,
        0.2,
        0.9,
        4.0,
        card(),
        24.0,
    );
    let c = p.center(24.0);
    assert!((c.y - 2.0).abs() < 1e-9);
    assert!((c.x - (2.0 + 118.4)).abs() < 1e-6);
}

#[test]
fn travel_percent_direction_table() {
    assert!((travel_percent(FlowDirection::DownTop, 0.25, 0.0) - 75.0).abs() < 1e-9);
    assert!((travel_percent(FlowDirection::LeftRight, 0.0, 0.0) - 25.0).abs() < 1e-9);
    assert!((travel_percent(FlowDirection::RightLeft, 0.0, 0.0) - 75.0).abs() < 1e-9);
    assert!((travel_percent(FlowDirection::RightLeft, 0.5, 0.0) - 25.0).abs() < 1e-9);
}

#[test]
fn side_travel_stays_on_its_side() {
    let size = card();
    for i in 0..20 {
        let progress = i as f64 / 20.0;
        let top = compute_side_travel_position(
            BorderSide::Top,
            FlowDirection::LeftRight,
            progress,
            0.0,
            4.0,
            size,
            24.0,
        )
        .center(24.0);
        assert!((top.y - 2.0).abs() < EPS);
        assert!((top.x - (2.0 + progress * 396.0)).abs() < 1e-9);

        let right = compute_side_travel_position(
            BorderSide::Right,
            FlowDirection::TopDown,
            progress,
            0.0,
            4.0,
            size,
            24.0,
        )
        .center(24.0);
        assert!((right.x - 398.0).abs() < EPS);
        assert!((right.y - (2.0 + progress * 196.0)).abs() < 1e-9);

        let bottom = compute_side_travel_position(
            BorderSide::Bottom,
            FlowDirection::RightLeft,
            progress,
            0.0,
            4.0,
            size,
            24.0,
        )
        .center(24.0);
        assert!((bottom.y - 198.0).abs() < EPS);
        assert!((bottom.x - (398.0 - progress * 396.0)).abs() < 1e-9);

        let left = compute_side_travel_position(
            BorderSide::Left,
            FlowDirection::DownTop,
            progress,
            0.0,
            4.0,
            size,
            24.0,
        )
        .center(24.0);
        assert!((left.x - 2.0).abs() < EPS);
        assert!((left.y - (198.0 - progress * 196.0)).abs() < 1e-9);
    }
}

#[test]
fn non_forward_direction_reverses_side_travel() {
    let fwd = compute_side_travel_position(
        BorderSide::Top,
        FlowDirection::LeftRight,
        0.25,
        0.0,
        4.0,
        card(),
        24.0,
    );
    let rev = compute_side_travel_position(
        BorderSide::Top,
        FlowDirection::TopDown,
        0.25,
        0.0,
        4.0,
        card(),
        24.0,
    );
    assert!((fwd.center(24.0).x - (2.0 + 0.25 * 396.0)).abs() < 1e-9);
    assert!((rev.center(24.0).x - (2.0 + 0.75 * 396.0)).abs() < 1e-9);
}
