use super::*;
use crate::foundation::core::Point;

fn close(a: Point, b: Point) -> bool {
    (a - b).hypot() < 1e-9
}

#[test]
fn empty_list_is_none() {
    let t = TransformDescriptor::identity();
    assert_eq!(t.to_css(), "none");
    assert!(t.is_identity());
    assert_eq!(t.to_affine(Size::new(100.0, 50.0)), Affine::IDENTITY);
}

#[test]
fn css_keeps_function_order() {
    let t = TransformDescriptor::new([
        TransformOp::Scale(0.1),
        TransformOp::Rotate(360.0),
        TransformOp::TranslateY(-50.0),
    ]);
    assert_eq!(t.to_css(), "scale(0.1) rotate(360deg) translateY(-50%)");
}

#[test]
fn partial_interpolates_from_identity_values() {
    let t = TransformDescriptor::new([TransformOp::Scale(3.0), TransformOp::Rotate(15.0)]);
    let half = t.partial(0.5);
    assert_eq!(
        half.ops,
        vec![TransformOp::Scale(2.0), TransformOp::Rotate(7.5)]
    );
    assert!(t.partial(0.0).is_identity());
    assert_eq!(t.partial(1.0), t);
    assert_eq!(t.partial(7.0), t);
}

#[test]
fn translate_percent_is_relative_to_box() {
    let t = TransformDescriptor::new([TransformOp::TranslateX(-120.0)]);
    let m = t.to_affine(Size::new(200.0, 100.0));
    assert!(close(m * Point::new(0.0, 0.0), Point::new(-240.0, 0.0)));
}

#[test]
fn scaling_happens_about_the_center() {
    let t = TransformDescriptor::new([TransformOp::ScaleY(0.0)]);
    let m = t.to_affine(Size::new(200.0, 100.0));
    assert!(close(m * Point::new(10.0, 0.0), Point::new(10.0, 50.0)));
    assert!(close(m * Point::new(10.0, 100.0), Point::new(10.0, 50.0)));
}

#[test]
fn rotate_y_half_turn_mirrors_horizontally() {
    let t = TransformDescriptor::new([TransformOp::RotateY(180.0)]);
    let m = t.to_affine(Size::new(200.0, 100.0));
    assert!(close(m * Point::new(0.0, 30.0), Point::new(200.0, 30.0)));
}
