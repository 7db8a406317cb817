use super::*;

const RED_SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10" viewBox="0 0 10 10"><rect width="10" height="10" fill="#ff0000"/></svg>"##;

#[test]
fn rasterizes_to_requested_size() {
    let img = Rasterizer::without_fonts().rasterize(RED_SQUARE, 20, 20).unwrap();
    assert_eq!((img.width, img.height), (20, 20));
    assert_eq!(img.data.len(), 20 * 20 * 4);
    assert_eq!(img.pixel(10, 10), Some([255, 0, 0, 255]));
    assert_eq!(img.pixel(20, 0), None);
}

#[test]
fn half_transparent_fill_is_demultiplied() {
    let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4"><rect width="4" height="4" fill="#ff0000" fill-opacity="0.5"/></svg>"##;
    let img = Rasterizer::without_fonts().rasterize(svg, 4, 4).unwrap();
    let [r, g, b, a] = img.pixel(1, 1).unwrap();
    assert!((126..=129).contains(&a));
    assert!(r >= 250);
    assert_eq!((g, b), (0, 0));
}

#[test]
fn zero_size_is_rejected() {
    let err = Rasterizer::without_fonts().rasterize(RED_SQUARE, 0, 10).unwrap_err();
    assert!(matches!(err, CardError::Render(_)));
}

#[test]
fn malformed_svg_is_an_error() {
    assert!(Rasterizer::without_fonts().rasterize("<svg", 4, 4).is_err());
}

#[test]
fn png_roundtrips_through_image() {
    let dir = std::path::PathBuf::from("target").join("raster_unit");
    let path = dir.join("red.png");
    let img = Rasterizer::without_fonts().rasterize(RED_SQUARE, 8, 8).unwrap();
    img.write_png(&path).unwrap();
    let decoded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (8, 8));
    assert_eq!(decoded.get_pixel(3, 3).0, [255, 0, 0, 255]);
}
