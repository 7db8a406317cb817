//! Scene to SVG markup.
//!
//! The document is laid out in card pixels. Layers, bottom to top: page background, the card
//! body (frame stroke, header, texts, media, sender, ornaments, floating emojis), the reveal
//! cover, then confetti. Background patterns and animated backgrounds are not drawn.

use std::fmt::Write as _;

use crate::border::frame::{BorderFrame, StrokePaint};
use crate::foundation::core::{Affine, Size};
use crate::model::card::{BackgroundSettings, ElementKind, TextBlock};
use crate::preview::scene::{CardScene, SceneCover, SceneElement};
use crate::reveal::transform::{TransformDescriptor, TransformOp};

const DEFAULT_TEXT_COLOR: &str = "#1f2937";
const DEFAULT_FONT_SIZE: f64 = 24.0;
const HEADER_EMOJI_SIZE: f64 = 48.0;
const MEDIA_THUMB: f64 = 120.0;
const LINE_GAP: f64 = 12.0;

/// Number as written into attributes: at most three decimals, no negative zero.
pub(crate) fn num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let r = (v * 1000.0).round() / 1000.0 + 0.0;
    format!("{r}")
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

fn matrix_attr(m: Affine) -> String {
    let [a, b, c, d, e, f] = m.as_coeffs();
    format!(
        "matrix({} {} {} {} {} {})",
        num(a),
        num(b),
        num(c),
        num(d),
        num(e),
        num(f)
    )
}

/// SVG linear-gradient endpoints for a CSS angle, in bounding-box units.
fn gradient_vector(angle_deg: f64) -> (f64, f64, f64, f64) {
    let rad = angle_deg.to_radians();
    let (dx, dy) = (rad.sin() / 2.0, -rad.cos() / 2.0);
    (0.5 - dx, 0.5 - dy, 0.5 + dx, 0.5 + dy)
}

fn write_gradient(out: &mut String, id: &str, colors: &[String], angle_deg: f64) {
    let (x1, y1, x2, y2) = gradient_vector(angle_deg);
    let _ = write!(
        out,
        r#"<linearGradient id="{id}" x1="{}" y1="{}" x2="{}" y2="{}">"#,
        num(x1),
        num(y1),
        num(x2),
        num(y2)
    );
    let last = colors.len().saturating_sub(1).max(1) as f64;
    for (i, color) in colors.iter().enumerate() {
        let _ = write!(
            out,
            r#"<stop offset="{}" stop-color="{}"/>"#,
            num(i as f64 / last),
            escape_xml(color)
        );
    }
    out.push_str("</linearGradient>");
}

fn write_background(out: &mut String, bg: &BackgroundSettings, id: &str, size: Size) {
    let (w, h) = (num(size.width), num(size.height));
    match bg.gradient.as_ref().filter(|g| g.is_usable()) {
        Some(gradient) => {
            out.push_str("<defs>");
            write_gradient(out, id, &gradient.colors, gradient.angle_deg());
            out.push_str("</defs>");
            let _ = write!(out, r#"<rect width="{w}" height="{h}" fill="url(#{id})"/>"#);
        }
        None => {
            let color = bg.color.as_deref().unwrap_or("#ffffff");
            let _ = write!(
                out,
                r#"<rect width="{w}" height="{h}" fill="{}"/>"#,
                escape_xml(color)
            );
        }
    }
    if let Some(url) = bg.image_url.as_deref().filter(|u| !u.is_empty()) {
        let opacity = bg.image_opacity.unwrap_or(100.0).clamp(0.0, 100.0) / 100.0;
        let _ = write!(
            out,
            r#"<image href="{}" width="{w}" height="{h}" preserveAspectRatio="xMidYMid slice" opacity="{}"/>"#,
            escape_xml(url),
            num(opacity)
        );
    }
}

fn write_border(out: &mut String, frame: &BorderFrame) {
    if let StrokePaint::Gradient { id, from, to } = &frame.paint {
        let _ = write!(
            out,
            r#"<defs><linearGradient id="{id}" x1="0%" x2="100%" y1="0%" y2="0%"><stop offset="0%" stop-color="{}"/><stop offset="100%" stop-color="{}"/></linearGradient></defs>"#,
            escape_xml(from),
            escape_xml(to)
        );
    }
    let stroke = escape_xml(&frame.paint.stroke_attr());
    for rect in &frame.rects {
        let _ = write!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{rx}" ry="{rx}" fill="none" stroke="{stroke}" stroke-width="{}" stroke-linecap="butt""#,
            num(rect.x),
            num(rect.y),
            num(rect.width),
            num(rect.height),
            num(rect.stroke_width),
            rx = num(rect.rx),
        );
        if let Some(dash) = &rect.dash_array {
            let _ = write!(out, r#" stroke-dasharray="{dash}""#);
        }
        out.push_str("/>");
    }
}

fn anchor_for(block: &TextBlock, width: f64, padding: f64) -> (&'static str, f64) {
    match block.style.text_align.as_deref() {
        Some("left") | Some("start") => ("start", padding),
        Some("right") | Some("end") => ("end", width - padding),
        _ => ("middle", width / 2.0),
    }
}

/// Writes `blocks` downward from `y`; returns the y below the last line.
fn write_texts(
    out: &mut String,
    blocks: &[TextBlock],
    width: f64,
    padding: f64,
    mut y: f64,
) -> f64 {
    for block in blocks {
        if block.content.trim().is_empty() {
            continue;
        }
        let size = block.style.font_size_px().unwrap_or(DEFAULT_FONT_SIZE);
        let (anchor, x) = anchor_for(block, width, padding);
        y += size;
        let _ = write!(
            out,
            r#"<text x="{}" y="{}" font-size="{}" text-anchor="{anchor}" fill="{}""#,
            num(x),
            num(y),
            num(size),
            escape_xml(block.style.color.as_deref().unwrap_or(DEFAULT_TEXT_COLOR)),
        );
        if let Some(weight) = block.style.font_weight.as_deref() {
            let _ = write!(out, r#" font-weight="{}""#, escape_xml(weight));
        }
        if let Some(family) = block.style.font_family.as_deref() {
            let _ = write!(out, r#" font-family="{}""#, escape_xml(family));
        }
        let _ = write!(out, ">{}</text>", escape_xml(&block.content));
        y += LINE_GAP;
    }
    y
}

fn write_element(out: &mut String, el: &SceneElement) {
    let f = &el.frame;
    let center = f.placement.center(f.size);
    let _ = write!(
        out,
        r#"<g data-id="{}" transform="translate({} {}) rotate({}) scale({})""#,
        escape_xml(&el.id),
        num(center.x + f.overlay.translate.x),
        num(center.y + f.overlay.translate.y),
        num(f.total_rotation_deg()),
        num(f.total_scale()),
    );
    if f.overlay.opacity < 1.0 {
        let _ = write!(out, r#" opacity="{}""#, num(f.overlay.opacity));
    }
    out.push('>');
    let half = f.size / 2.0;
    match el.kind {
        ElementKind::Emoji => {
            let _ = write!(
                out,
                r#"<text x="0" y="0" font-size="{}" text-anchor="middle" dominant-baseline="central">{}</text>"#,
                num(f.font_size()),
                escape_xml(&el.content)
            );
        }
        ElementKind::Image => {
            let _ = write!(
                out,
                r#"<image href="{}" x="{}" y="{}" width="{}" height="{}" preserveAspectRatio="xMidYMid slice"/>"#,
                escape_xml(&el.content),
                num(-half),
                num(-half),
                num(f.size),
                num(f.size)
            );
        }
    }
    out.push_str("</g>");
}

fn write_card_body(out: &mut String, scene: &CardScene, size: Size) {
    if let Some(frame) = &scene.border {
        write_border(out, frame);
    }
    let pad = scene.content_padding;
    let cx = size.width / 2.0;
    let mut y = pad;

    let back_face = scene
        .flip
        .as_ref()
        .filter(|flip| flip.face == crate::reveal::flip::CardFace::Back);
    match back_face {
        Some(flip) => {
            if let Some(header) = flip.back_content.header_text.as_deref() {
                y += 30.0;
                let _ = write!(
                    out,
                    r#"<text x="{}" y="{}" font-size="30" font-weight="bold" text-anchor="middle" fill="{DEFAULT_TEXT_COLOR}">{}</text>"#,
                    num(cx),
                    num(y),
                    escape_xml(header)
                );
                y += LINE_GAP * 2.0;
            }
            write_texts(out, scene.visible_texts(), size.width, pad, y);
        }
        None => {
            y += HEADER_EMOJI_SIZE;
            let _ = write!(
                out,
                r#"<text x="{}" y="{}" font-size="{}" text-anchor="middle">{}</text>"#,
                num(cx),
                num(y),
                num(HEADER_EMOJI_SIZE),
                escape_xml(&scene.header.emoji)
            );
            y += LINE_GAP;
            if let Some(header) = &scene.header.text {
                y = write_texts(out, std::slice::from_ref(header), size.width, pad, y);
            }
            y = write_texts(out, &scene.texts, size.width, pad, y);
            for (i, url) in scene.media.iter().enumerate() {
                let _ = write!(
                    out,
                    r#"<image href="{}" x="{}" y="{}" width="{thumb}" height="{thumb}" preserveAspectRatio="xMidYMid slice"/>"#,
                    escape_xml(url),
                    num(pad + i as f64 * (MEDIA_THUMB + LINE_GAP)),
                    num(y),
                    thumb = num(MEDIA_THUMB)
                );
            }
            if !scene.media.is_empty() {
                y += MEDIA_THUMB + LINE_GAP;
            }
            if !scene.sender_name.trim().is_empty() {
                y += 18.0;
                let _ = write!(
                    out,
                    r#"<text x="{}" y="{}" font-size="18" text-anchor="middle" fill="{DEFAULT_TEXT_COLOR}">From {}</text>"#,
                    num(cx),
                    num(y),
                    escape_xml(&scene.sender_name)
                );
            }
        }
    }

    for el in &scene.elements {
        write_element(out, el);
    }
    for emoji in &scene.emojis {
        let size = if emoji.size > 0.0 { emoji.size } else { 32.0 };
        let _ = write!(
            out,
            r#"<text x="{}" y="{}" font-size="{}" text-anchor="middle" dominant-baseline="central">{}</text>"#,
            num(emoji.position.x / 100.0 * scene.size.width),
            num(emoji.position.y / 100.0 * scene.size.height),
            num(size),
            escape_xml(&emoji.emoji)
        );
    }
}

fn write_cover(out: &mut String, cover: &SceneCover, size: Size) {
    let m = cover.frame.transform.to_affine(size);
    let _ = write!(
        out,
        r#"<g class="cover" transform="{}" opacity="{}">"#,
        matrix_attr(m),
        num(cover.frame.opacity)
    );
    write_background(out, &cover.background, "cover-gradient", size);
    let pad = 32.0;
    let mut y = pad;
    if let Some(header) = cover.back_content.header_text.as_deref() {
        y += 30.0;
        let _ = write!(
            out,
            r##"<text x="{}" y="{}" font-size="30" font-weight="bold" text-anchor="middle" fill="#ffffff">{}</text>"##,
            num(size.width / 2.0),
            num(y),
            escape_xml(header)
        );
        y += LINE_GAP;
    }
    write_texts(out, &cover.back_content.texts, size.width, pad, y);
    if let Some(hint) = &cover.hint {
        let icon = match hint.icon {
            Some(crate::reveal::machine::HintIcon::Lock) => "🔒 ",
            Some(crate::reveal::machine::HintIcon::Door) => "🚪 ",
            None => "",
        };
        let _ = write!(
            out,
            r#"<text x="{}" y="{}" font-size="14" text-anchor="middle" fill="{DEFAULT_TEXT_COLOR}">{icon}{}</text>"#,
            num(size.width / 2.0),
            num((size.height - 32.0).max(14.0)),
            escape_xml(hint.label)
        );
    }
    out.push_str("</g>");
}

/// Render the scene as a standalone SVG document sized to the card.
pub fn render_svg(scene: &CardScene) -> String {
    let size = Size::new(scene.size.width.max(1.0), scene.size.height.max(1.0));
    let mut out = String::with_capacity(4096);
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = num(size.width),
        h = num(size.height)
    );
    write_background(&mut out, &scene.background, "page-gradient", size);

    if scene.content_visible {
        match &scene.flip {
            Some(flip) => {
                // The back face is mirrored by the turn; counter-mirror so it reads correctly.
                let angle = if flip.rotation_deg >= 90.0 {
                    flip.rotation_deg - 180.0
                } else {
                    flip.rotation_deg
                };
                let turn = TransformDescriptor::new([TransformOp::RotateY(angle)]);
                let _ = write!(out, r#"<g transform="{}">"#, matrix_attr(turn.to_affine(size)));
                write_card_body(&mut out, scene, size);
                out.push_str("</g>");
            }
            None => write_card_body(&mut out, scene, size),
        }
    }
    if let Some(cover) = &scene.cover {
        write_cover(&mut out, cover, size);
    }
    for c in &scene.confetti {
        let _ = write!(
            out,
            r#"<rect transform="translate({} {}) rotate({})" x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            num(c.center.x),
            num(c.center.y),
            num(c.rotation_rad.to_degrees()),
            num(-c.size.width / 2.0),
            num(-c.size.height / 2.0),
            num(c.size.width),
            num(c.size.height),
            escape_xml(&c.color)
        );
    }
    out.push_str("</svg>");
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
