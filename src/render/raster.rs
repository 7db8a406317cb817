use std::path::Path;
use std::sync::Arc;

use anyhow::Context as _;

use crate::foundation::error::{CardError, CardResult};
use crate::foundation::math::demultiply_rgba8;

const MAX_DIM: u32 = 16_384;

/// A rendered frame in straight (non-premultiplied) RGBA8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl RasterImage {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    pub fn write_png(&self, path: &Path) -> CardResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        image::save_buffer_with_format(
            path,
            &self.data,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

/// Turns card SVG into pixels. Holds the font database so repeated frames share it.
pub struct Rasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl Rasterizer {
    pub fn with_system_fonts() -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "loaded system fonts");
        Self {
            fontdb: Arc::new(db),
        }
    }

    /// No fonts at all; text nodes are dropped. Shapes and images still render.
    pub fn without_fonts() -> Self {
        Self {
            fontdb: Arc::new(usvg::fontdb::Database::new()),
        }
    }

    /// Rasterize `svg` scaled to exactly `width` x `height`.
    #[tracing::instrument(skip(self, svg), fields(bytes = svg.len()))]
    pub fn rasterize(&self, svg: &str, width: u32, height: u32) -> CardResult<RasterImage> {
        if width == 0 || height == 0 {
            return Err(CardError::render("raster size must be non-zero"));
        }
        if width > MAX_DIM || height > MAX_DIM {
            return Err(CardError::render(format!(
                "raster size too large: {width}x{height} (max {MAX_DIM}x{MAX_DIM})"
            )));
        }
        let opts = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_data(svg.as_bytes(), &opts).context("parse svg tree")?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| CardError::render("failed to allocate pixmap"))?;
        let sx = (width as f32) / tree.size().width();
        let sy = (height as f32) / tree.size().height();
        let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);
        resvg::render(&tree, xform, &mut pixmap.as_mut());

        let mut data = pixmap.data().to_vec();
        demultiply_rgba8(&mut data);
        Ok(RasterImage {
            width,
            height,
            data,
        })
    }
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::with_system_fonts()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
