//! Scene output: SVG markup and PNG frames.

pub mod raster;
pub mod svg;
