//! Per-frame transforms of the ornaments that ride on the border.

pub mod overlay;
pub mod renderer;
