//! cardfx is a greeting-card rendering engine.
//!
//! A card is described by a [`CardConfig`]. The engine turns it into frames:
//!
//! - Mount a [`CardPreview`] and drive it with [`CardPreview::tick`]
//! - Take a [`CardScene`] snapshot at any instant and render it with [`render_svg`]
//! - Rasterize the SVG to pixels with a [`Rasterizer`]
//!
//! Published cards live in a slug-keyed [`CardStore`] behind a [`CardRepository`], with a
//! [`Janitor`] sweeping expired documents and their media.
#![forbid(unsafe_code)]

mod foundation;

pub mod animation;
/// Animated frame around the card.
pub mod border;
pub mod config;
pub mod confetti;
pub mod decor;
pub mod geometry;
/// Card document model.
pub mod model;
pub mod preview;
/// SVG and raster output.
pub mod render;
pub mod reveal;
/// Card persistence.
pub mod store;

pub use crate::foundation::core::{
    Affine, FrameTime, Placement, Point, Rect, Size, Vec2, measured_size,
};
pub use crate::foundation::error::{CardError, CardResult};

pub use crate::config::EngineConfig;
pub use crate::model::card::CardConfig;
pub use crate::preview::composer::{CardPreview, ClickOutcome, PreviewLayout, PreviewOptions};
pub use crate::preview::scene::CardScene;
pub use crate::render::raster::{RasterImage, Rasterizer};
pub use crate::render::svg::render_svg;
pub use crate::store::CardStore;
pub use crate::store::document::{CardDocument, CardSummary};
pub use crate::store::fs::FsStore;
pub use crate::store::janitor::{FsMediaStore, Janitor, MediaStore, SweepReport};
pub use crate::store::memory::MemoryStore;
pub use crate::store::repository::CardRepository;
pub use crate::store::slug::slug_for;
