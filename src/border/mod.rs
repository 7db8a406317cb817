//! The frame around the card: stroke layer, size tracking and ornament animation state.

pub mod container;
pub mod frame;
pub mod resize;
