//! Pure frame geometry: perimeter placement, side travel and stroke layout.

pub mod perimeter;
pub mod stroke;
