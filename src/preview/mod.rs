//! Layout selection and the mounted card preview.

pub mod composer;
pub mod scene;
