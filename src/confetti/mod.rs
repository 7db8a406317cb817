pub mod canvas;
pub mod engine;
