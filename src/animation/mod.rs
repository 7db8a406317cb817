pub mod ease;
pub mod keyframes;
pub mod scheduler;
pub mod timing;
