//! Cover reveal and two-sided flip card state machines.

pub mod flip;
pub mod machine;
pub mod transform;
