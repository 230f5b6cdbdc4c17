//! Domain data structures shared across the crate.

pub mod errors;
pub mod model;
