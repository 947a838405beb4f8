//! Models related to projects.

mod model;

pub use model::*;
