//! Comment model, normalization and threading

pub mod model;
pub mod normalizer;
pub mod stats;
pub mod forest;

pub use model::*;
pub use normalizer::{Normalizer, DATETIME_FORMAT};
pub use stats::Stats;
pub use forest::{ForestBuilder, Threaded};
