//! Type definitions for bstats-chart

mod error;
mod series;

pub use error::*;
pub use series::*;
