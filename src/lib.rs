//! Export bStats plugin usage history as a rendered line-chart image
//!
//! The pipeline fetches raw samples from the bStats API, collapses them to
//! one value per UTC calendar day, fills the gaps with zeroes and renders
//! the result through the QuickChart web service.

pub mod cli;
pub mod services;
pub mod types;

pub use types::{ExportError, Result};
