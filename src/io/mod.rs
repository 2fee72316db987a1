//! Input/output helpers.
//!
//! - sample exports (CSV) (`export`)
//! - estimate report JSON read/write (`report`)

pub mod export;
pub mod report;

pub use export::*;
pub use report::*;
