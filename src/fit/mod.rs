//! Complexity estimation.
//!
//! Responsibilities:
//!
//! - fit a sample set against one reference curve (`fitter`)
//! - fit the whole catalog and pick the best curve (`selection`)
//! - chain measurement and selection into a single call (`estimate`)

pub mod estimate;
pub mod fitter;
pub mod selection;

pub use estimate::*;
pub use fitter::*;
pub use selection::*;
