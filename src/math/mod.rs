//! Mathematical utilities: scalar least squares.

pub mod ols;

pub use ols::*;
