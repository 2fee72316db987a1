//! Reference growth-curve implementations.
//!
//! Curves are implemented as small, pure functions so that fitting/search code can
//! stay generic.

pub mod growth;

pub use growth::*;
