//! Input data for the estimator: timing samples and generated arguments.

pub mod args;
pub mod timing;

pub use args::{ArgumentGenerator, Graph, ListNode, TreeNode};
pub use timing::{measure, try_measure, validate_plan};
