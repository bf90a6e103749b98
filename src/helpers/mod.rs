//! Helper Utilities
//!
//! Common utilities used across the site builder.

mod classes;
mod paths;

pub use classes::*;
pub use paths::*;
