//! Layout Components
//!
//! Document shell and shared page furniture.

pub mod page_layout;
pub mod pull_quote;
