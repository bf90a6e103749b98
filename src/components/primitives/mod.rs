//! Primitive Components
//!
//! Basic building blocks like buttons and images.

pub mod button;
pub mod image;
