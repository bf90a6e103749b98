//! Theme - Stylesheet Classes for Page Markup
//!
//! The marketing pages style themselves with a fixed set of stylesheet
//! modules. Each module is exposed as a zero-sized handle whose associated
//! functions return the class names the shipped stylesheets define.

mod classes;

pub use classes::*;

/// Stylesheets linked from every page, in link order.
pub const STYLESHEETS: &[&str] = &["/css/theme.css", "/css/case-study.css"];
