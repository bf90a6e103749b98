//! Components - Reusable Page Components
//!
//! Pure presentational components that render to HTML and do no I/O.

pub mod layout;
pub mod primitives;
