//! Pages - Site Content Modules
//!
//! Each page module pairs fixed content literals with the layout and
//! component collaborators and exposes a zero-argument render.

pub mod case_study;

use crate::assets::OutcomeIcon;

/// One outcome highlight on a case-study page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Icon shown before the label
    pub icon: OutcomeIcon,
    /// Short highlight text
    pub label: &'static str,
}
