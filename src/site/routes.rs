//! Routes - URL Path to Page Mapping
//!
//! The ordered registry of every page the build renders. Adding a page
//! means adding a variant here and wiring it to its content module.

use std::path::PathBuf;

use maud::Markup;

use crate::helpers::page_output_path;
use crate::pages::case_study::counterflow;

/// Pages of the site, in build order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Counterflow AI case study
    CaseStudyCounterflow,
}

impl Route {
    /// All routes, in the order they are rendered and listed
    pub fn all() -> &'static [Route] {
        &[Route::CaseStudyCounterflow]
    }

    /// Site-absolute URL path of the page
    pub fn path(self) -> &'static str {
        match self {
            Route::CaseStudyCounterflow => counterflow::CANONICAL_PATH,
        }
    }

    /// Metadata title of the page
    pub fn title(self) -> &'static str {
        match self {
            Route::CaseStudyCounterflow => counterflow::TITLE,
        }
    }

    /// Render the page document
    pub fn render(self) -> Markup {
        match self {
            Route::CaseStudyCounterflow => counterflow::render(),
        }
    }

    /// File the page is written to, relative to the output directory
    pub fn output_file(self) -> PathBuf {
        page_output_path(self.path())
    }
}
