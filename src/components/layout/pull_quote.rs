//! Pull Quote Component

use maud::{Markup, Render, html};

use crate::helpers::classes;
use crate::theme::{CardCss, SectionCss};

/// A testimonial pull-quote with decorative curly quotes and attribution
pub struct PullQuote {
    quote: String,
    attribution: String,
}

impl PullQuote {
    /// Create a pull-quote. The quote text is given bare; the decorative
    /// quote marks are added by the component.
    pub fn new(quote: impl Into<String>, attribution: impl Into<String>) -> Self {
        Self {
            quote: quote.into(),
            attribution: attribution.into(),
        }
    }
}

impl Render for PullQuote {
    fn render(&self) -> Markup {
        html! {
            div class=(classes(["markdown", SectionCss::inner(), SectionCss::column()])) {
                p class=(CardCss::title()) {
                    span class=(CardCss::quote()) { "“" }
                    (self.quote)
                    span class=(CardCss::quote()) { "”" }
                }
                p class=(CardCss::title()) {
                    b { (self.attribution) }
                }
            }
        }
    }
}
