//! Button Component

use maud::{Markup, Render, html};

use crate::helpers::classes;
use crate::theme::ButtonCss;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary call-to-action button
    #[default]
    Primary,
    /// Secondary button
    Secondary,
    /// Unstyled button, used to wrap images and logos in a bare link
    Plain,
}

/// A styled link button
///
/// Buttons on the marketing pages are always links. External hrefs open in
/// a new tab with `rel="noopener noreferrer"`.
pub struct Button {
    href: String,
    variant: ButtonVariant,
    body: Markup,
}

impl Button {
    /// Create a new button linking to `href`
    pub fn new(href: impl Into<String>, body: Markup) -> Self {
        Self {
            href: href.into(),
            variant: ButtonVariant::Primary,
            body,
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Create a primary button
    pub fn primary(href: impl Into<String>, body: Markup) -> Self {
        Self::new(href, body).variant(ButtonVariant::Primary)
    }

    /// Create a secondary button
    pub fn secondary(href: impl Into<String>, body: Markup) -> Self {
        Self::new(href, body).variant(ButtonVariant::Secondary)
    }

    /// Create a plain button
    pub fn plain(href: impl Into<String>, body: Markup) -> Self {
        Self::new(href, body).variant(ButtonVariant::Plain)
    }

    fn is_external(&self) -> bool {
        self.href.starts_with("http://") || self.href.starts_with("https://")
    }
}

impl Render for Button {
    fn render(&self) -> Markup {
        let variant_class = match self.variant {
            ButtonVariant::Primary => ButtonCss::primary(),
            ButtonVariant::Secondary => ButtonCss::secondary(),
            ButtonVariant::Plain => ButtonCss::plain(),
        };
        let external = self.is_external();

        html! {
            a class=(classes([ButtonCss::button(), variant_class]))
                href=(self.href)
                target=[external.then_some("_blank")]
                rel=[external.then_some("noopener noreferrer")] {
                (self.body)
            }
        }
    }
}
