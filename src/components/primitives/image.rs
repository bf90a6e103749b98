//! Image Component

use maud::{Markup, Render, html};

/// An image element with mandatory alt text
///
/// The constructor takes the alt text alongside the source path, so a page
/// cannot produce an image without a description. Width and height are the
/// intrinsic dimensions declared in the markup.
pub struct Img {
    src: String,
    alt: String,
    width: Option<u32>,
    height: Option<u32>,
    class: Option<String>,
}

impl Img {
    /// Create a new image for `src` described by `alt`
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            width: None,
            height: None,
            class: None,
        }
    }

    /// Set the intrinsic width in pixels
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the intrinsic height in pixels
    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Set the class attribute
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl Render for Img {
    fn render(&self) -> Markup {
        html! {
            img class=[self.class.as_deref()]
                src=(self.src)
                alt=(self.alt)
                width=[self.width]
                height=[self.height];
        }
    }
}
