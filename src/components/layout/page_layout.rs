//! Page Layout Component
//!
//! The document shell around page content: head metadata, stylesheets, the
//! site header, and the footer. Pages hand it their title, description, and
//! canonical path and it produces the complete HTML document.

use maud::{DOCTYPE, Markup, html};

use crate::constants::{SITE_NAME, SITE_URL};
use crate::theme;

/// Document shell for a single page
pub struct PageLayout {
    title: String,
    description: String,
    canonical: String,
}

impl PageLayout {
    /// Create a layout for a page with the given metadata.
    ///
    /// `canonical` is the site-absolute path of the page, e.g.
    /// `/case-study/counterflow/`.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        canonical: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            canonical: canonical.into(),
        }
    }

    /// Absolute canonical URL for this page
    fn canonical_url(&self) -> String {
        format!("{}{}", SITE_URL.trim_end_matches('/'), self.canonical)
    }

    /// Wrap page content in the document shell
    pub fn wrap(self, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (self.title) }
                    meta name="description" content=(self.description);
                    link rel="canonical" href=(self.canonical_url());
                    @for stylesheet in theme::STYLESHEETS {
                        link rel="stylesheet" href=(stylesheet);
                    }
                }
                body {
                    (site_header())
                    main { (content) }
                    (site_footer())
                }
            }
        }
    }
}

fn site_header() -> Markup {
    html! {
        header class="header" {
            a class="header__brand" href="/" { (SITE_NAME) }
        }
    }
}

fn site_footer() -> Markup {
    html! {
        footer class="footer" {
            span class="footer__copyright" { "Copyright © " (SITE_NAME) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrapped() -> String {
        PageLayout::new("Page title", "Page description", "/case-study/counterflow/")
            .wrap(html! { p { "content" } })
            .into_string()
    }

    #[test]
    fn test_head_metadata() {
        let doc = wrapped();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>Page title</title>"));
        assert!(doc.contains(r#"<meta name="description" content="Page description">"#));
        assert!(doc.contains(
            r#"<link rel="canonical" href="https://questdb.io/case-study/counterflow/">"#
        ));
    }

    #[test]
    fn test_exactly_one_title_and_description() {
        let doc = wrapped();
        assert_eq!(doc.matches("<title>").count(), 1);
        assert_eq!(doc.matches(r#"name="description""#).count(), 1);
    }

    #[test]
    fn test_stylesheets_linked_in_order() {
        let doc = wrapped();
        let theme_at = doc.find("/css/theme.css").expect("theme stylesheet");
        let case_study_at = doc.find("/css/case-study.css").expect("case-study stylesheet");
        assert!(theme_at < case_study_at);
    }

    #[test]
    fn test_content_lands_in_main() {
        let doc = wrapped();
        assert!(doc.contains("<main><p>content</p></main>"));
    }
}
