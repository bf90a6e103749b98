//! Embedded static assets for the site
//!
//! Uses rust-embed to bundle stylesheets, icons, and page images at compile
//! time. Assets are addressed by their site-absolute URL path and written
//! out verbatim by the build step.

use std::borrow::Cow;

use rust_embed::RustEmbed;

/// Embedded assets from the static directory
#[derive(RustEmbed)]
#[folder = "static"]
#[include = "css/**/*.css"]
#[include = "img/**/*.svg"]
#[include = "img/**/*.png"]
#[include = "img/**/*.jpg"]
pub struct StaticAssets;

impl StaticAssets {
    /// Read an embedded asset by its site-absolute URL path.
    pub fn read(url_path: &str) -> anyhow::Result<Cow<'static, [u8]>> {
        let key = url_path.trim_start_matches('/');
        Self::get(key)
            .map(|f| f.data)
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{url_path}""#))
    }

    /// Whether an embedded asset exists for the given URL path.
    pub fn contains(url_path: &str) -> bool {
        Self::get(url_path.trim_start_matches('/')).is_some()
    }
}

/// Icons shown next to the outcome highlights on case-study pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeIcon {
    /// Cost/pricing outcomes
    Dollar,
    /// Integration and tooling outcomes
    Workflow,
    /// Simplicity/onboarding outcomes
    Leaf,
    /// Performance outcomes
    Gauge,
    /// Community outcomes
    Voice,
    /// Time-to-production outcomes
    Time,
}

impl OutcomeIcon {
    /// Get the URL path for this icon
    pub fn path(self) -> &'static str {
        match self {
            OutcomeIcon::Dollar => "/img/pages/case-study/icons/dollar.svg",
            OutcomeIcon::Workflow => "/img/pages/case-study/icons/workflow.svg",
            OutcomeIcon::Leaf => "/img/pages/case-study/icons/leaf.svg",
            OutcomeIcon::Gauge => "/img/pages/case-study/icons/gauge.svg",
            OutcomeIcon::Voice => "/img/pages/case-study/icons/voice.svg",
            OutcomeIcon::Time => "/img/pages/case-study/icons/time.svg",
        }
    }

    /// Get the alt text for this icon
    pub fn alt(self) -> &'static str {
        match self {
            OutcomeIcon::Dollar => "Dollar icon",
            OutcomeIcon::Workflow => "Workflow icon",
            OutcomeIcon::Leaf => "Leaf icon",
            OutcomeIcon::Gauge => "Gauge icon",
            OutcomeIcon::Voice => "Voice icon",
            OutcomeIcon::Time => "Time icon",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icons_resolve_to_embedded_assets() {
        let icons = [
            OutcomeIcon::Dollar,
            OutcomeIcon::Workflow,
            OutcomeIcon::Leaf,
            OutcomeIcon::Gauge,
            OutcomeIcon::Voice,
            OutcomeIcon::Time,
        ];
        for icon in icons {
            assert!(
                StaticAssets::contains(icon.path()),
                "icon asset missing: {}",
                icon.path()
            );
        }
    }

    #[test]
    fn test_read_known_asset() {
        let css = StaticAssets::read("/css/theme.css").expect("theme stylesheet");
        assert!(!css.is_empty());
    }

    #[test]
    fn test_read_unknown_asset_fails() {
        assert!(StaticAssets::read("/img/does-not-exist.svg").is_err());
    }
}
