//! Build Pipeline
//!
//! Renders every route, writes the embedded static assets, and emits the
//! sitemap and a build manifest. Single synchronous pass: render, verify
//! asset references, write.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use hashlink::LinkedHashMap;
use regex::Regex;
use serde::Serialize;
use url::Url;

use crate::assets::StaticAssets;
use crate::error::Result;
use crate::helpers::{asset_output_path, has_extension};
use crate::site::config::SiteConfig;
use crate::site::routes::Route;

/// What a build wrote, for logging and tests
#[derive(Debug)]
pub struct BuildSummary {
    /// Pages rendered and written
    pub pages_written: usize,
    /// Static assets written
    pub assets_written: usize,
    /// Referenced asset paths with no matching embedded asset
    pub missing_assets: Vec<String>,
    /// Where the site was written
    pub output_dir: PathBuf,
}

/// Per-page entry in the build manifest
#[derive(Debug, Serialize)]
struct ManifestEntry {
    title: &'static str,
    bytes: usize,
}

/// Build manifest written next to the rendered site, keyed by page path in
/// route order
#[derive(Debug, Serialize)]
struct BuildManifest {
    generated_at: DateTime<Utc>,
    base_url: String,
    pages: LinkedHashMap<&'static str, ManifestEntry>,
}

/// Render and write the whole site.
pub fn build_site(config: &SiteConfig) -> Result<BuildSummary> {
    let base_url = config.base_url()?;
    let out = &config.output_dir;
    fs::create_dir_all(out)?;

    let generated_at = Utc::now();
    let mut pages = LinkedHashMap::new();
    let mut missing_assets = Vec::new();

    for route in Route::all() {
        let html = route.render().into_string();

        for path in local_asset_refs(&html) {
            if !StaticAssets::contains(&path) && !missing_assets.contains(&path) {
                tracing::warn!(%path, route = route.path(), "referenced asset is not embedded");
                missing_assets.push(path);
            }
        }

        let file = out.join(route.output_file());
        write_file(&file, html.as_bytes())?;
        tracing::info!(path = route.path(), file = %file.display(), "page written");

        pages.insert(
            route.path(),
            ManifestEntry {
                title: route.title(),
                bytes: html.len(),
            },
        );
    }

    let assets_written = write_assets(out)?;
    write_sitemap(out, &base_url, generated_at)?;
    write_manifest(out, &base_url, generated_at, pages)?;

    Ok(BuildSummary {
        pages_written: Route::all().len(),
        assets_written,
        missing_assets,
        output_dir: out.clone(),
    })
}

/// Write every embedded asset under the output directory.
fn write_assets(out: &Path) -> Result<usize> {
    let mut written = 0;
    for key in StaticAssets::iter() {
        if let Some(file) = StaticAssets::get(&key) {
            write_file(&out.join(asset_output_path(&key)), &file.data)?;
            written += 1;
        }
    }
    Ok(written)
}

fn write_sitemap(out: &Path, base_url: &Url, generated_at: DateTime<Utc>) -> Result<()> {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for route in Route::all() {
        xml.push_str(&format!(
            "  <url><loc>{}</loc><lastmod>{}</lastmod></url>\n",
            absolute_url(base_url, route.path()),
            generated_at.format("%Y-%m-%d"),
        ));
    }
    xml.push_str("</urlset>\n");
    write_file(&out.join("sitemap.xml"), xml.as_bytes())
}

fn write_manifest(
    out: &Path,
    base_url: &Url,
    generated_at: DateTime<Utc>,
    pages: LinkedHashMap<&'static str, ManifestEntry>,
) -> Result<()> {
    let manifest = BuildManifest {
        generated_at,
        base_url: base_url.to_string(),
        pages,
    };
    let json = serde_json::to_string_pretty(&manifest)?;
    write_file(&out.join("build-manifest.json"), json.as_bytes())
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)?;
    Ok(())
}

/// Resolve a site-absolute path against the configured origin.
fn absolute_url(base_url: &Url, path: &str) -> String {
    match base_url.join(path) {
        Ok(url) => url.to_string(),
        Err(_) => format!("{}{}", base_url.as_str().trim_end_matches('/'), path),
    }
}

/// Site-local asset paths referenced by src/href attributes in a document.
///
/// Route links (`/case-study/counterflow/`) have no file extension and are
/// skipped; only file-like references are checked against the embed.
fn local_asset_refs(html: &str) -> Vec<String> {
    static ATTR_RE: OnceLock<Regex> = OnceLock::new();
    let re = ATTR_RE
        .get_or_init(|| Regex::new(r#"(?:src|href)="(/[^"]+)""#).expect("attribute regex compiles"));

    let mut refs = Vec::new();
    for captures in re.captures_iter(html) {
        if let Some(path) = captures.get(1) {
            let path = path.as_str();
            if has_extension(path) && !refs.iter().any(|r| r == path) {
                refs.push(path.to_string());
            }
        }
    }
    refs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_asset_refs_extracts_files_only() {
        let html = concat!(
            r#"<link rel="stylesheet" href="/css/theme.css">"#,
            r#"<a href="/case-study/counterflow/">case</a>"#,
            r#"<a href="https://www.counterflow.ai/">ext</a>"#,
            r#"<img src="/img/icons/dollar.svg" alt="Dollar icon">"#,
            r#"<img src="/img/icons/dollar.svg" alt="Dollar icon">"#,
        );
        let refs = local_asset_refs(html);
        assert_eq!(refs, vec!["/css/theme.css", "/img/icons/dollar.svg"]);
    }

    #[test]
    fn test_absolute_url_joins_path() {
        let base = Url::parse("https://questdb.io").expect("base url");
        assert_eq!(
            absolute_url(&base, "/case-study/counterflow/"),
            "https://questdb.io/case-study/counterflow/"
        );
    }

    #[test]
    fn test_write_file_creates_parents() {
        let dir = tempfile::tempdir().expect("tempdir");
        let nested = dir.path().join("a/b/c.txt");
        write_file(&nested, b"content").expect("write");
        assert_eq!(fs::read(&nested).expect("read back"), b"content");
    }
}
