use std::fs;
use std::path::Path;

use questdb_site::pages::case_study::counterflow;
use questdb_site::site::build::{BuildSummary, build_site};
use questdb_site::site::config::SiteConfig;
use tempfile::TempDir;

fn build_in_temp() -> (TempDir, BuildSummary) {
    let temp_dir = TempDir::new().expect("create temp dir");
    let config = SiteConfig {
        base_url: "https://questdb.io".to_string(),
        output_dir: temp_dir.path().join("dist"),
    };
    let summary = build_site(&config).expect("build site");
    (temp_dir, summary)
}

fn read_output(dir: &TempDir, relative: &str) -> String {
    let path = dir.path().join("dist").join(relative);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read {}: {}", path.display(), e))
}

#[test]
fn test_build_writes_page_with_metadata() {
    let (dir, summary) = build_in_temp();
    assert_eq!(summary.pages_written, 1);

    let html = read_output(&dir, "case-study/counterflow/index.html");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(&format!("<title>{}</title>", counterflow::TITLE)));
    assert!(html.contains(counterflow::DESCRIPTION));
    assert!(html.contains(r#"<link rel="canonical" href="https://questdb.io/case-study/counterflow/">"#));
}

#[test]
fn test_build_writes_all_embedded_assets() {
    let (dir, summary) = build_in_temp();

    let expected = [
        "css/theme.css",
        "css/case-study.css",
        "img/pages/customers/logos/counterflow.svg",
        "img/pages/case-study/icons/dollar.svg",
        "img/pages/case-study/icons/workflow.svg",
        "img/pages/case-study/icons/leaf.svg",
        "img/pages/case-study/icons/gauge.svg",
        "img/pages/case-study/icons/voice.svg",
        "img/pages/case-study/icons/time.svg",
        "img/pages/case-study/counterflow/dashboard.png",
        "img/pages/case-study/counterflow/traffic-overview.jpg",
        "img/pages/case-study/counterflow/threateye_dpd.png",
        "img/pages/case-study/counterflow/threateye_ip_filter.png",
    ];
    for relative in expected {
        let path = dir.path().join("dist").join(relative);
        assert!(path.is_file(), "asset not written: {relative}");
    }
    assert_eq!(summary.assets_written, expected.len());
}

#[test]
fn test_build_reports_no_missing_assets() {
    let (_dir, summary) = build_in_temp();
    assert!(
        summary.missing_assets.is_empty(),
        "pages reference assets that are not embedded: {:?}",
        summary.missing_assets
    );
}

#[test]
fn test_sitemap_lists_canonical_url() {
    let (dir, _summary) = build_in_temp();
    let sitemap = read_output(&dir, "sitemap.xml");
    assert!(sitemap.contains("<loc>https://questdb.io/case-study/counterflow/</loc>"));
    assert!(sitemap.contains("<lastmod>"));
}

#[test]
fn test_manifest_describes_pages() {
    let (dir, _summary) = build_in_temp();
    let manifest: serde_json::Value =
        serde_json::from_str(&read_output(&dir, "build-manifest.json")).expect("parse manifest");

    assert!(manifest["base_url"]
        .as_str()
        .expect("base_url is a string")
        .starts_with("https://questdb.io"));
    assert!(manifest["generated_at"].is_string());

    let page = &manifest["pages"]["/case-study/counterflow/"];
    assert_eq!(page["title"], counterflow::TITLE);
    assert!(page["bytes"].as_u64().expect("bytes is a number") > 0);
}

#[test]
fn test_custom_base_url_flows_into_sitemap() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let config = SiteConfig {
        base_url: "https://staging.questdb.io".to_string(),
        output_dir: temp_dir.path().join("out"),
    };
    build_site(&config).expect("build site");

    let sitemap = fs::read_to_string(temp_dir.path().join("out/sitemap.xml")).expect("read sitemap");
    assert!(sitemap.contains("<loc>https://staging.questdb.io/case-study/counterflow/</loc>"));
}

#[test]
fn test_config_file_in_working_directory_is_optional() {
    // The default output directory name is used when no config file exists.
    assert!(!Path::new("site.toml").exists(), "workspace has no config file");
    let config = SiteConfig::load().expect("load default config");
    assert_eq!(config.output_dir, Path::new("dist"));
}
