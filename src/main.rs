//! Site Generator - Main Entry Point
//!
//! Renders the QuestDB customer pages to static HTML

use questdb_site::error::Result;
use questdb_site::site::build::build_site;
use questdb_site::site::config::SiteConfig;

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    if let Err(error) = run() {
        tracing::error!(%error, "build failed");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = SiteConfig::load()?;
    tracing::info!(output_dir = %config.output_dir.display(), "building site");

    let summary = build_site(&config)?;
    tracing::info!(
        pages = summary.pages_written,
        assets = summary.assets_written,
        output_dir = %summary.output_dir.display(),
        "site built"
    );
    if !summary.missing_assets.is_empty() {
        tracing::warn!(
            missing = summary.missing_assets.len(),
            "some referenced assets are not embedded"
        );
    }
    Ok(())
}
