//! Site Constants
//!
//! Centralized constants shared by the layout and the build pipeline.

/// Production origin used for canonical URLs and the sitemap
pub const SITE_URL: &str = "https://questdb.io";

/// Site name shown in the header wordmark
pub const SITE_NAME: &str = "QuestDB";

/// Default output directory for the rendered site
pub const DEFAULT_OUTPUT_DIR: &str = "dist";

/// Site configuration file read from the working directory when present
pub const CONFIG_FILE: &str = "site.toml";
