//! Site Configuration
//!
//! Read from `site.toml` in the working directory when the file exists;
//! defaults otherwise. The page content itself never sees this: it only
//! affects where the site is written and how sitemap URLs are resolved.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::constants::{CONFIG_FILE, DEFAULT_OUTPUT_DIR, SITE_URL};
use crate::error::{Error, Result};

/// Site build configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Origin the sitemap resolves page paths against
    pub base_url: String,
    /// Directory the rendered site is written into
    pub output_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: SITE_URL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl SiteConfig {
    /// Load configuration from `site.toml` in the working directory.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load configuration from a specific path. A missing file is not an
    /// error: the defaults apply.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// The parsed base URL
    pub fn base_url(&self) -> Result<Url> {
        Url::parse(&self.base_url).map_err(|e| Error::InvalidConfig {
            message: format!("base_url {:?} is not a valid URL: {e}", self.base_url),
        })
    }

    fn validate(&self) -> Result<()> {
        let base_url = self.base_url()?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::InvalidConfig {
                message: format!("base_url must be http(s), got {:?}", base_url.scheme()),
            });
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(Error::InvalidConfig {
                message: "output_dir must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
