use crate::error::AuditError;
use crate::filter::{PathFilter, PathFilterConfig};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use url::Url;

/// Configuration for auditing a site tree on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteAuditConfig {
    /// Directory holding the site's HTML files
    pub root_dir: PathBuf,

    /// Identifier copied into the site report
    #[serde(default = "default_site_id")]
    pub site_id: String,

    /// Public base URL of the site; page URLs become `{base_url}/{relative path}`
    #[serde(default)]
    pub base_url: String,

    /// Maximum number of pages analysed at once
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,

    /// Directory names that are never descended into
    #[serde(default = "default_skip_dirs")]
    pub skip_dirs: Vec<String>,

    /// Regex patterns; matching relative paths are not audited
    #[serde(default)]
    pub exclude_patterns: Vec<String>,
}

/// Default value for site_id
fn default_site_id() -> String {
    "local".to_string()
}

/// Default value for max_concurrency
fn default_max_concurrency() -> usize {
    4
}

/// Default value for skip_dirs
fn default_skip_dirs() -> Vec<String> {
    vec!["node_modules".to_string()]
}

impl SiteAuditConfig {
    /// Create a new configuration with default values
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            site_id: default_site_id(),
            base_url: String::new(),
            max_concurrency: default_max_concurrency(),
            skip_dirs: default_skip_dirs(),
            exclude_patterns: Vec::new(),
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AuditError> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|e| AuditError::io(path, e))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| AuditError::io(path, e))?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, AuditError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that serde cannot.
    ///
    /// # Errors
    ///
    /// Returns `AuditError::Config` if `max_concurrency` is zero or a non-empty
    /// `base_url` is not an absolute http(s) URL, and `AuditError::Pattern` if
    /// an exclude pattern does not compile.
    pub fn validate(&self) -> Result<(), AuditError> {
        if self.max_concurrency == 0 {
            return Err(AuditError::Config(
                "max_concurrency must be greater than 0".into(),
            ));
        }

        if !self.base_url.is_empty() {
            let parsed = Url::parse(&self.base_url)
                .map_err(|e| AuditError::Config(format!("base_url {}: {e}", self.base_url)))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(AuditError::Config(format!(
                    "base_url must use http or https, got {}",
                    parsed.scheme()
                )));
            }
            if self.base_url.ends_with('/') {
                ::log::warn!(
                    "base_url {} ends with '/', page URLs will contain '//'",
                    self.base_url
                );
            }
        }

        self.path_filter()?;
        Ok(())
    }

    /// Build the file filter described by this configuration.
    pub fn path_filter(&self) -> Result<PathFilter, AuditError> {
        Ok(PathFilter::new(PathFilterConfig {
            skip_dirs: self.skip_dirs.clone(),
            exclude_patterns: self.exclude_patterns.clone(),
            ..PathFilterConfig::default()
        })?)
    }
}
