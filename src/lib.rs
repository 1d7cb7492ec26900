// Re-export modules
pub mod analysis;
pub mod config;
pub mod crawlers;
pub mod error;
pub mod filter;
pub mod parsers;
pub mod results;
pub mod sitemap;
pub mod utils;

// Re-export commonly used types for convenience
pub use analysis::suggestions::{HeuristicSuggester, TagSuggester};
pub use analysis::{analyze, analyze_bytes, analyze_with};
pub use error::AuditError;
pub use parsers::extract;
pub use results::{AuditReport, ImageData, LinkData, PageData, Scores, SiteReport, SuggestedTags};

use config::SiteAuditConfig;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Main builder for auditing a static site on disk
pub struct Site {
    config: SiteAuditConfig,
    suggester: Arc<dyn TagSuggester>,
}

impl Site {
    /// Create a new Site builder rooted at the given directory
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            config: SiteAuditConfig::new(root_dir),
            suggester: Arc::new(HeuristicSuggester),
        }
    }

    /// Set the directory holding the site's pages
    pub fn with_root_dir(mut self, root_dir: impl Into<PathBuf>) -> Self {
        self.config.root_dir = root_dir.into();
        self
    }

    /// Set the identifier reported in the site report
    pub fn with_site_id(mut self, site_id: impl Into<String>) -> Self {
        self.config.site_id = site_id.into();
        self
    }

    /// Set the public base URL used to address pages
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Set the maximum number of pages analysed concurrently
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.config.max_concurrency = max_concurrency;
        self
    }

    /// Replace the suggestion strategy
    pub fn with_suggester(mut self, suggester: Arc<dyn TagSuggester>) -> Self {
        self.suggester = suggester;
        self
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: SiteAuditConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(self, path: impl AsRef<Path>) -> Result<Self, AuditError> {
        let config = SiteAuditConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Load configuration from a JSON string
    pub fn with_config_str(self, config_str: &str) -> Result<Self, AuditError> {
        let config = SiteAuditConfig::from_json(config_str)?;
        Ok(self.with_config(config))
    }

    /// The effective configuration
    pub fn config(&self) -> &SiteAuditConfig {
        &self.config
    }

    /// Audit every page and aggregate the results
    pub async fn audit(self) -> Result<SiteReport, AuditError> {
        ::log::info!("Starting site audit for: {}", self.config.root_dir.display());
        crawlers::audit_site(&self.config, self.suggester).await
    }

    /// Build `sitemap.xml` content for the site, dated today
    pub fn sitemap(&self) -> Result<String, AuditError> {
        if self.config.base_url.is_empty() {
            return Err(AuditError::Config(
                "base_url is required to generate a sitemap".into(),
            ));
        }
        self.config.validate()?;

        let filter = self.config.path_filter()?;
        let files = crawlers::discover_html_files(&self.config.root_dir, &filter)?;
        let relative_paths = files
            .iter()
            .map(|path| crawlers::filesystem::relative_url_path(&self.config.root_dir, path))
            .collect::<Vec<_>>();

        Ok(sitemap::generate_sitemap(
            &relative_paths,
            &self.config.base_url,
            chrono::Utc::now().date_naive(),
        ))
    }
}
