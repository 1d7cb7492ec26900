use regex::Regex;
use serde::{Deserialize, Serialize};

/// Configuration for choosing which files of a site tree are audited
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathFilterConfig {
    /// Directory names that are never descended into
    #[serde(default)]
    pub skip_dirs: Vec<String>,

    /// Whether directories starting with `.` are skipped
    #[serde(default = "default_skip_hidden")]
    pub skip_hidden: bool,

    /// Required file name suffix
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Regex patterns for relative paths to include
    /// (if empty, all pages are included unless excluded)
    #[serde(default)]
    pub include_patterns: Vec<String>,

    /// Regex patterns for relative paths to exclude (these take precedence over include patterns)
    #[serde(default)]
    pub exclude_patterns: Vec<String>,
}

/// Default value for skip_hidden field
fn default_skip_hidden() -> bool {
    true
}

/// Default value for extension field
fn default_extension() -> String {
    ".html".to_string()
}

impl Default for PathFilterConfig {
    fn default() -> Self {
        Self {
            skip_dirs: vec!["node_modules".to_string()],
            skip_hidden: true,
            extension: default_extension(),
            include_patterns: Vec::new(),
            exclude_patterns: Vec::new(),
        }
    }
}

/// Path filter that decides which directories are walked and which files are audited
#[derive(Debug)]
pub struct PathFilter {
    config: PathFilterConfig,
    include_regexes: Vec<Regex>,
    exclude_regexes: Vec<Regex>,
}

impl Default for PathFilter {
    fn default() -> Self {
        Self::new(PathFilterConfig::default()).expect("Default filter has no patterns to compile")
    }
}

impl PathFilter {
    /// Create a new path filter from configuration
    pub fn new(config: PathFilterConfig) -> Result<Self, regex::Error> {
        let include_regexes = config
            .include_patterns
            .iter()
            .map(|pattern| Regex::new(pattern))
            .collect::<Result<Vec<_>, _>>()?;

        let exclude_regexes = config
            .exclude_patterns
            .iter()
            .map(|pattern| Regex::new(pattern))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            config,
            include_regexes,
            exclude_regexes,
        })
    }

    /// Determine if a directory with this name should be walked
    pub fn should_descend(&self, dir_name: &str) -> bool {
        if self.config.skip_hidden && dir_name.starts_with('.') {
            return false;
        }
        !self.config.skip_dirs.iter().any(|skip| skip == dir_name)
    }

    /// Determine if a file, given by its `/`-separated path relative to the
    /// site root, should be audited
    pub fn should_audit(&self, relative_path: &str) -> bool {
        if !relative_path.ends_with(&self.config.extension) {
            return false;
        }

        // Exclusions take precedence
        if self
            .exclude_regexes
            .iter()
            .any(|regex| regex.is_match(relative_path))
        {
            return false;
        }

        self.include_regexes.is_empty()
            || self
                .include_regexes
                .iter()
                .any(|regex| regex.is_match(relative_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        let filter = PathFilter::default();

        assert!(filter.should_audit("index.html"));
        assert!(filter.should_audit("blog/post.html"));
        assert!(!filter.should_audit("style.css"));
        assert!(!filter.should_audit("page.htm"));
        assert!(!filter.should_audit("INDEX.HTML"));

        assert!(filter.should_descend("blog"));
        assert!(!filter.should_descend("node_modules"));
        assert!(!filter.should_descend(".git"));
    }

    #[test]
    fn test_hidden_dirs_allowed_when_configured() {
        let config = PathFilterConfig {
            skip_hidden: false,
            ..PathFilterConfig::default()
        };
        let filter = PathFilter::new(config).unwrap();
        assert!(filter.should_descend(".well-known"));
        assert!(!filter.should_descend("node_modules"));
    }

    #[test]
    fn test_regex_patterns() {
        let config = PathFilterConfig {
            include_patterns: vec![r"^docs/".to_string()],
            exclude_patterns: vec![r"^docs/draft/".to_string()],
            ..PathFilterConfig::default()
        };
        let filter = PathFilter::new(config).unwrap();

        // Matching include pattern should be allowed
        assert!(filter.should_audit("docs/intro.html"));

        // Non-matching include pattern should be excluded
        assert!(!filter.should_audit("blog/post.html"));

        // Matching exclude pattern should be excluded even if it matches include
        assert!(!filter.should_audit("docs/draft/wip.html"));
    }

    #[test]
    fn test_invalid_pattern() {
        let config = PathFilterConfig {
            exclude_patterns: vec!["[".to_string()],
            ..PathFilterConfig::default()
        };
        assert!(PathFilter::new(config).is_err());
    }
}
