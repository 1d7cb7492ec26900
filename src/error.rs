//! Error type shared by the audit engine, the site crawler and the CLI.

use std::path::PathBuf;

/// Errors surfaced by the audit engine.
///
/// Analysis of well-formed text never fails; these cover caller misuse and the
/// file/config layer around it.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    /// Input that cannot be treated as an HTML document (e.g. non UTF-8 bytes).
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// Reading a file or directory failed.
    #[error("IO_ERROR: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be loaded or failed validation.
    #[error("CONFIG_ERROR: {0}")]
    Config(String),

    /// A user supplied regex pattern did not compile.
    #[error("INVALID_PATTERN: {0}")]
    Pattern(#[from] regex::Error),

    /// A page analysis task panicked or was cancelled.
    #[error("TASK_FAILED: {0}")]
    Task(String),
}

impl AuditError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AuditError::Io { path: path.into(), source }
    }
}

impl From<serde_json::Error> for AuditError {
    fn from(err: serde_json::Error) -> Self {
        AuditError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuditError::InvalidInput("not utf-8".to_string());
        assert!(err.to_string().starts_with("INVALID_INPUT"));
        assert!(err.to_string().contains("not utf-8"));
    }

    #[test]
    fn test_io_error_names_path() {
        let err = AuditError::io(
            "site/index.html",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        let msg = err.to_string();
        assert!(msg.contains("IO_ERROR"));
        assert!(msg.contains("site/index.html"));
    }

    #[test]
    fn test_json_error_becomes_config_error() {
        let err: AuditError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, AuditError::Config(_)));
    }
}
