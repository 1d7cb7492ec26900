use crate::analysis;
use crate::analysis::suggestions::TagSuggester;
use crate::config::SiteAuditConfig;
use crate::error::AuditError;
use crate::filter::PathFilter;
use crate::results::{AuditReport, SiteReport};
use crate::utils::{page_url, url_path};
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;

/// Finds every auditable file under `root`.
///
/// Directory entries are visited in byte-wise name order, so the result is
/// stable across runs and platforms. Symlinks are followed; a directory
/// reached twice through links is walked once.
pub fn discover_html_files(root: &Path, filter: &PathFilter) -> Result<Vec<PathBuf>, AuditError> {
    let mut found = Vec::new();
    let mut visited = HashSet::new();
    walk(root, root, filter, &mut visited, &mut found)?;
    ::log::info!("Discovered {} pages under {}", found.len(), root.display());
    Ok(found)
}

fn walk(
    root: &Path,
    dir: &Path,
    filter: &PathFilter,
    visited: &mut HashSet<PathBuf>,
    found: &mut Vec<PathBuf>,
) -> Result<(), AuditError> {
    let canonical = fs::canonicalize(dir).map_err(|e| AuditError::io(dir, e))?;
    if !visited.insert(canonical) {
        ::log::debug!("Already walked {}, skipping", dir.display());
        return Ok(());
    }

    let mut entries = fs::read_dir(dir)
        .map_err(|e| AuditError::io(dir, e))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| AuditError::io(dir, e))?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                ::log::warn!("Skipping dangling link {}", path.display());
                continue;
            }
            Err(e) => return Err(AuditError::io(&path, e)),
        };
        let name = entry.file_name();
        let name = name.to_string_lossy();

        if metadata.is_dir() {
            if filter.should_descend(&name) {
                walk(root, &path, filter, visited, found)?;
            } else {
                ::log::debug!("Skipping directory {}", path.display());
            }
        } else if filter.should_audit(&relative_url_path(root, &path)) {
            found.push(path);
        }
    }
    Ok(())
}

/// Path of `path` relative to `root`, with `/` separators.
pub fn relative_url_path(root: &Path, path: &Path) -> String {
    url_path(path.strip_prefix(root).unwrap_or(path))
}

/// Audits every page of the site described by `config`.
///
/// Pages are analysed concurrently, at most `max_concurrency` at a time, but
/// the report lists them in discovery order. The first page that cannot be
/// read fails the whole audit.
pub async fn audit_site(
    config: &SiteAuditConfig,
    suggester: Arc<dyn TagSuggester>,
) -> Result<SiteReport, AuditError> {
    config.validate()?;
    let filter = config.path_filter()?;

    let root = config.root_dir.clone();
    let files = tokio::task::spawn_blocking(move || discover_html_files(&root, &filter))
        .await
        .map_err(|e| AuditError::Task(e.to_string()))??;

    let semaphore = Arc::new(Semaphore::new(config.max_concurrency));
    let mut handles = Vec::with_capacity(files.len());
    for path in files {
        let url = page_url(&config.base_url, &relative_url_path(&config.root_dir, &path));
        handles.push(spawn_page_audit(
            path,
            url,
            Arc::clone(&semaphore),
            Arc::clone(&suggester),
        ));
    }

    let mut pages = Vec::with_capacity(handles.len());
    let mut handles = handles.into_iter();
    while let Some(handle) = handles.next() {
        let outcome = handle
            .await
            .map_err(|e| AuditError::Task(e.to_string()))
            .and_then(|result| result);
        match outcome {
            Ok(report) => pages.push(report),
            Err(e) => {
                handles.by_ref().for_each(|remaining| remaining.abort());
                ::log::error!("Site audit of {} failed: {}", config.site_id, e);
                return Err(e);
            }
        }
    }

    let report = SiteReport::from_pages(config.site_id.clone(), pages);
    ::log::info!(
        "Site {} audited: {} pages, overall score {}",
        report.site_id,
        report.pages.len(),
        report.overall_score
    );
    Ok(report)
}

/// Spawns the audit of one page; the permit is held while the file is read
/// and analysed.
fn spawn_page_audit(
    path: PathBuf,
    url: String,
    semaphore: Arc<Semaphore>,
    suggester: Arc<dyn TagSuggester>,
) -> JoinHandle<Result<AuditReport, AuditError>> {
    tokio::spawn(async move {
        let _permit = semaphore
            .acquire_owned()
            .await
            .map_err(|e| AuditError::Task(e.to_string()))?;

        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| AuditError::io(&path, e))?;
        let html = String::from_utf8(bytes).map_err(|e| {
            AuditError::InvalidInput(format!("{} is not valid UTF-8: {e}", path.display()))
        })?;

        let mut report = tokio::task::spawn_blocking(move || {
            analysis::analyze_with(&html, &url, suggester.as_ref())
        })
        .await
        .map_err(|e| AuditError::Task(e.to_string()))?;

        report.file_path = Some(path.to_string_lossy().into_owned());
        ::log::debug!("Page {} scored {}", report.url, report.overall_score);
        Ok(report)
    })
}
