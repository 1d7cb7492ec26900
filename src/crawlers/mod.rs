//! Site traversal: discovering pages in a site tree and auditing them.

pub mod filesystem;

pub use filesystem::{audit_site, discover_html_files};
