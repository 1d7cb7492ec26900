use std::path::Path;

/// Length of a string in characters rather than bytes.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// The first `max_chars` characters of `s`.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

/// A relative file path rendered with `/` separators, for use in URLs.
pub fn url_path(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Joins a base URL and a relative page path the way site reports address
/// pages: `"{base}/{path}"`, or just the path when there is no base.
pub fn page_url(base_url: &str, relative_path: &str) -> String {
    if base_url.is_empty() {
        relative_path.to_string()
    } else {
        format!("{base_url}/{relative_path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_truncate_chars_multibyte() {
        assert_eq!(truncate_chars("héllo wörld", 7), "héllo w");
        assert_eq!(truncate_chars("short", 60), "short");
        assert_eq!(char_len("héllo"), 5);
    }

    #[test]
    fn test_url_path() {
        let path: PathBuf = ["blog", "2024", "post.html"].iter().collect();
        assert_eq!(url_path(&path), "blog/2024/post.html");
        assert_eq!(url_path(Path::new("index.html")), "index.html");
    }

    #[test]
    fn test_page_url() {
        assert_eq!(page_url("", "about.html"), "about.html");
        assert_eq!(
            page_url("https://site.test", "blog/post.html"),
            "https://site.test/blog/post.html"
        );
    }
}
