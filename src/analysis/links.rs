use crate::results::LinkData;

/// Reported in place of an empty href.
pub const EMPTY_LINK: &str = "Empty Link";

/// Links that point nowhere useful: empty, a bare `#`, or a placeholder
/// `example.com` target.
pub fn detect_broken(links: &[LinkData]) -> Vec<String> {
    links
        .iter()
        .filter(|link| {
            link.href.is_empty() || link.href == "#" || link.href.contains("example.com")
        })
        .map(|link| {
            if link.href.is_empty() {
                EMPTY_LINK.to_string()
            } else {
                link.href.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(href: &str) -> LinkData {
        LinkData {
            href: href.to_string(),
            text: String::new(),
        }
    }

    #[test]
    fn test_detect_broken_links() {
        let links = vec![
            link(""),
            link("#"),
            link("#top"),
            link("https://example.com/page"),
            link("/about"),
            link("https://www.example.com"),
        ];
        assert_eq!(
            detect_broken(&links),
            vec![
                "Empty Link",
                "#",
                "https://example.com/page",
                "https://www.example.com"
            ]
        );
    }

    #[test]
    fn test_detect_broken_links_none() {
        assert!(detect_broken(&[link("/a"), link("https://ok.test")]).is_empty());
        assert!(detect_broken(&[]).is_empty());
    }
}
