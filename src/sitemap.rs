//! `sitemap.xml` and `robots.txt` generation for a static site.

use chrono::NaiveDate;

/// Builds a sitemap listing every page at `{base_url}/{relative_path}`.
pub fn generate_sitemap(relative_paths: &[String], base_url: &str, lastmod: NaiveDate) -> String {
    let lastmod = lastmod.format("%Y-%m-%d");
    let urls = relative_paths
        .iter()
        .map(|rel| {
            format!(
                "  <url>\n    <loc>{}</loc>\n    <lastmod>{lastmod}</lastmod>\n  </url>",
                escape_xml(&format!("{base_url}/{rel}"))
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n\
         {urls}\n\
         </urlset>"
    )
}

/// A permissive robots.txt pointing crawlers at the sitemap.
pub fn generate_robots_txt(base_url: &str) -> String {
    format!("User-agent: *\nAllow: /\nSitemap: {base_url}/sitemap.xml")
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 7).unwrap()
    }

    #[test]
    fn test_generate_sitemap() {
        let paths = vec!["index.html".to_string(), "blog/post.html".to_string()];
        let xml = generate_sitemap(&paths, "https://site.test", date());
        assert_eq!(
            xml,
            concat!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
                "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
                "  <url>\n",
                "    <loc>https://site.test/index.html</loc>\n",
                "    <lastmod>2025-03-07</lastmod>\n",
                "  </url>\n",
                "  <url>\n",
                "    <loc>https://site.test/blog/post.html</loc>\n",
                "    <lastmod>2025-03-07</lastmod>\n",
                "  </url>\n",
                "</urlset>"
            )
        );
    }

    #[test]
    fn test_generate_sitemap_escapes_loc() {
        let paths = vec!["a&b.html".to_string()];
        let xml = generate_sitemap(&paths, "https://site.test", date());
        assert!(xml.contains("<loc>https://site.test/a&amp;b.html</loc>"));
    }

    #[test]
    fn test_generate_sitemap_empty() {
        let xml = generate_sitemap(&[], "https://site.test", date());
        assert!(xml.ends_with(
            "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n\n</urlset>"
        ));
    }

    #[test]
    fn test_generate_robots_txt() {
        assert_eq!(
            generate_robots_txt("https://site.test"),
            "User-agent: *\nAllow: /\nSitemap: https://site.test/sitemap.xml"
        );
    }
}
