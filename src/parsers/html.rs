use crate::results::{ImageData, LinkData, PageData};
use scraper::{ElementRef, Html, Selector};

/// Extracts the SEO-relevant fields of an HTML document.
///
/// Never fails: html5ever recovers from malformed markup, and any element or
/// attribute that is missing yields an empty string.
pub fn extract(html: &str) -> PageData {
    let doc = Html::parse_document(html);

    let title = first(&doc, "title")
        .map(|el| el.text().collect::<String>())
        .unwrap_or_default();

    let h1 = select_all(&doc, "h1").map(trimmed_text).collect::<Vec<_>>();
    let h2 = select_all(&doc, "h2").map(trimmed_text).collect::<Vec<_>>();

    let images = select_all(&doc, "img")
        .map(|el| ImageData {
            src: attr_or_empty(el, "src"),
            alt: el.value().attr("alt").map(str::to_string),
            loading: attr_or_empty(el, "loading"),
        })
        .collect::<Vec<_>>();

    let links = select_all(&doc, "a")
        .map(|el| LinkData {
            href: attr_or_empty(el, "href"),
            text: trimmed_text(el),
        })
        .collect::<Vec<_>>();

    let lang = doc
        .root_element()
        .value()
        .attr("lang")
        .unwrap_or_default()
        .to_string();

    ::log::debug!(
        "Extracted {} h1, {} h2, {} images, {} links",
        h1.len(),
        h2.len(),
        images.len(),
        links.len()
    );

    PageData {
        title,
        description: first_attr(&doc, r#"meta[name="description"]"#, "content"),
        keywords: first_attr(&doc, r#"meta[name="keywords"]"#, "content"),
        canonical: first_attr(&doc, r#"link[rel="canonical"]"#, "href"),
        robots: first_attr(&doc, r#"meta[name="robots"]"#, "content"),
        og_title: first_attr(&doc, r#"meta[property="og:title"]"#, "content"),
        og_description: first_attr(&doc, r#"meta[property="og:description"]"#, "content"),
        viewport: first_attr(&doc, r#"meta[name="viewport"]"#, "content"),
        h1,
        h2,
        images,
        links,
        lang,
    }
}

/// Every element matching `css`, in document order. An unparsable selector
/// matches nothing.
fn select_all<'a>(doc: &'a Html, css: &str) -> std::vec::IntoIter<ElementRef<'a>> {
    match Selector::parse(css) {
        Ok(selector) => doc.select(&selector).collect::<Vec<_>>().into_iter(),
        Err(_) => Vec::new().into_iter(),
    }
}

fn first<'a>(doc: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    select_all(doc, css).next()
}

/// Attribute of the first element matching `css`, or `""`.
fn first_attr(doc: &Html, css: &str, attr: &str) -> String {
    first(doc, css)
        .and_then(|el| el.value().attr(attr))
        .unwrap_or_default()
        .to_string()
}

fn attr_or_empty(el: ElementRef<'_>, attr: &str) -> String {
    el.value().attr(attr).unwrap_or_default().to_string()
}

fn trimmed_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
