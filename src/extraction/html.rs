use once_cell::sync::Lazy;
use scraper::{Html, Selector};

/// Elements whose `href` can point at another document.
static LINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a, object").expect("link selector is valid"));

/// The `href` of one link-bearing element, `None` when the element has none.
pub(crate) type LinkHref = Option<String>;

/// Parses rendered HTML and returns one entry per `a`/`object` element, in
/// document order.
///
/// Parsing never fails. Unclosed tags, stray `<` and similar damage are
/// recovered the way a browser would, and character references in attribute
/// values arrive already decoded.
pub(crate) fn scan_link_hrefs(html: &str) -> Vec<LinkHref> {
    let fragment = Html::parse_fragment(html);

    fragment
        .select(&LINK_SELECTOR)
        .map(|element| element.value().attr("href").map(str::to_string))
        .collect()
}
