use std::collections::HashSet;

use interrefs::extraction::{LinkClass, LinkExtractor};
use interrefs::types::Article;

fn hrefs(result: &interrefs::types::ExtractionResult) -> Vec<&str> {
    result.candidates.iter().map(|c| c.href.as_str()).collect()
}

#[test]
fn test_is_site_url_with_site_root() {
    let extractor = LinkExtractor::new("https://example.com");
    assert!(extractor.is_site_url("https://example.com/post/1"));
    assert!(!extractor.is_site_url("https://other.com/x"));
    assert!(!extractor.is_site_url("#section"));
    assert!(extractor.is_site_url("/post/1"));
}

#[test]
fn test_is_site_url_without_site_root() {
    let extractor = LinkExtractor::new("");
    assert!(!extractor.is_site_url("https://example.com/post/1"));
    assert!(!extractor.is_site_url("http://example.com/"));
    assert!(extractor.is_site_url("post/1.html"));
}

#[test]
fn test_is_site_url_relative_forms() {
    let extractor = LinkExtractor::default();
    assert!(extractor.is_site_url(""));
    assert!(extractor.is_site_url("?page=2"));
    assert!(extractor.is_site_url("../other/"));
    assert!(extractor.is_site_url("mailto:me@example.com"));
    assert_eq!(extractor.classify("#top"), LinkClass::Anchor);
}

#[test]
fn test_site_prefix_is_literal() {
    let extractor = LinkExtractor::new("https://example.com");
    // No normalization: a longer host sharing the prefix still counts.
    assert!(extractor.is_site_url("https://example.com.evil.org/x"));
    assert!(!extractor.is_site_url("http://example.com/x"));
    assert_eq!(extractor.classify("HTTPS://other.com/"), LinkClass::Internal);
}

#[test]
fn test_extract_anchor_and_object_hrefs() {
    let extractor = LinkExtractor::default();
    let html = r#"
        <p>See <a href="/b/">B</a> and <A HREF='/c/'>C</A>.</p>
        <object href="/d/" type="text/html"></object>
        <area href="/e/">
        <abbr title="x">abbr</abbr>
    "#;
    let result = extractor.extract("/a/", html);
    assert_eq!(hrefs(&result), vec!["/b/", "/c/", "/d/"]);
    assert!(result.candidates.iter().all(|c| c.source_url == "/a/"));
}

#[test]
fn test_extract_filters_external_and_anchor_links() {
    let extractor = LinkExtractor::new("https://example.com");
    let html = r##"
        <a href="https://example.com/b/">in</a>
        <a href="http://external.com">out</a>
        <a href="#footnote-1">anchor</a>
        <a href="#footnote-1">anchor again</a>
    "##;
    let result = extractor.extract("/a/", html);
    assert_eq!(hrefs(&result), vec!["https://example.com/b/"]);
    assert_eq!(result.external_count, 1);
    assert_eq!(result.anchor_count, 1);
}

#[test]
fn test_extract_skips_elements_without_href() {
    let extractor = LinkExtractor::default();
    let html = r#"<a name="top"></a><a>bare</a><a href>empty</a><a href="/b/">b</a>"#;
    let result = extractor.extract("/a/", html);
    // A bare `href` attribute carries the empty string, which is still a candidate.
    assert_eq!(hrefs(&result), vec!["", "/b/"]);
    assert_eq!(result.missing_href_count, 2);
}

#[test]
fn test_extract_collapses_duplicates() {
    let extractor = LinkExtractor::default();
    let html = r#"<a href="/b/">1</a><a href="/b/">2</a><a class="x" href="/b/">3</a>"#;
    let result = extractor.extract("/a/", html);
    assert_eq!(hrefs(&result), vec!["/b/"]);
}

#[test]
fn test_extract_decodes_entities_and_keeps_quoted_gt() {
    let extractor = LinkExtractor::default();
    let html = r#"<a title="a > b" href="/search?q=1&amp;page=2">s</a>"#;
    let result = extractor.extract("/a/", html);
    assert_eq!(hrefs(&result), vec!["/search?q=1&page=2"]);
}

#[test]
fn test_extract_decodes_full_named_entity_set() {
    let extractor = LinkExtractor::default();
    let expected: HashSet<String> = ["/café/".to_string()].into_iter().collect();
    assert_eq!(
        extractor.extract_hrefs(r#"<a href="/caf&eacute;/">cafe</a>"#),
        expected
    );
}

#[test]
fn test_unquoted_value_may_contain_quote() {
    let extractor = LinkExtractor::default();
    let html = r#"<a href=/x/ title=it's>x</a> <a href='/y/'>y</a>"#;
    let expected: HashSet<String> = ["/x/", "/y/"].iter().map(|s| s.to_string()).collect();
    assert_eq!(extractor.extract_hrefs(html), expected);
}

#[test]
fn test_markup_inside_attribute_value_is_not_a_link() {
    let extractor = LinkExtractor::default();
    assert!(extractor
        .extract_hrefs(r#"<img alt="<a href='/ghost/'>">"#)
        .is_empty());
    let html = r#"<p title="<a href=/ghost/>">t</p><a href="/b/">b</a>"#;
    let result = extractor.extract("/a/", html);
    assert_eq!(hrefs(&result), vec!["/b/"]);
}

#[test]
fn test_extract_ignores_comments_and_scripts() {
    let extractor = LinkExtractor::default();
    let html = r#"
        <!-- <a href="/commented/">old</a> -->
        <script>document.write('<a href="/scripted/">x</a>');</script>
        <style>a[href="/styled/"] { color: red }</style>
        <a href="/real/">real</a>
    "#;
    assert_eq!(hrefs(&extractor.extract("/a/", html)), vec!["/real/"]);
}

#[test]
fn test_malformed_markup_degrades_gracefully() {
    let extractor = LinkExtractor::default();
    let result = extractor.extract("/a/", r#"<a href="/never-closed <p>text</p"#);
    assert!(result.candidates.is_empty());

    let result = extractor.extract("/a/", "<<<>>> <a href=/ok/> </a </div>");
    assert_eq!(hrefs(&result), vec!["/ok/"]);
}

#[test]
fn test_extract_hrefs_returns_all_before_classification() {
    let extractor = LinkExtractor::default();
    let html = r##"<a href="#x">x</a><a href="https://a.org/">a</a><a href="/b/">b</a>"##;
    let expected: HashSet<String> = ["#x", "https://a.org/", "/b/"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(extractor.extract_hrefs(html), expected);
}

#[test]
fn test_extract_document_reads_rendered_content() {
    let extractor = LinkExtractor::default();
    let article = Article::new("/a/", "a", r#"<a href="/b/">b</a>"#);
    let result = extractor.extract_document(&article);
    assert_eq!(result.source_url, "/a/");
    assert_eq!(hrefs(&result), vec!["/b/"]);
}
