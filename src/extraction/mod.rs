/// Link extraction module.
///
/// Scans rendered document bodies for link-bearing elements and keeps the
/// hrefs that point inside the site.
mod html;

use std::collections::{BTreeSet, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::types::{CandidateLink, Document, ExtractionResult};

static ABSOLUTE_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://").expect("absolute url pattern is valid"));

/// How an href relates to the site being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkClass {
    /// Points somewhere inside the site.
    Internal,
    /// Absolute url outside the site root, or any absolute url when no root is set.
    External,
    /// Pure same-page fragment such as `#section`.
    Anchor,
}

/// Extracts internal candidate links from rendered HTML.
#[derive(Debug, Clone, Default)]
pub struct LinkExtractor {
    site_url: String,
}

impl LinkExtractor {
    /// Creates an extractor for the given site root. An empty root means
    /// absolute urls are never internal.
    pub fn new(site_url: impl Into<String>) -> Self {
        Self {
            site_url: site_url.into(),
        }
    }

    /// Returns the configured site root.
    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    /// Classifies an href relative to the site root.
    ///
    /// Absolute urls are internal only on a literal prefix match with a
    /// non-empty site root. Relative forms are internal unless they start
    /// with `#`.
    pub fn classify(&self, url: &str) -> LinkClass {
        if ABSOLUTE_URL_RE.is_match(url) {
            if !self.site_url.is_empty() && url.starts_with(&self.site_url) {
                LinkClass::Internal
            } else {
                LinkClass::External
            }
        } else if url.starts_with('#') {
            LinkClass::Anchor
        } else {
            LinkClass::Internal
        }
    }

    /// Returns `true` if the href points inside the site.
    pub fn is_site_url(&self, url: &str) -> bool {
        self.classify(url) == LinkClass::Internal
    }

    /// Returns every distinct href of `a` and `object` elements, before
    /// classification.
    pub fn extract_hrefs(&self, content: &str) -> HashSet<String> {
        html::scan_link_hrefs(content).into_iter().flatten().collect()
    }

    /// Scans one document body and returns its internal candidate links.
    pub fn extract(&self, source_url: &str, content: &str) -> ExtractionResult {
        let mut result = ExtractionResult {
            source_url: source_url.to_string(),
            ..ExtractionResult::default()
        };

        let mut internal = BTreeSet::new();
        let mut external = HashSet::new();
        let mut anchors = HashSet::new();

        for href in html::scan_link_hrefs(content) {
            let Some(href) = href else {
                result.missing_href_count += 1;
                continue;
            };
            match self.classify(&href) {
                LinkClass::Internal => {
                    internal.insert(href);
                }
                LinkClass::External => {
                    external.insert(href);
                }
                LinkClass::Anchor => {
                    anchors.insert(href);
                }
            }
        }

        result.external_count = external.len();
        result.anchor_count = anchors.len();
        result.candidates = internal
            .into_iter()
            .map(|href| CandidateLink {
                source_url: source_url.to_string(),
                href,
            })
            .collect();

        debug!(
            source = source_url,
            candidates = result.candidates.len(),
            external = result.external_count,
            anchors = result.anchor_count,
            missing_href = result.missing_href_count,
            "extracted links"
        );

        result
    }

    /// Scans a document's rendered content.
    pub fn extract_document<D: Document>(&self, document: &D) -> ExtractionResult {
        self.extract(document.url(), document.content())
    }
}
