use tracing::trace;

use super::index::SuffixIndex;
use super::table::DocumentTable;
use crate::config::MatchStrategy;
use crate::types::*;

/// Resolves candidate links into edges between known documents.
///
/// An href resolves to every document whose url or slug it ends with. There
/// is no best-match selection: when one document's key is a suffix of
/// another's, both are linked.
pub struct ReferenceResolver<'a> {
    table: &'a DocumentTable,
    strategy: MatchStrategy,
    /// Built once at construction time for the indexed strategy.
    index: Option<SuffixIndex>,
}

impl<'a> ReferenceResolver<'a> {
    /// Creates a resolver over the given identity table.
    pub fn new(table: &'a DocumentTable, strategy: MatchStrategy) -> Self {
        let index = match strategy {
            MatchStrategy::SuffixIndex => Some(SuffixIndex::build(table)),
            MatchStrategy::LinearScan => None,
        };
        Self {
            table,
            strategy,
            index,
        }
    }

    /// Returns the matching strategy in use.
    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    /// Resolves a single candidate link to all the documents it matches.
    ///
    /// Returns an empty vector for hrefs pointing at nothing known.
    pub fn resolve_one(&self, link: &CandidateLink) -> Vec<ResolvedLink> {
        let matches: Vec<(String, MatchKey)> = match &self.index {
            Some(index) => index
                .lookup(&link.href)
                .into_iter()
                .map(|(url, key)| (url.to_string(), key))
                .collect(),
            None => self.scan(&link.href),
        };

        matches
            .into_iter()
            .map(|(target_url, matched_by)| {
                trace!(
                    source = %link.source_url,
                    href = %link.href,
                    target = %target_url,
                    ?matched_by,
                    "resolved link"
                );
                ResolvedLink {
                    original: link.clone(),
                    target_url,
                    matched_by,
                }
            })
            .collect()
    }

    /// Resolves a batch of candidate links, returning a summary of the
    /// results.
    pub fn resolve_all(&self, links: &[CandidateLink]) -> ResolutionResult {
        let total = links.len();
        let mut resolved = Vec::new();
        let mut unresolved = Vec::new();
        let mut resolved_count = 0;

        for link in links {
            let targets = self.resolve_one(link);
            if targets.is_empty() {
                unresolved.push(link.clone());
            } else {
                resolved_count += 1;
                resolved.extend(targets);
            }
        }

        ResolutionResult {
            resolved,
            unresolved,
            total,
            resolved_count,
        }
    }

    /// Converts resolved links into graph edges.
    pub fn create_edges(&self, resolved: &[ResolvedLink]) -> Vec<Edge> {
        resolved
            .iter()
            .map(|r| Edge {
                source: r.original.source_url.clone(),
                target: r.target_url.clone(),
            })
            .collect()
    }

    /// Compares the href against every known document.
    fn scan(&self, href: &str) -> Vec<(String, MatchKey)> {
        self.table
            .iter()
            .filter_map(|doc| {
                if href.ends_with(&doc.url) {
                    Some((doc.url.clone(), MatchKey::Url))
                } else if href.ends_with(&doc.slug) {
                    Some((doc.url.clone(), MatchKey::Slug))
                } else {
                    None
                }
            })
            .collect()
    }
}
