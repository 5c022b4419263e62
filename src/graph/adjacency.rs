use std::collections::{HashMap, HashSet};

use crate::types::*;

/// Forward and backward adjacency between documents, keyed by url.
///
/// Both directions are kept in step by [`ReferenceGraph::add_edge`], so
/// `b ∈ forward_of(a)` holds exactly when `a ∈ backward_of(b)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceGraph {
    forward: HashMap<String, HashSet<String>>,
    backward: HashMap<String, HashSet<String>>,
}

impl ReferenceGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from a list of edges. Repeated edges collapse.
    pub fn from_edges<'e, I>(edges: I) -> Self
    where
        I: IntoIterator<Item = &'e Edge>,
    {
        let mut graph = Self::new();
        for edge in edges {
            graph.add_edge(&edge.source, &edge.target);
        }
        graph
    }

    /// Records `source -> target` and its mirror `target <- source`.
    ///
    /// Returns `false` if the edge was already present.
    pub fn add_edge(&mut self, source: &str, target: &str) -> bool {
        let added = self
            .forward
            .entry(source.to_string())
            .or_default()
            .insert(target.to_string());
        self.backward
            .entry(target.to_string())
            .or_default()
            .insert(source.to_string());
        added
    }

    /// Urls the given document links to.
    pub fn forward_of(&self, url: &str) -> Option<&HashSet<String>> {
        self.forward.get(url)
    }

    /// Urls of the documents linking to the given one.
    pub fn backward_of(&self, url: &str) -> Option<&HashSet<String>> {
        self.backward.get(url)
    }

    /// Returns `true` if `source` links to `target`.
    pub fn contains_edge(&self, source: &str, target: &str) -> bool {
        self.forward
            .get(source)
            .is_some_and(|targets| targets.contains(target))
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.forward.values().map(HashSet::len).sum()
    }

    /// Iterates over every edge as `(source, target)`, in no particular order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.forward.iter().flat_map(|(source, targets)| {
            targets
                .iter()
                .map(move |target| (source.as_str(), target.as_str()))
        })
    }

    /// Materializes the references of one document.
    ///
    /// Each direction lists the adjacency set in its iteration order and is
    /// cut to its cap, if any. Which members survive a cut is unspecified.
    pub fn reference_set(&self, url: &str, limits: &ReferenceLimits) -> ReferenceSet {
        ReferenceSet {
            forward: take_limited(self.forward.get(url), limits.forward),
            backward: take_limited(self.backward.get(url), limits.backward),
        }
    }
}

fn take_limited(urls: Option<&HashSet<String>>, limit: Option<usize>) -> Vec<String> {
    let Some(urls) = urls else {
        return Vec::new();
    };
    urls.iter()
        .take(limit.unwrap_or(usize::MAX))
        .cloned()
        .collect()
}
