use std::time::Instant;

use tracing::{debug, info};

use crate::config::InterRefsConfig;
use crate::errors::{InterRefsError, Result};
use crate::extraction::LinkExtractor;
use crate::graph::ReferenceGraph;
use crate::pipeline::{BuildStage, Pipeline};
use crate::resolution::{DocumentTable, ReferenceResolver};
use crate::types::*;

/// Name under which the pass registers itself on a [`Pipeline`].
pub const STAGE_NAME: &str = "interrefs";

/// Central orchestrator: extracts links, resolves them and attaches the
/// resulting references to every document.
#[derive(Debug, Clone, Default)]
pub struct InterRefs {
    config: InterRefsConfig,
}

/// Outcome of analyzing a corpus without touching its documents.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Untruncated forward and backward adjacency.
    pub graph: ReferenceGraph,
    pub report: BuildReport,
}

impl InterRefs {
    /// Creates the pass with the given settings.
    pub fn new(config: InterRefsConfig) -> Self {
        Self { config }
    }

    /// Returns a reference to the current configuration.
    pub fn config(&self) -> &InterRefsConfig {
        &self.config
    }

    /// Caps applied to each document's reference lists.
    pub fn limits(&self) -> ReferenceLimits {
        ReferenceLimits {
            forward: self.config.forward_refs,
            backward: self.config.backward_refs,
        }
    }

    /// Builds the reference graph of a finalized corpus.
    ///
    /// Only `linked_document_count` is left at zero in the report, since it
    /// depends on truncation.
    pub fn analyze<D: Document>(&self, corpus: &Corpus<D>) -> Result<Analysis> {
        if !corpus.is_finalized() {
            return Err(InterRefsError::NotFinalized);
        }
        let start = Instant::now();

        // 1. Identity table over articles and drafts
        let table = DocumentTable::from_documents(corpus.iter());

        // 2. Candidate links from every rendered body
        let extractor = LinkExtractor::new(self.config.site_url.as_str());
        let mut candidates = Vec::new();
        for document in corpus.iter() {
            candidates.extend(extractor.extract_document(document).candidates);
        }

        // 3. Resolve against the known documents
        let resolver = ReferenceResolver::new(&table, self.config.match_strategy);
        let resolution = resolver.resolve_all(&candidates);
        let edges = resolver.create_edges(&resolution.resolved);
        let graph = ReferenceGraph::from_edges(&edges);

        debug!(
            documents = table.len(),
            candidates = resolution.total,
            resolved = resolution.resolved_count,
            strategy = ?resolver.strategy(),
            "resolved candidate links"
        );

        let report = BuildReport {
            document_count: corpus.len(),
            candidate_count: resolution.total,
            unresolved_count: resolution.unresolved.len(),
            edge_count: graph.edge_count(),
            linked_document_count: 0,
            duration_ms: start.elapsed().as_millis() as u64,
        };

        Ok(Analysis { graph, report })
    }

    /// Runs the whole pass and attaches a [`ReferenceSet`] to every document.
    ///
    /// Nothing is attached if the pass fails.
    pub fn build<D: Document>(&self, corpus: &mut Corpus<D>) -> Result<BuildReport> {
        let start = Instant::now();
        let Analysis { graph, mut report } = self.analyze(corpus)?;

        let limits = self.limits();
        let references: Vec<ReferenceSet> = corpus
            .iter()
            .map(|document| graph.reference_set(document.url(), &limits))
            .collect();

        for (document, refs) in corpus.iter_mut().zip(references) {
            if refs.has_references() {
                report.linked_document_count += 1;
            }
            document.set_references(refs);
        }
        report.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            documents = report.document_count,
            candidates = report.candidate_count,
            unresolved = report.unresolved_count,
            edges = report.edge_count,
            linked = report.linked_document_count,
            duration_ms = report.duration_ms,
            "inter-references built"
        );

        Ok(report)
    }
}

impl<D: Document> BuildStage<D> for InterRefs {
    fn name(&self) -> &str {
        STAGE_NAME
    }

    fn run(&self, corpus: &mut Corpus<D>) -> Result<()> {
        self.build(corpus).map(|_| ())
    }
}

/// Registers the pass on a build pipeline.
pub fn register<D: Document>(pipeline: &mut Pipeline<D>, config: InterRefsConfig) -> Result<()> {
    pipeline.register(Box::new(InterRefs::new(config)))
}
