use serde::{Deserialize, Serialize};

/// A generated document as seen by the inter-references pass.
///
/// The host pipeline owns documents: it assigns `url` and `slug`, renders
/// `content`, and reads the attached [`ReferenceSet`] back at template time.
pub trait Document {
    /// Unique identity of the document within the corpus.
    fn url(&self) -> &str;

    /// Short path-safe identifier, used as a fallback match key.
    fn slug(&self) -> &str;

    /// Fully rendered body, after every content post-processing step.
    fn content(&self) -> &str;

    /// Attaches the computed references to the document.
    fn set_references(&mut self, references: ReferenceSet);
}

/// Publication state of an article.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    #[default]
    Published,
    Draft,
}

impl ArticleStatus {
    /// Returns the string representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Published => "published",
            ArticleStatus::Draft => "draft",
        }
    }
}

/// An article produced by the site generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub url: String,
    pub slug: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub status: ArticleStatus,
    pub content: String,
    #[serde(default)]
    pub interrefs: ReferenceSet,
}

impl Article {
    /// Creates a published article with no references attached yet.
    pub fn new(url: impl Into<String>, slug: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            slug: slug.into(),
            title: String::new(),
            status: ArticleStatus::Published,
            content: content.into(),
            interrefs: ReferenceSet::default(),
        }
    }
}

impl Document for Article {
    fn url(&self) -> &str {
        &self.url
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn set_references(&mut self, references: ReferenceSet) {
        self.interrefs = references;
    }
}

/// Forward and backward references of one document.
///
/// Each entry is the url of the referenced document; look it up through
/// [`Corpus::get`] to reach the document itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceSet {
    /// Documents this one links to.
    #[serde(default)]
    pub forward: Vec<String>,
    /// Documents that link to this one.
    #[serde(default)]
    pub backward: Vec<String>,
}

impl ReferenceSet {
    /// Returns `true` if the document links to, or is linked from, anything.
    pub fn has_references(&self) -> bool {
        !self.forward.is_empty() || !self.backward.is_empty()
    }
}

/// The documents of one build: published articles followed by drafts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Corpus<D = Article> {
    #[serde(default = "Vec::new")]
    pub articles: Vec<D>,
    #[serde(default = "Vec::new")]
    pub drafts: Vec<D>,
    /// Set once every document's content is stable.
    #[serde(skip)]
    finalized: bool,
}

impl<D> Default for Corpus<D> {
    fn default() -> Self {
        Self {
            articles: Vec::new(),
            drafts: Vec::new(),
            finalized: false,
        }
    }
}

impl<D> Corpus<D> {
    /// Creates a corpus that is not finalized yet.
    pub fn new(articles: Vec<D>, drafts: Vec<D>) -> Self {
        Self {
            articles,
            drafts,
            finalized: false,
        }
    }

    /// Marks the content of every document as final.
    pub fn finalize(&mut self) {
        self.finalized = true;
    }

    /// Returns `true` once [`Corpus::finalize`] has been called.
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Total number of documents, drafts included.
    pub fn len(&self) -> usize {
        self.articles.len() + self.drafts.len()
    }

    /// Returns `true` if the corpus holds no documents at all.
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty() && self.drafts.is_empty()
    }

    /// Iterates over articles, then drafts.
    pub fn iter(&self) -> impl Iterator<Item = &D> {
        self.articles.iter().chain(self.drafts.iter())
    }

    /// Mutably iterates over articles, then drafts.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut D> {
        self.articles.iter_mut().chain(self.drafts.iter_mut())
    }
}

impl<D: Document> Corpus<D> {
    /// Finds a document by url.
    ///
    /// When several documents share a url the last one in iteration order
    /// wins, the same one the identity table keeps.
    pub fn get(&self, url: &str) -> Option<&D> {
        self.drafts
            .iter()
            .rev()
            .chain(self.articles.iter().rev())
            .find(|d| d.url() == url)
    }
}

/// An href found in a document body, tagged with the document it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CandidateLink {
    pub source_url: String,
    pub href: String,
}

/// Result of scanning one document body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub source_url: String,
    /// Distinct internal hrefs, sorted.
    pub candidates: Vec<CandidateLink>,
    /// Distinct hrefs classified as external.
    pub external_count: usize,
    /// Distinct same-page fragment hrefs.
    pub anchor_count: usize,
    /// Link-bearing elements without an href.
    pub missing_href_count: usize,
}

/// A directed reference from one document to another, keyed by url.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

/// Which key of the target document the href ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKey {
    Url,
    Slug,
}

/// A candidate link that resolved to a known document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedLink {
    pub original: CandidateLink,
    pub target_url: String,
    pub matched_by: MatchKey,
}

/// Result of resolving a batch of candidate links.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolutionResult {
    /// One entry per (candidate, target) pair; a candidate may appear many times.
    pub resolved: Vec<ResolvedLink>,
    /// Candidates that matched no known document.
    pub unresolved: Vec<CandidateLink>,
    pub total: usize,
    pub resolved_count: usize,
}

/// Per-direction caps applied when materializing a [`ReferenceSet`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceLimits {
    pub forward: Option<usize>,
    pub backward: Option<usize>,
}

/// Summary of one inter-references build.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildReport {
    pub document_count: usize,
    pub candidate_count: usize,
    pub unresolved_count: usize,
    pub edge_count: usize,
    /// Documents that ended up with at least one reference.
    pub linked_document_count: usize,
    pub duration_ms: u64,
}
