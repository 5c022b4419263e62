/// Bidirectional reference graph between documents.
pub mod adjacency;

pub use adjacency::ReferenceGraph;
