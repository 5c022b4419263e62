/// Reference resolution module.
///
/// Resolves internal candidate links into edges by suffix-matching their
/// hrefs against the url and slug of every known document.
mod index;
mod resolver;
mod table;

pub use index::SuffixIndex;
pub use resolver::ReferenceResolver;
pub use table::{DocumentKey, DocumentTable};
