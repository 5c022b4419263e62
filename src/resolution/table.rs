use std::collections::HashMap;

use tracing::warn;

use crate::types::Document;

/// The two match keys of a known document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentKey {
    pub url: String,
    pub slug: String,
}

/// Every known document of the build, keyed by url.
///
/// This is the universe candidate links are resolved against.
#[derive(Debug, Clone, Default)]
pub struct DocumentTable {
    entries: HashMap<String, DocumentKey>,
}

impl DocumentTable {
    /// Builds the table from all documents of the corpus, drafts included.
    ///
    /// A later document with an already-seen url replaces the earlier entry.
    pub fn from_documents<'d, D, I>(documents: I) -> Self
    where
        D: Document + 'd,
        I: IntoIterator<Item = &'d D>,
    {
        let mut table = Self::default();
        for document in documents {
            table.insert(document.url(), document.slug());
        }
        table
    }

    /// Adds one document to the table.
    ///
    /// An empty url or slug is accepted. It is a suffix of every href, so the
    /// document becomes the target of every internal link in the build.
    pub fn insert(&mut self, url: &str, slug: &str) {
        if url.is_empty() || slug.is_empty() {
            warn!(
                url,
                slug, "document has an empty match key; every internal link will reference it"
            );
        }

        let key = DocumentKey {
            url: url.to_string(),
            slug: slug.to_string(),
        };
        if let Some(previous) = self.entries.insert(url.to_string(), key) {
            warn!(
                url,
                previous_slug = %previous.slug,
                slug,
                "duplicate document url; keeping the later document"
            );
        }
    }

    /// Looks up a document by url.
    pub fn get(&self, url: &str) -> Option<&DocumentKey> {
        self.entries.get(url)
    }

    /// Returns `true` if a document with this url is known.
    pub fn contains(&self, url: &str) -> bool {
        self.entries.contains_key(url)
    }

    /// Iterates over the known documents in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &DocumentKey> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
