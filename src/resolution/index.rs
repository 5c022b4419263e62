use std::collections::{BTreeSet, HashMap, HashSet};

use super::table::DocumentTable;
use crate::types::MatchKey;

/// Reverse index from every url and slug to the documents carrying it.
///
/// An href `h` ends with key `k` exactly when the last `k.len()` bytes of `h`
/// equal `k`, so resolving `h` only needs one probe per distinct key length.
#[derive(Debug, Clone, Default)]
pub struct SuffixIndex {
    /// Key text -> (document url, which key of that document).
    keys: HashMap<String, Vec<(String, MatchKey)>>,
    /// Distinct byte lengths of all keys, ascending.
    lengths: BTreeSet<usize>,
}

impl SuffixIndex {
    /// Indexes the url and slug of every document in the table.
    pub fn build(table: &DocumentTable) -> Self {
        let mut index = Self::default();
        for key in table.iter() {
            index.add(&key.url, &key.url, MatchKey::Url);
            index.add(&key.slug, &key.url, MatchKey::Slug);
        }
        index
    }

    fn add(&mut self, key: &str, document_url: &str, matched_by: MatchKey) {
        self.lengths.insert(key.len());
        self.keys
            .entry(key.to_string())
            .or_default()
            .push((document_url.to_string(), matched_by));
    }

    /// Returns the url of every document whose url or slug is a suffix of
    /// `href`, with the key that matched.
    ///
    /// A document matching on both keys is reported once, as a url match.
    pub fn lookup(&self, href: &str) -> Vec<(&str, MatchKey)> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut matches = Vec::new();

        // Longest keys first, so a url match is seen before a shorter slug match.
        for &len in self.lengths.range(..=href.len()).rev() {
            let start = href.len() - len;
            // A UTF-8 key can only ever match at a char boundary.
            if !href.is_char_boundary(start) {
                continue;
            }
            let Some(owners) = self.keys.get(&href[start..]) else {
                continue;
            };
            for (url, matched_by) in owners {
                if seen.insert(url.as_str()) {
                    matches.push((url.as_str(), *matched_by));
                }
            }
        }

        // A slug longer than its document's url is probed before the url.
        for entry in matches.iter_mut() {
            if entry.1 == MatchKey::Slug && href.ends_with(entry.0) {
                entry.1 = MatchKey::Url;
            }
        }

        matches
    }
}
