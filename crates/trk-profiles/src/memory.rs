use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::document::{DocumentOrigin, ProfileDocument};
use crate::error::ProfileResult;
use crate::traits::ProfileSource;

/// In-memory profile source.
///
/// Intended for tests and embedding. Documents are held behind a `RwLock`
/// keyed by `(profile, file_name)` and cloned on read.
pub struct InMemoryProfileSource {
    origin: DocumentOrigin,
    documents: RwLock<BTreeMap<(String, String), String>>,
}

impl InMemoryProfileSource {
    /// Create an empty source that reports documents as external.
    pub fn new() -> Self {
        Self::with_origin(DocumentOrigin::External)
    }

    /// Create an empty source that reports documents with `origin`.
    pub fn with_origin(origin: DocumentOrigin) -> Self {
        Self {
            origin,
            documents: RwLock::new(BTreeMap::new()),
        }
    }

    /// Add or replace a document.
    pub fn insert(&self, profile: impl Into<String>, file_name: impl Into<String>, contents: impl Into<String>) {
        self.documents
            .write()
            .expect("lock poisoned")
            .insert((profile.into(), file_name.into()), contents.into());
    }

    /// Remove a document. Returns `true` if it existed.
    pub fn remove(&self, profile: &str, file_name: &str) -> bool {
        self.documents
            .write()
            .expect("lock poisoned")
            .remove(&(profile.to_string(), file_name.to_string()))
            .is_some()
    }

    /// Number of documents held.
    pub fn len(&self) -> usize {
        self.documents.read().expect("lock poisoned").len()
    }

    /// Returns `true` if no documents are held.
    pub fn is_empty(&self) -> bool {
        self.documents.read().expect("lock poisoned").is_empty()
    }
}

impl Default for InMemoryProfileSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileSource for InMemoryProfileSource {
    fn origin(&self) -> DocumentOrigin {
        self.origin
    }

    fn read_document(&self, profile: &str, file_name: &str) -> ProfileResult<Option<ProfileDocument>> {
        let map = self.documents.read().expect("lock poisoned");
        let key = (profile.to_string(), file_name.to_string());
        Ok(map.get(&key).map(|contents| ProfileDocument {
            profile: profile.to_string(),
            file_name: file_name.to_string(),
            origin: self.origin,
            path: PathBuf::from("memory").join(profile).join(file_name),
            contents: contents.clone(),
        }))
    }

    fn list_profiles(&self) -> ProfileResult<Vec<String>> {
        let map = self.documents.read().expect("lock poisoned");
        let mut profiles: Vec<String> = map.keys().map(|(profile, _)| profile.clone()).collect();
        profiles.dedup();
        Ok(profiles)
    }

    fn list_files(&self, profile: &str) -> ProfileResult<Vec<String>> {
        let map = self.documents.read().expect("lock poisoned");
        Ok(map
            .keys()
            .filter(|(p, _)| p == profile)
            .map(|(_, file)| file.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_read_remove() {
        let source = InMemoryProfileSource::new();
        assert!(source.is_empty());

        source.insert("p", "items.yml", "[]");
        let doc = source.read_document("p", "items.yml").unwrap().unwrap();
        assert_eq!(doc.contents, "[]");
        assert_eq!(doc.origin, DocumentOrigin::External);

        assert!(source.remove("p", "items.yml"));
        assert!(!source.remove("p", "items.yml"));
        assert!(source.read_document("p", "items.yml").unwrap().is_none());
    }

    #[test]
    fn listings_follow_key_order() {
        let source = InMemoryProfileSource::with_origin(DocumentOrigin::Bundled);
        source.insert("b", "x.yml", "");
        source.insert("a", "z.yml", "");
        source.insert("a", "y.yml", "");

        assert_eq!(source.list_profiles().unwrap(), vec!["a", "b"]);
        assert_eq!(source.list_files("a").unwrap(), vec!["y.yml", "z.yml"]);
        assert_eq!(source.len(), 3);
        assert_eq!(source.origin(), DocumentOrigin::Bundled);
    }
}
