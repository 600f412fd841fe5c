use std::path::PathBuf;

use crate::document::{DocumentOrigin, ProfileDocument};
use crate::error::ProfileResult;
use crate::traits::ProfileSource;

/// One document compiled into the binary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BundledDocument {
    pub profile: &'static str,
    pub file_name: &'static str,
    pub contents: &'static str,
}

macro_rules! bundled {
    ($profile:literal, $file:literal) => {
        BundledDocument {
            profile: $profile,
            file_name: $file,
            contents: include_str!(concat!("../profiles/", $profile, "/", $file)),
        }
    };
}

/// Profiles shipped with the tracker.
static BUILTIN: &[BundledDocument] = &[
    bundled!("Halloween", "items.yml"),
    bundled!("Halloween", "responses.yml"),
    bundled!("Halloween", "responses.spooky.yml"),
    bundled!("Sassy", "responses.yml"),
    bundled!("Sassy", "requests.yml"),
    bundled!("Templates", "items.yml"),
];

/// Read-only profile documents compiled into the binary.
#[derive(Clone, Copy, Debug)]
pub struct BundledSource {
    documents: &'static [BundledDocument],
}

impl BundledSource {
    /// The profiles shipped with the tracker.
    pub fn builtin() -> Self {
        Self::from_static(BUILTIN)
    }

    /// A source over an arbitrary static table.
    pub fn from_static(documents: &'static [BundledDocument]) -> Self {
        Self { documents }
    }

    pub fn documents(&self) -> &'static [BundledDocument] {
        self.documents
    }
}

impl Default for BundledSource {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ProfileSource for BundledSource {
    fn origin(&self) -> DocumentOrigin {
        DocumentOrigin::Bundled
    }

    fn read_document(&self, profile: &str, file_name: &str) -> ProfileResult<Option<ProfileDocument>> {
        let found = self
            .documents
            .iter()
            .find(|doc| doc.profile == profile && doc.file_name == file_name);

        Ok(found.map(|doc| ProfileDocument {
            profile: doc.profile.to_string(),
            file_name: doc.file_name.to_string(),
            origin: DocumentOrigin::Bundled,
            path: PathBuf::from("bundled").join(doc.profile).join(doc.file_name),
            contents: doc.contents.to_string(),
        }))
    }

    fn list_profiles(&self) -> ProfileResult<Vec<String>> {
        let mut profiles: Vec<String> = self.documents.iter().map(|doc| doc.profile.to_string()).collect();
        profiles.sort();
        profiles.dedup();
        Ok(profiles)
    }

    fn list_files(&self, profile: &str) -> ProfileResult<Vec<String>> {
        let mut files: Vec<String> = self
            .documents
            .iter()
            .filter(|doc| doc.profile == profile)
            .map(|doc| doc.file_name.to_string())
            .collect();
        files.sort();
        files.dedup();
        Ok(files)
    }
}
