use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::trace;
use walkdir::WalkDir;

use crate::document::{DocumentOrigin, ProfileDocument};
use crate::error::{ProfileError, ProfileResult};
use crate::names::validate_profile_name;
use crate::traits::ProfileSource;

/// Profiles stored on disk as `<root>/<profile>/<file>`.
///
/// A missing root directory is treated as an empty source.
#[derive(Clone, Debug)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Immediate children of `dir` matching `want_dir`, sorted by name.
    fn entries(&self, dir: &Path, want_dir: bool) -> ProfileResult<Vec<String>> {
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        let walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();
        for entry in walker {
            let entry = entry.map_err(|err| ProfileError::Io {
                path: err.path().unwrap_or(dir).to_path_buf(),
                source: err.into(),
            })?;
            if entry.file_type().is_dir() != want_dir {
                continue;
            }
            match entry.file_name().to_str() {
                Some(name) => names.push(name.to_string()),
                None => trace!(path = %entry.path().display(), "skipping non UTF-8 entry"),
            }
        }
        Ok(names)
    }
}

impl ProfileSource for DirectorySource {
    fn origin(&self) -> DocumentOrigin {
        DocumentOrigin::External
    }

    fn read_document(&self, profile: &str, file_name: &str) -> ProfileResult<Option<ProfileDocument>> {
        let path = self.root.join(profile).join(file_name);
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(ProfileDocument {
                profile: profile.to_string(),
                file_name: file_name.to_string(),
                origin: DocumentOrigin::External,
                path,
                contents,
            })),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ProfileError::Io { path, source }),
        }
    }

    fn list_profiles(&self) -> ProfileResult<Vec<String>> {
        let mut profiles = self.entries(&self.root, true)?;
        profiles.retain(|name| validate_profile_name(name).is_ok());
        Ok(profiles)
    }

    fn list_files(&self, profile: &str) -> ProfileResult<Vec<String>> {
        self.entries(&self.root.join(profile), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn setup() -> (tempfile::TempDir, DirectorySource) {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("Halloween")).unwrap();
        fs::create_dir_all(root.join("Plain")).unwrap();
        fs::create_dir_all(root.join(".git")).unwrap();
        fs::write(root.join("Halloween/items.yml"), "- item: sword\n").unwrap();
        fs::write(root.join("Halloween/responses.spooky.yml"), "{}\n").unwrap();
        fs::write(root.join("stray.yml"), "").unwrap();
        let source = DirectorySource::new(root);
        (dir, source)
    }

    #[test]
    fn reads_existing_document() {
        let (_dir, source) = setup();
        let doc = source.read_document("Halloween", "items.yml").unwrap().unwrap();
        assert_eq!(doc.origin, DocumentOrigin::External);
        assert_eq!(doc.profile, "Halloween");
        assert_eq!(doc.contents, "- item: sword\n");
        assert!(doc.path.ends_with("Halloween/items.yml"));
    }

    #[test]
    fn missing_file_is_none() {
        let (_dir, source) = setup();
        assert!(source.read_document("Halloween", "rooms.yml").unwrap().is_none());
        assert!(source.read_document("Nope", "items.yml").unwrap().is_none());
    }

    #[test]
    fn lists_profile_directories_only() {
        let (_dir, source) = setup();
        assert_eq!(source.list_profiles().unwrap(), vec!["Halloween", "Plain"]);
    }

    #[test]
    fn lists_files_in_profile() {
        let (_dir, source) = setup();
        assert_eq!(
            source.list_files("Halloween").unwrap(),
            vec!["items.yml", "responses.spooky.yml"]
        );
        assert!(source.list_files("Nope").unwrap().is_empty());
    }

    #[test]
    fn missing_root_is_empty() {
        let source = DirectorySource::new("/definitely/not/here/trk");
        assert!(source.list_profiles().unwrap().is_empty());
        assert!(source.read_document("a", "items.yml").unwrap().is_none());
    }

    #[test]
    fn unreadable_document_is_io_error() {
        let (dir, source) = setup();
        // A directory where a file is expected cannot be read as text.
        fs::create_dir_all(dir.path().join("Plain/items.yml")).unwrap();
        let err = source.read_document("Plain", "items.yml").unwrap_err();
        assert!(matches!(err, ProfileError::Io { .. }));
    }
}
