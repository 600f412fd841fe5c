//! Layered profile lookup.
//!
//! The loader holds an ordered list of sources (normally the external
//! directory first, then the bundled profiles) and answers three questions:
//! where is `<profile>/<file>`, which documents make up the overlay stack for
//! a kind, and which profiles and moods exist at all.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::document::{DocumentOrigin, ProfileDocument};
use crate::error::ProfileResult;
use crate::names::{validate_mood_name, validate_profile_name};
use crate::traits::ProfileSource;

/// Profile holding starter files for users; never offered as a real profile.
pub const TEMPLATES_PROFILE: &str = "Templates";

/// Extensions recognized when discovering moods.
const DOCUMENT_EXTENSIONS: &[&str] = &["yml", "yaml"];

/// File name of the `mood` variant of `file_name`.
///
/// `responses.yml` with mood `spooky` becomes `responses.spooky.yml`.
///
/// # Examples
///
/// ```
/// use trk_profiles::mood_file_name;
///
/// assert_eq!(mood_file_name("responses.yml", "spooky"), "responses.spooky.yml");
/// assert_eq!(mood_file_name("README", "spooky"), "README.spooky");
/// ```
pub fn mood_file_name(file_name: &str, mood: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) => format!("{stem}.{mood}.{ext}"),
        None => format!("{file_name}.{mood}"),
    }
}

/// Extract the mood from a file name of the form `<stem>.<mood>.<ext>`.
fn mood_of(file_name: &str) -> Option<&str> {
    let (rest, ext) = file_name.rsplit_once('.')?;
    if !DOCUMENT_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)) {
        return None;
    }
    let (stem, mood) = rest.rsplit_once('.')?;
    (!stem.is_empty() && validate_mood_name(mood).is_ok()).then_some(mood)
}

/// Ordered set of profile sources; earlier sources shadow later ones.
#[derive(Default)]
pub struct ProfileLoader {
    sources: Vec<Box<dyn ProfileSource>>,
}

impl ProfileLoader {
    /// Create a loader with no sources. Every lookup misses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source with lower priority than those already added.
    pub fn with_source(mut self, source: impl ProfileSource + 'static) -> Self {
        self.push_source(Box::new(source));
        self
    }

    pub fn push_source(&mut self, source: Box<dyn ProfileSource>) {
        self.sources.push(source);
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Find `<profile>/<file_name>` in the first source that has it.
    ///
    /// The profile name is validated before any source is consulted.
    /// Serving a bundled document while an external source exists is logged
    /// at `warn`, since an edited copy was expected there.
    pub fn locate(&self, profile: &str, file_name: &str) -> ProfileResult<Option<ProfileDocument>> {
        validate_profile_name(profile)?;

        let mut searched_external = false;
        for source in &self.sources {
            if let Some(document) = source.read_document(profile, file_name)? {
                if document.origin == DocumentOrigin::Bundled && searched_external {
                    warn!(
                        profile,
                        file = file_name,
                        "profile document not found in user config directory, using bundled copy"
                    );
                }
                return Ok(Some(document));
            }
            searched_external |= source.origin() == DocumentOrigin::External;
        }
        Ok(None)
    }

    /// Collect the overlay documents for one kind, in merge order.
    ///
    /// Empty profile names are ignored and missing documents are skipped.
    /// When `mood` is given, each profile's mood document directly follows
    /// its base document.
    pub fn overlays<S: AsRef<str>>(
        &self,
        file_name: &str,
        profiles: &[S],
        mood: Option<&str>,
    ) -> ProfileResult<Vec<ProfileDocument>> {
        let mood_file = match mood {
            Some(mood) => {
                validate_mood_name(mood)?;
                Some(mood_file_name(file_name, mood))
            }
            None => None,
        };

        let mut documents = Vec::new();
        for profile in profiles.iter().map(AsRef::as_ref) {
            if profile.is_empty() {
                continue;
            }

            let candidates = std::iter::once(file_name).chain(mood_file.as_deref());
            for candidate in candidates {
                match self.locate(profile, candidate)? {
                    Some(document) => documents.push(document),
                    None => debug!(profile, file = candidate, "no overlay document"),
                }
            }
        }
        Ok(documents)
    }

    /// All selectable profiles: sources in priority order, first occurrence
    /// wins, the templates profile excluded.
    pub fn available_profiles(&self) -> ProfileResult<Vec<String>> {
        let mut seen = HashSet::new();
        let mut profiles = Vec::new();
        for source in &self.sources {
            for profile in source.list_profiles()? {
                if profile != TEMPLATES_PROFILE && seen.insert(profile.clone()) {
                    profiles.push(profile);
                }
            }
        }
        Ok(profiles)
    }

    /// Moods offered by the given profiles, de-duplicated case-insensitively
    /// and sorted.
    pub fn available_moods<S: AsRef<str>>(&self, profiles: &[S]) -> ProfileResult<Vec<String>> {
        let mut seen = HashSet::new();
        let mut moods = Vec::new();
        for profile in profiles.iter().map(AsRef::as_ref) {
            if profile.is_empty() {
                continue;
            }
            validate_profile_name(profile)?;
            for source in &self.sources {
                for file in source.list_files(profile)? {
                    if let Some(mood) = mood_of(&file) {
                        if seen.insert(mood.to_lowercase()) {
                            moods.push(mood.to_string());
                        }
                    }
                }
            }
        }
        moods.sort_by_key(|mood| mood.to_lowercase());
        Ok(moods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundled::{BundledDocument, BundledSource};
    use crate::error::ProfileError;
    use crate::memory::InMemoryProfileSource;

    static BUNDLED: &[BundledDocument] = &[
        BundledDocument {
            profile: "Shared",
            file_name: "items.yml",
            contents: "bundled items",
        },
        BundledDocument {
            profile: "Shared",
            file_name: "items.Spooky.yml",
            contents: "bundled spooky items",
        },
        BundledDocument {
            profile: "Templates",
            file_name: "items.yml",
            contents: "[]",
        },
    ];

    fn loader() -> ProfileLoader {
        let external = InMemoryProfileSource::new();
        external.insert("Shared", "responses.yml", "external responses");
        external.insert("Mine", "items.yml", "mine items");
        external.insert("Mine", "items.spooky.yml", "mine spooky items");
        external.insert("Mine", "items.silly.yml", "mine silly items");
        external.insert("Mine", "notes.txt", "");

        ProfileLoader::new()
            .with_source(external)
            .with_source(BundledSource::from_static(BUNDLED))
    }

    fn contents(docs: &[ProfileDocument]) -> Vec<&str> {
        docs.iter().map(|doc| doc.contents.as_str()).collect()
    }

    #[test]
    fn mood_file_names() {
        assert_eq!(mood_file_name("items.yml", "silly"), "items.silly.yml");
        assert_eq!(mood_of("items.silly.yml"), Some("silly"));
        assert_eq!(mood_of("items.yml"), None);
        assert_eq!(mood_of("notes.silly.txt"), None);
        assert_eq!(mood_of(".silly.yml"), None);
    }

    #[test]
    fn locate_prefers_earlier_sources() {
        let external = InMemoryProfileSource::new();
        external.insert("Shared", "items.yml", "edited");
        let loader = ProfileLoader::new()
            .with_source(external)
            .with_source(BundledSource::from_static(BUNDLED));

        let doc = loader.locate("Shared", "items.yml").unwrap().unwrap();
        assert_eq!(doc.contents, "edited");
        assert_eq!(doc.origin, DocumentOrigin::External);
    }

    #[test]
    fn locate_falls_back_to_bundled() {
        let doc = loader().locate("Shared", "items.yml").unwrap().unwrap();
        assert_eq!(doc.origin, DocumentOrigin::Bundled);
        assert_eq!(doc.contents, "bundled items");
    }

    #[test]
    fn locate_missing_is_none() {
        assert!(loader().locate("Nobody", "items.yml").unwrap().is_none());
    }

    #[test]
    fn locate_rejects_bad_profile_name() {
        let err = loader().locate("../Shared", "items.yml").unwrap_err();
        assert!(matches!(err, ProfileError::InvalidProfileName { .. }));
    }

    #[test]
    fn overlays_follow_profile_order() {
        let docs = loader()
            .overlays("items.yml", &["Mine", "", "Nobody", "Shared"], None)
            .unwrap();
        assert_eq!(contents(&docs), vec!["mine items", "bundled items"]);
    }

    #[test]
    fn overlays_put_mood_after_base() {
        let docs = loader()
            .overlays("items.yml", &["Mine", "Shared"], Some("spooky"))
            .unwrap();
        assert_eq!(contents(&docs), vec!["mine items", "mine spooky items", "bundled items"]);
    }

    #[test]
    fn overlays_reject_bad_mood() {
        let err = loader().overlays("items.yml", &["Mine"], Some("a/b")).unwrap_err();
        assert!(matches!(err, ProfileError::InvalidMoodName { .. }));
    }

    #[test]
    fn no_profiles_no_overlays() {
        let none: &[&str] = &[];
        assert!(loader().overlays("items.yml", none, None).unwrap().is_empty());
    }

    #[test]
    fn available_profiles_excludes_templates() {
        assert_eq!(loader().available_profiles().unwrap(), vec!["Mine", "Shared"]);
    }

    #[test]
    fn available_moods_are_unique_and_sorted() {
        let moods = loader().available_moods(&["Mine", "Shared"]).unwrap();
        assert_eq!(moods, vec!["silly", "spooky"]);

        let moods = loader().available_moods(&["Shared"]).unwrap();
        assert_eq!(moods, vec!["Spooky"]);
    }
}
