use std::path::PathBuf;

use serde::Serialize;
use trk_profiles::{DocumentOrigin, ProfileDocument};

/// One overlay document that was merged into a configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AppliedOverlay {
    pub profile: String,
    pub file_name: String,
    pub origin: DocumentOrigin,
    pub path: PathBuf,
}

impl From<&ProfileDocument> for AppliedOverlay {
    fn from(document: &ProfileDocument) -> Self {
        Self {
            profile: document.profile.clone(),
            file_name: document.file_name.clone(),
            origin: document.origin,
            path: document.path.clone(),
        }
    }
}

/// A merged configuration together with the overlays applied, in order.
#[derive(Clone, Debug)]
pub struct LoadedConfig<K> {
    pub config: K,
    pub overlays: Vec<AppliedOverlay>,
}

impl<K> LoadedConfig<K> {
    /// `true` if no overlay document was applied.
    pub fn is_baseline(&self) -> bool {
        self.overlays.is_empty()
    }

    pub fn into_inner(self) -> K {
        self.config
    }
}
