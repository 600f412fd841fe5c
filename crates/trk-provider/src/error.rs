use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading configuration.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The kind is registered but cannot be built.
    #[error("no default factory registered for config kind {kind:?}")]
    MissingFactory { kind: String },

    /// No kind with this name is registered.
    #[error("unknown config kind {kind:?}")]
    UnknownKind { kind: String },

    /// An overlay document is not valid for its kind.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("merge error: {0}")]
    Merge(#[from] trk_merge::MergeError),

    #[error("profile error: {0}")]
    Profile(#[from] trk_profiles::ProfileError),

    /// The baked default of a kind could not be produced or restored.
    #[error("baked default error: {0}")]
    Baked(#[source] serde_json::Error),

    /// The provider settings file is unreadable or invalid.
    #[error("invalid settings in {}: {reason}", path.display())]
    Settings { path: PathBuf, reason: String },
}

impl ProviderError {
    /// `true` if the error is caused by profile content, settings, or user
    /// input rather than by a defect in the program.
    pub fn is_content_error(&self) -> bool {
        matches!(
            self,
            Self::Parse { .. } | Self::Profile(_) | Self::Settings { .. } | Self::UnknownKind { .. }
        )
    }
}

/// Result alias for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_errors() {
        let parse = serde_yaml::from_str::<u32>("nope").unwrap_err();
        assert!(ProviderError::Parse {
            path: "a.yml".into(),
            source: parse
        }
        .is_content_error());
        assert!(ProviderError::UnknownKind { kind: "x".into() }.is_content_error());
        assert!(!ProviderError::MissingFactory { kind: "x".into() }.is_content_error());
        assert!(!ProviderError::Merge(trk_merge::MergeError::ShapeMismatch {
            expected: "A",
            found: "B"
        })
        .is_content_error());
    }

    #[test]
    fn parse_error_names_path() {
        let source = serde_yaml::from_str::<u32>("nope").unwrap_err();
        let err = ProviderError::Parse {
            path: "profiles/Halloween/items.yml".into(),
            source,
        };
        assert!(err.to_string().starts_with("failed to parse profiles/Halloween/items.yml"));
    }
}
