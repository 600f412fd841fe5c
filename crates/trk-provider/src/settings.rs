//! Provider settings.
//!
//! Settings are layered, later layers overriding earlier ones:
//!
//! 1. Built-in defaults ([`ProviderSettings::default`])
//! 2. An optional TOML file, conventionally `trk.toml`
//! 3. The `TRK_CONFIG_DIR` environment variable
//! 4. Command-line flags, applied by the caller

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ProviderError, ProviderResult};

/// Conventional name of the settings file.
pub const SETTINGS_FILE_NAME: &str = "trk.toml";

/// Environment variable that overrides the external profile directory.
pub const CONFIG_DIR_ENV: &str = "TRK_CONFIG_DIR";

/// How a [`ConfigProvider`](crate::ConfigProvider) finds profiles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProviderSettings {
    /// Directory holding user-editable profiles as `<dir>/<profile>/<file>`.
    pub user_config_dir: Option<PathBuf>,
    /// Fall back to the profiles compiled into the binary.
    pub use_bundled: bool,
    /// Serve requests without profiles from a cached serialized baseline.
    pub bake_defaults: bool,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            user_config_dir: None,
            use_bundled: true,
            bake_defaults: true,
        }
    }
}

impl ProviderSettings {
    /// Parse settings from TOML text. `path` is only used in errors.
    pub fn from_toml_str(text: &str, path: &Path) -> ProviderResult<Self> {
        toml::from_str(text).map_err(|err| ProviderError::Settings {
            path: path.to_path_buf(),
            reason: err.message().to_string(),
        })
    }

    /// Read settings from a TOML file.
    pub fn load_file(path: &Path) -> ProviderResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|err| ProviderError::Settings {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
        let settings = Self::from_toml_str(&text, path)?;
        debug!(path = %path.display(), "loaded provider settings");
        Ok(settings)
    }

    /// Read settings from `path` if it exists, otherwise use the defaults.
    pub fn load_optional(path: &Path) -> ProviderResult<Self> {
        if path.exists() {
            Self::load_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply overrides from the process environment.
    pub fn with_env(self) -> Self {
        self.with_env_from(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn with_env_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(dir) = lookup(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            debug!(dir = %dir, "user config directory set from environment");
            self.user_config_dir = Some(PathBuf::from(dir));
        }
        self
    }

    pub fn with_user_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.user_config_dir = Some(dir.into());
        self
    }

    pub fn with_bundled(mut self, use_bundled: bool) -> Self {
        self.use_bundled = use_bundled;
        self
    }

    pub fn with_baked_defaults(mut self, bake_defaults: bool) -> Self {
        self.bake_defaults = bake_defaults;
        self
    }
}
