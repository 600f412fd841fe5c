use std::any::TypeId;
use std::collections::HashMap;
use std::sync::RwLock;

use tracing::{debug, error, info};
use trk_config::{
    BossConfig, ConfigKind, DungeonConfig, ItemConfig, KindRegistry, LocationConfig, RegionConfig,
    RequestConfig, ResponseConfig, RewardConfig, RoomConfig, UiConfig,
};
use trk_merge::{merge_erased, ErasedConfig};
use trk_profiles::{BundledSource, DirectorySource, ProfileDocument, ProfileLoader};

use crate::error::{ProviderError, ProviderResult};
use crate::provenance::{AppliedOverlay, LoadedConfig};
use crate::settings::ProviderSettings;

/// Loads configuration kinds for an ordered list of profiles.
///
/// Each request builds a fresh baseline, so a provider can be shared across
/// threads. Requests without profiles are answered from a serialized copy of
/// the baseline, built once per kind.
pub struct ConfigProvider {
    settings: ProviderSettings,
    loader: ProfileLoader,
    baked: RwLock<HashMap<TypeId, String>>,
}

impl ConfigProvider {
    /// Create a provider whose sources follow `settings`: the external
    /// directory first (if any), then the bundled profiles (if enabled).
    pub fn new(settings: ProviderSettings) -> Self {
        let mut loader = ProfileLoader::new();
        if let Some(dir) = &settings.user_config_dir {
            debug!(dir = %dir.display(), "using external profile directory");
            loader.push_source(Box::new(DirectorySource::new(dir)));
        }
        if settings.use_bundled {
            loader.push_source(Box::new(BundledSource::builtin()));
        }
        Self::with_loader(loader, settings)
    }

    /// Create a provider over an explicit loader. Only the fast-path setting
    /// is taken from `settings`.
    pub fn with_loader(loader: ProfileLoader, settings: ProviderSettings) -> Self {
        Self {
            settings,
            loader,
            baked: RwLock::new(HashMap::new()),
        }
    }

    pub fn settings(&self) -> &ProviderSettings {
        &self.settings
    }

    pub fn loader(&self) -> &ProfileLoader {
        &self.loader
    }

    // ---- Typed loading ----

    /// Load kind `K` with `profiles` merged in order.
    ///
    /// Empty profile names are ignored; profiles without a document for `K`
    /// contribute nothing.
    pub fn get_config<K: ConfigKind, S: AsRef<str>>(&self, profiles: &[S]) -> ProviderResult<K> {
        self.get_config_with_mood(profiles, None)
    }

    /// Load kind `K`, merging each profile's `mood` document right after its
    /// base document.
    pub fn get_config_with_mood<K: ConfigKind, S: AsRef<str>>(
        &self,
        profiles: &[S],
        mood: Option<&str>,
    ) -> ProviderResult<K> {
        if self.settings.bake_defaults && !has_profiles(profiles) {
            return self.baked_default::<K>();
        }
        Ok(self.load_with_sources::<K, S>(profiles, mood)?.config)
    }

    /// Load kind `K` and report which overlay documents were applied.
    ///
    /// Always takes the full merge path.
    pub fn load_with_sources<K: ConfigKind, S: AsRef<str>>(
        &self,
        profiles: &[S],
        mood: Option<&str>,
    ) -> ProviderResult<LoadedConfig<K>> {
        let documents = self.loader.overlays(K::FILE_NAME, profiles, mood)?;

        let mut config = K::baseline();
        let mut overlays = Vec::with_capacity(documents.len());
        for document in &documents {
            let Some(mut overlay) = parse_document(document, |text| serde_yaml::from_str::<Option<K>>(text))? else {
                continue;
            };
            overlay.on_post_load();
            config.merge_from(overlay);
            debug!(kind = K::NAME, profile = %document.profile, file = %document.file_name, "merged overlay");
            overlays.push(AppliedOverlay::from(document));
        }

        Ok(LoadedConfig { config, overlays })
    }

    /// Serve the serialized baseline of `K`, baking it on first use.
    fn baked_default<K: ConfigKind>(&self) -> ProviderResult<K> {
        let key = TypeId::of::<K>();
        if let Some(json) = self.baked.read().expect("lock poisoned").get(&key) {
            return serde_json::from_str(json).map_err(ProviderError::Baked);
        }

        let json = serde_json::to_string(&K::baseline()).map_err(ProviderError::Baked)?;
        let config = serde_json::from_str(&json).map_err(ProviderError::Baked)?;
        debug!(kind = K::NAME, bytes = json.len(), "baked default config");
        self.baked.write().expect("lock poisoned").insert(key, json);
        Ok(config)
    }

    // ---- Name-based loading ----

    /// Load the kind registered as `name`, type-erased.
    ///
    /// Fails with [`ProviderError::UnknownKind`] if no such kind exists and
    /// with [`ProviderError::MissingFactory`] if it cannot be built, before
    /// any profile is read.
    pub fn load_by_name<S: AsRef<str>>(
        &self,
        registry: &KindRegistry,
        name: &str,
        profiles: &[S],
        mood: Option<&str>,
    ) -> ProviderResult<Box<dyn ErasedConfig>> {
        let entry = registry.get(name).ok_or_else(|| ProviderError::UnknownKind {
            kind: name.to_string(),
        })?;
        let missing = || ProviderError::MissingFactory {
            kind: entry.name.to_string(),
        };
        let factory = entry.factory().ok_or_else(missing)?;
        let parse = entry.parser().ok_or_else(missing)?;

        let mut config = factory();
        for document in self.loader.overlays(entry.file_name, profiles, mood)? {
            let Some(overlay) = parse_document(&document, parse)? else {
                continue;
            };
            merge_erased(config.as_mut(), overlay)?;
            debug!(kind = entry.name, profile = %document.profile, file = %document.file_name, "merged overlay");
        }
        Ok(config)
    }

    // ---- Discovery ----

    /// Profiles that can be selected, external ones first.
    pub fn available_profiles(&self) -> ProviderResult<Vec<String>> {
        Ok(self.loader.available_profiles()?)
    }

    /// Moods offered by the selected profiles.
    pub fn available_moods<S: AsRef<str>>(&self, profiles: &[S]) -> ProviderResult<Vec<String>> {
        Ok(self.loader.available_moods(profiles)?)
    }

    // ---- Kind accessors ----

    pub fn items<S: AsRef<str>>(&self, profiles: &[S]) -> ProviderResult<ItemConfig> {
        self.get_config(profiles)
    }

    pub fn locations<S: AsRef<str>>(&self, profiles: &[S]) -> ProviderResult<LocationConfig> {
        self.get_config(profiles)
    }

    pub fn dungeons<S: AsRef<str>>(&self, profiles: &[S]) -> ProviderResult<DungeonConfig> {
        self.get_config(profiles)
    }

    pub fn bosses<S: AsRef<str>>(&self, profiles: &[S]) -> ProviderResult<BossConfig> {
        self.get_config(profiles)
    }

    pub fn rooms<S: AsRef<str>>(&self, profiles: &[S]) -> ProviderResult<RoomConfig> {
        self.get_config(profiles)
    }

    pub fn regions<S: AsRef<str>>(&self, profiles: &[S]) -> ProviderResult<RegionConfig> {
        self.get_config(profiles)
    }

    pub fn rewards<S: AsRef<str>>(&self, profiles: &[S]) -> ProviderResult<RewardConfig> {
        self.get_config(profiles)
    }

    pub fn responses<S: AsRef<str>>(&self, profiles: &[S], mood: Option<&str>) -> ProviderResult<ResponseConfig> {
        self.get_config_with_mood(profiles, mood)
    }

    pub fn ui<S: AsRef<str>>(&self, profiles: &[S]) -> ProviderResult<UiConfig> {
        self.get_config(profiles)
    }

    pub fn requests<S: AsRef<str>>(&self, profiles: &[S]) -> ProviderResult<RequestConfig> {
        self.get_config(profiles)
    }
}

impl Default for ConfigProvider {
    fn default() -> Self {
        Self::new(ProviderSettings::default())
    }
}

fn has_profiles<S: AsRef<str>>(profiles: &[S]) -> bool {
    profiles.iter().any(|profile| !profile.as_ref().is_empty())
}

/// Parse one overlay document, logging the outcome.
///
/// A document with no content, or one holding only a null, is skipped. A
/// parse failure is logged with the document's path and returned.
fn parse_document<T>(
    document: &ProfileDocument,
    parse: impl FnOnce(&str) -> Result<Option<T>, serde_yaml::Error>,
) -> ProviderResult<Option<T>> {
    if document.contents.trim().is_empty() {
        debug!(path = %document.path.display(), "skipping empty config file");
        return Ok(None);
    }

    match parse(&document.contents) {
        Ok(None) => {
            debug!(path = %document.path.display(), "skipping null config file");
            Ok(None)
        }
        Ok(Some(parsed)) => {
            info!(path = %document.path.display(), origin = %document.origin, "loaded config file");
            Ok(Some(parsed))
        }
        Err(source) => {
            error!(path = %document.path.display(), error = %source, "failed to parse config file");
            Err(ProviderError::Parse {
                path: document.path.clone(),
                source,
            })
        }
    }
}
