//! Lookup of configuration kinds by name.
//!
//! Typed callers use [`ConfigKind`] directly. The registry serves callers
//! that only have a kind's name, such as the command line, and hands out
//! type-erased factories and parsers.

use std::fmt;

use tracing::debug;
use trk_merge::ErasedConfig;

use crate::kind::ConfigKind;
use crate::kinds::{
    BossConfig, DungeonConfig, ItemConfig, LocationConfig, RegionConfig, RequestConfig,
    ResponseConfig, RewardConfig, RoomConfig, UiConfig,
};

/// Builds a kind's baseline.
pub type Factory = fn() -> Box<dyn ErasedConfig>;

/// Parses one overlay document of a kind and runs its post-load hook.
///
/// A document holding only a null parses to `None`.
pub type Parser = fn(&str) -> Result<Option<Box<dyn ErasedConfig>>, serde_yaml::Error>;

fn erased_baseline<K: ConfigKind>() -> Box<dyn ErasedConfig> {
    Box::new(K::baseline())
}

fn erased_parse<K: ConfigKind>(
    contents: &str,
) -> Result<Option<Box<dyn ErasedConfig>>, serde_yaml::Error> {
    let Some(mut overlay) = serde_yaml::from_str::<Option<K>>(contents)? else {
        return Ok(None);
    };
    overlay.on_post_load();
    Ok(Some(Box::new(overlay)))
}

/// A registered kind.
#[derive(Clone, Copy)]
pub struct KindEntry {
    pub name: &'static str,
    pub file_name: &'static str,
    factory: Option<Factory>,
    parser: Option<Parser>,
}

impl KindEntry {
    /// Entry for a statically known kind.
    pub fn of<K: ConfigKind>() -> Self {
        Self {
            name: K::NAME,
            file_name: K::FILE_NAME,
            factory: Some(erased_baseline::<K>),
            parser: Some(erased_parse::<K>),
        }
    }

    /// Entry known only by name and file, with no way to build it.
    pub fn declared(name: &'static str, file_name: &'static str) -> Self {
        Self {
            name,
            file_name,
            factory: None,
            parser: None,
        }
    }

    pub fn factory(&self) -> Option<Factory> {
        self.factory
    }

    pub fn parser(&self) -> Option<Parser> {
        self.parser
    }
}

impl fmt::Debug for KindEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KindEntry")
            .field("name", &self.name)
            .field("file_name", &self.file_name)
            .field("has_factory", &self.factory.is_some())
            .finish()
    }
}

/// Kinds addressable by name, in registration order.
#[derive(Clone, Debug, Default)]
pub struct KindRegistry {
    entries: Vec<KindEntry>,
}

impl KindRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in kind.
    pub fn with_builtin_kinds() -> Self {
        let mut registry = Self::new();
        registry
            .register::<ItemConfig>()
            .register::<LocationConfig>()
            .register::<DungeonConfig>()
            .register::<BossConfig>()
            .register::<RoomConfig>()
            .register::<RegionConfig>()
            .register::<RewardConfig>()
            .register::<ResponseConfig>()
            .register::<UiConfig>()
            .register::<RequestConfig>();
        registry
    }

    /// Register a statically known kind, replacing any entry with its name.
    pub fn register<K: ConfigKind>(&mut self) -> &mut Self {
        self.insert(KindEntry::of::<K>())
    }

    /// Register a kind that has no factory. Loading it fails on first use.
    pub fn declare(&mut self, name: &'static str, file_name: &'static str) -> &mut Self {
        self.insert(KindEntry::declared(name, file_name))
    }

    fn insert(&mut self, entry: KindEntry) -> &mut Self {
        debug!(kind = entry.name, file = entry.file_name, "registering config kind");
        match self.entries.iter_mut().find(|e| e.name == entry.name) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
        self
    }

    /// Look up a kind by name, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<&KindEntry> {
        self.entries.iter().find(|e| e.name.eq_ignore_ascii_case(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &KindEntry> {
        self.entries.iter()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.name).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_kinds_are_registered() {
        let registry = KindRegistry::with_builtin_kinds();
        assert_eq!(
            registry.names(),
            vec![
                "items",
                "locations",
                "dungeons",
                "bosses",
                "rooms",
                "regions",
                "rewards",
                "responses",
                "ui",
                "requests"
            ]
        );
        for entry in registry.iter() {
            assert!(entry.factory().is_some(), "{} has no factory", entry.name);
            assert!(entry.file_name.ends_with(".yml"));
        }
    }

    #[test]
    fn lookup_ignores_case() {
        let registry = KindRegistry::with_builtin_kinds();
        assert_eq!(registry.get("Items").unwrap().file_name, "items.yml");
        assert!(registry.get("weapons").is_none());
    }

    #[test]
    fn factory_builds_baseline() {
        let registry = KindRegistry::with_builtin_kinds();
        let factory = registry.get("responses").unwrap().factory().unwrap();
        let built = factory();
        assert_eq!(built.downcast_ref::<ResponseConfig>(), Some(&ResponseConfig::baseline()));
    }

    #[test]
    fn parser_runs_post_load_hook() {
        let registry = KindRegistry::with_builtin_kinds();
        let parse = registry.get("requests").unwrap().parser().unwrap();
        let parsed = parse("- response: unreachable\n").unwrap().unwrap();
        assert!(parsed.downcast_ref::<RequestConfig>().unwrap().is_empty());
    }

    #[test]
    fn parser_yields_nothing_for_null_document() {
        let registry = KindRegistry::with_builtin_kinds();
        let parse = registry.get("items").unwrap().parser().unwrap();
        assert!(parse("~\n").unwrap().is_none());
    }

    #[test]
    fn declared_kind_has_no_factory() {
        let mut registry = KindRegistry::new();
        registry.declare("msu", "msu.yml");
        let entry = registry.get("msu").unwrap();
        assert!(entry.factory().is_none());
        assert!(entry.parser().is_none());
    }

    #[test]
    fn register_replaces_by_name() {
        let mut registry = KindRegistry::new();
        registry.declare("items", "items.yml").register::<ItemConfig>();
        assert_eq!(registry.len(), 1);
        assert!(registry.get("items").unwrap().factory().is_some());
    }

    #[test]
    fn every_baseline_survives_json_and_yaml() {
        // The provider serves baked JSON defaults and the CLI prints YAML;
        // both must reproduce the baseline exactly.
        fn check<K: ConfigKind + PartialEq>() {
            let baseline = K::baseline();
            let json = serde_json::to_string(&baseline).unwrap();
            assert_eq!(serde_json::from_str::<K>(&json).unwrap(), baseline, "{} via JSON", K::NAME);
            let yaml = serde_yaml::to_string(&baseline).unwrap();
            assert_eq!(serde_yaml::from_str::<K>(&yaml).unwrap(), baseline, "{} via YAML", K::NAME);
        }
        check::<ItemConfig>();
        check::<LocationConfig>();
        check::<DungeonConfig>();
        check::<BossConfig>();
        check::<RoomConfig>();
        check::<RegionConfig>();
        check::<RewardConfig>();
        check::<ResponseConfig>();
        check::<UiConfig>();
        check::<RequestConfig>();
    }
}
