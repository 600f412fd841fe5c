use serde::{Deserialize, Serialize};
use trk_merge::{merge_nested, Mergeable, Record, RecordList};
use trk_types::VariantText;

use super::{string_key, text};
use crate::kind::ConfigKind;

/// A region of the game world.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionInfo {
    pub region: String,
    pub name: VariantText,
    pub map_name: Option<String>,
    pub hints: Option<VariantText>,
    pub when_cleared: Option<VariantText>,
}

impl Mergeable for RegionInfo {
    fn merge_from(&mut self, overlay: Self) {
        self.name.merge_from(overlay.name);
        merge_nested(&mut self.hints, overlay.hints);
        merge_nested(&mut self.when_cleared, overlay.when_cleared);
    }
}

impl Record for RegionInfo {
    type Key = String;
    const MERGE_KEY: Option<&'static str> = Some("region");

    fn merge_key(&self) -> Option<String> {
        string_key(&self.region)
    }
}

pub type RegionConfig = RecordList<RegionInfo>;

impl ConfigKind for RegionConfig {
    const NAME: &'static str = "regions";
    const FILE_NAME: &'static str = "regions.yml";

    fn baseline() -> Self {
        let region = |id: &str, names: &[&str], map: &str| RegionInfo {
            region: id.to_string(),
            name: text(names),
            map_name: Some(map.to_string()),
            ..RegionInfo::default()
        };
        vec![
            region("Light World North East", &["Light World North East"], "Light World"),
            region("Kakariko", &["Kakariko", "Kakariko Village"], "Light World"),
            RegionInfo {
                when_cleared: Some(text(&["Crateria is done. On to the good parts."])),
                ..region("Central Crateria", &["Central Crateria", "Crateria"], "Crateria")
            },
            region("Brinstar Kraid", &["Kraid's Lair"], "Brinstar"),
        ]
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_merge_key_field, assert_unique_keys};

    #[test]
    fn merge_key_is_region_field() {
        assert_merge_key_field(&RegionConfig::baseline()[1]);
    }

    #[test]
    fn baseline_keys_are_unique() {
        assert_unique_keys(&RegionConfig::baseline());
    }

    #[test]
    fn map_name_is_kept() {
        let mut config = RegionConfig::baseline();
        let overlay: RegionConfig = serde_yaml::from_str("- region: Kakariko\n  map_name: Dark World\n").unwrap();
        config.merge_from(overlay);
        let kakariko = config.find(&"Kakariko".to_string()).unwrap();
        assert_eq!(kakariko.map_name.as_deref(), Some("Light World"));
    }
}
