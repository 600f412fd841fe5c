use serde::{Deserialize, Serialize};
use trk_merge::{merge_nested, Mergeable, Record, RecordList};
use trk_types::VariantText;

use super::{string_key, text};
use crate::kind::ConfigKind;

/// A dungeon and its boss.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonInfo {
    pub dungeon: String,
    pub name: VariantText,
    pub abbreviation: String,
    pub boss: VariantText,
    /// Location that holds the dungeon's reward.
    pub location_id: Option<u32>,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub hints: Option<VariantText>,
}

impl DungeonInfo {
    pub fn new(dungeon: impl Into<String>, abbreviation: impl Into<String>, name: VariantText, boss: VariantText) -> Self {
        Self {
            dungeon: dungeon.into(),
            abbreviation: abbreviation.into(),
            name,
            boss,
            ..Self::default()
        }
    }
}

impl Mergeable for DungeonInfo {
    fn merge_from(&mut self, overlay: Self) {
        self.name.merge_from(overlay.name);
        self.boss.merge_from(overlay.boss);
        merge_nested(&mut self.hints, overlay.hints);
    }
}

impl Record for DungeonInfo {
    type Key = String;
    const MERGE_KEY: Option<&'static str> = Some("dungeon");

    fn merge_key(&self) -> Option<String> {
        string_key(&self.dungeon)
    }
}

pub type DungeonConfig = RecordList<DungeonInfo>;

impl ConfigKind for DungeonConfig {
    const NAME: &'static str = "dungeons";
    const FILE_NAME: &'static str = "dungeons.yml";

    fn baseline() -> Self {
        vec![
            DungeonInfo {
                location_id: Some(166),
                ..DungeonInfo::new(
                    "Eastern Palace",
                    "EP",
                    text(&["Eastern Palace", "Eastern"]),
                    text(&["Armos Knights"]),
                )
            },
            DungeonInfo {
                location_id: Some(171),
                ..DungeonInfo::new(
                    "Desert Palace",
                    "DP",
                    text(&["Desert Palace", "Desert"]),
                    text(&["Lanmolas"]),
                )
            },
            DungeonInfo {
                hints: Some(text(&["Bring a light source."])),
                ..DungeonInfo::new(
                    "Palace of Darkness",
                    "PD",
                    text(&["Palace of Darkness", "Dark Palace"]),
                    text(&["Helmasaur King"]),
                )
            },
            DungeonInfo::new("Ganon's Tower", "GT", text(&["Ganon's Tower"]), text(&["Agahnim"])),
        ]
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_merge_key_field, assert_unique_keys};

    #[test]
    fn merge_key_is_dungeon_field() {
        assert_merge_key_field(&DungeonConfig::baseline()[0]);
    }

    #[test]
    fn baseline_keys_are_unique() {
        assert_unique_keys(&DungeonConfig::baseline());
    }

    #[test]
    fn abbreviation_is_kept() {
        let mut config = DungeonConfig::baseline();
        let overlay: DungeonConfig =
            serde_yaml::from_str("- dungeon: Eastern Palace\n  abbreviation: XX\n  boss: [Armos]\n").unwrap();

        config.merge_from(overlay);

        let eastern = config.find(&"Eastern Palace".to_string()).unwrap();
        assert_eq!(eastern.abbreviation, "EP");
        assert_eq!(eastern.boss.texts(), vec!["Armos Knights", "Armos"]);
    }
}
