use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use trk_merge::{merge_keyed_map, merge_nested, merge_nullable_map, Mergeable, Record, RecordList};
use trk_types::VariantText;

use super::{string_key, text};
use crate::kind::ConfigKind;

/// Everything the tracker says about one item.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemData {
    /// Stable identifier, matched across profiles.
    pub item: String,
    pub name: VariantText,
    pub article: Option<String>,
    pub plural: Option<VariantText>,
    /// Whether the item can be collected more than once.
    pub multiple: bool,
    /// Amount added per pickup, for counted items.
    pub counter_multiplier: Option<u32>,
    /// Names of each stage of a progressive item.
    pub stages: Option<BTreeMap<u32, VariantText>>,
    /// Responses keyed by the tracked amount. A null entry means "say nothing".
    pub when_tracked: Option<BTreeMap<u32, Option<VariantText>>>,
    pub image: Option<String>,
    pub hints: Option<VariantText>,
}

impl ItemData {
    pub fn new(item: impl Into<String>, name: VariantText) -> Self {
        Self {
            item: item.into(),
            name,
            ..Self::default()
        }
    }

    /// Name of `stage` of a progressive item.
    pub fn stage_name(&self, stage: u32) -> Option<&VariantText> {
        self.stages.as_ref()?.get(&stage)
    }

    pub fn is_progressive(&self) -> bool {
        self.stages.as_ref().is_some_and(|stages| !stages.is_empty())
    }
}

impl Mergeable for ItemData {
    fn merge_from(&mut self, overlay: Self) {
        self.name.merge_from(overlay.name);
        merge_nested(&mut self.plural, overlay.plural);
        merge_keyed_map(&mut self.stages, overlay.stages);
        merge_nullable_map(&mut self.when_tracked, overlay.when_tracked);
        merge_nested(&mut self.hints, overlay.hints);
    }
}

impl Record for ItemData {
    type Key = String;
    const MERGE_KEY: Option<&'static str> = Some("item");

    fn merge_key(&self) -> Option<String> {
        string_key(&self.item)
    }
}

pub type ItemConfig = RecordList<ItemData>;

impl ConfigKind for ItemConfig {
    const NAME: &'static str = "items";
    const FILE_NAME: &'static str = "items.yml";

    fn baseline() -> Self {
        vec![
            ItemData {
                stages: Some(BTreeMap::from([
                    (1, text(&["Fighter's Sword"])),
                    (2, text(&["Master Sword"])),
                    (3, text(&["Tempered Sword"])),
                    (4, text(&["Golden Sword"])),
                ])),
                ..ItemData::new("Sword", text(&["Sword"]))
            },
            ItemData {
                article: Some("a".into()),
                ..ItemData::new("Bow", text(&["Bow"]))
            },
            ItemData {
                plural: Some(text(&["Silver Arrows"])),
                ..ItemData::new("Silver Arrows", text(&["Silver Arrows", "Silvers"]))
            },
            ItemData {
                article: Some("the".into()),
                ..ItemData::new("Hookshot", text(&["Hookshot", "Grappling Hook"]))
            },
            ItemData {
                multiple: true,
                counter_multiplier: Some(5),
                plural: Some(text(&["Missiles"])),
                when_tracked: Some(BTreeMap::from([
                    (1, Some(text(&["Boom."]))),
                    (2, None),
                    (50, Some(text(&["That's a lot of missiles."]))),
                ])),
                ..ItemData::new("Missile", text(&["Missile", "Missile Pack"]))
            },
            ItemData {
                hints: Some(text(&["It lets you roll into tight spaces."])),
                ..ItemData::new("Morph Ball", text(&["Morph Ball", "Morphing Ball"]))
            },
            ItemData::new("Charge Beam", text(&["Charge Beam"])),
            ItemData {
                multiple: true,
                plural: Some(text(&["Pieces of Heart", "Heart Pieces"])),
                ..ItemData::new("Piece of Heart", text(&["Piece of Heart", "Heart Piece"]))
            },
        ]
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_merge_key_field, assert_unique_keys};

    #[test]
    fn merge_key_is_item_field() {
        assert_merge_key_field(&ItemData::new("Sword", text(&["Sword"])));
    }

    #[test]
    fn empty_item_has_no_key() {
        assert_eq!(ItemData::default().merge_key(), None);
    }

    #[test]
    fn baseline_keys_are_unique() {
        assert_unique_keys(&ItemConfig::baseline());
    }

    #[test]
    fn merge_extends_text_fields_and_keeps_scalars() {
        let mut sword = ItemConfig::baseline().find(&"Sword".to_string()).cloned().unwrap();
        let overlay = ItemData {
            article: Some("the".into()),
            multiple: true,
            stages: Some(BTreeMap::from([(2, text(&["Blade of Evil's Bane"])), (5, text(&["Butter Sword"]))])),
            ..ItemData::new("Sword", text(&["Cursed Blade"]))
        };

        sword.merge_from(overlay);

        assert_eq!(sword.name.texts(), vec!["Sword", "Cursed Blade"]);
        assert_eq!(sword.article, None);
        assert!(!sword.multiple);
        assert_eq!(
            sword.stage_name(2).unwrap().texts(),
            vec!["Master Sword", "Blade of Evil's Bane"]
        );
        assert_eq!(sword.stage_name(5).unwrap().texts(), vec!["Butter Sword"]);
    }

    #[test]
    fn null_when_tracked_entry_is_ignored() {
        let mut missile = ItemConfig::baseline().find(&"Missile".to_string()).cloned().unwrap();
        let overlay: ItemData = serde_yaml::from_str("item: Missile\nwhen_tracked:\n  1: null\n  2: Pew.\n").unwrap();

        missile.merge_from(overlay);

        let when_tracked = missile.when_tracked.unwrap();
        assert_eq!(when_tracked[&1].as_ref().unwrap().texts(), vec!["Boom."]);
        assert_eq!(when_tracked[&2].as_ref().unwrap().texts(), vec!["Pew."]);
    }

    #[test]
    fn parses_yaml_overlay() {
        let yaml = "- item: Lamp\n  name: [Lamp, Lantern]\n  multiple: true\n- item: Bow\n  name: Bone Bow\n";
        let overlay: ItemConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(overlay.len(), 2);
        assert_eq!(overlay[0].name.texts(), vec!["Lamp", "Lantern"]);
        assert!(overlay[0].multiple);
        assert_eq!(overlay[1].name.texts(), vec!["Bone Bow"]);
    }

    #[test]
    fn progressive_items() {
        let baseline = ItemConfig::baseline();
        assert!(baseline.find(&"Sword".to_string()).unwrap().is_progressive());
        assert!(!baseline.find(&"Bow".to_string()).unwrap().is_progressive());
    }
}
