use serde::{Deserialize, Serialize};
use trk_merge::{Mergeable, Record, RecordList};

use super::string_key;
use crate::kind::ConfigKind;

/// What a tracker grid cell displays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiGridLocationType {
    #[default]
    Item,
    ItemStack,
    Dungeon,
    Peg,
}

/// One cell of a tracker layout.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiGridLocation {
    #[serde(rename = "type")]
    pub kind: UiGridLocationType,
    pub row: u32,
    pub column: u32,
    /// Items or dungeons shown in the cell, in stacking order.
    pub identifiers: Vec<String>,
    pub image: Option<String>,
}

impl UiGridLocation {
    pub fn new(kind: UiGridLocationType, row: u32, column: u32, identifiers: &[&str]) -> Self {
        Self {
            kind,
            row,
            column,
            identifiers: identifiers.iter().map(|id| id.to_string()).collect(),
            image: None,
        }
    }
}

/// A named tracker layout.
///
/// A layout is defined in one piece. Overlays can add new layouts, but the
/// cells of an existing layout are never changed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiLayout {
    pub name: String,
    pub grid_locations: Vec<UiGridLocation>,
}

impl Mergeable for UiLayout {
    fn merge_from(&mut self, _overlay: Self) {}
}

impl Record for UiLayout {
    type Key = String;
    const MERGE_KEY: Option<&'static str> = Some("name");

    fn merge_key(&self) -> Option<String> {
        string_key(&self.name)
    }
}

pub type UiConfig = RecordList<UiLayout>;

impl ConfigKind for UiConfig {
    const NAME: &'static str = "ui";
    const FILE_NAME: &'static str = "ui.yml";

    fn baseline() -> Self {
        use UiGridLocationType::*;

        vec![
            UiLayout {
                name: "Minimal".into(),
                grid_locations: vec![
                    UiGridLocation::new(ItemStack, 1, 1, &["Bow", "Silver Arrows"]),
                    UiGridLocation::new(Item, 1, 2, &["Hookshot"]),
                    UiGridLocation::new(Item, 1, 3, &["Charge Beam"]),
                    UiGridLocation::new(Item, 1, 4, &["Morph Ball"]),
                    UiGridLocation::new(Dungeon, 2, 1, &["Eastern Palace"]),
                    UiGridLocation::new(Dungeon, 2, 2, &["Desert Palace"]),
                ],
            },
            UiLayout {
                name: "Pegs".into(),
                grid_locations: (1..=4)
                    .map(|column| UiGridLocation::new(Peg, 1, column, &[]))
                    .collect(),
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
    fn merge_key_is_name_field() {
        assert_merge_key_field(&UiConfig::baseline()[0]);
    }

    #[test]
    fn baseline_keys_are_unique() {
        assert_unique_keys(&UiConfig::baseline());
    }

    #[test]
    fn existing_layout_is_not_changed() {
        let mut config = UiConfig::baseline();
        let overlay: UiConfig = serde_yaml::from_str(
            "- name: Minimal\n  grid_locations:\n    - type: peg\n      row: 9\n      column: 9\n- name: Custom\n",
        )
        .unwrap();

        config.merge_from(overlay);

        assert_eq!(config.len(), 3);
        assert_eq!(config[0], UiConfig::baseline()[0]);
        assert_eq!(config[2].name, "Custom");
    }

    #[test]
    fn grid_type_uses_snake_case() {
        let cell = UiGridLocation::new(UiGridLocationType::ItemStack, 1, 1, &["Bow"]);
        let value = serde_json::to_value(&cell).unwrap();
        assert_eq!(value["type"], "item_stack");
    }
}
