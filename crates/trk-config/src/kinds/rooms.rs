use serde::{Deserialize, Serialize};
use trk_merge::{merge_nested, Mergeable, Record, RecordList};
use trk_types::VariantText;

use super::{string_key, text};
use crate::kind::ConfigKind;

/// A room that groups several locations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomInfo {
    pub room: String,
    pub name: VariantText,
    pub hints: Option<VariantText>,
}

impl Mergeable for RoomInfo {
    fn merge_from(&mut self, overlay: Self) {
        self.name.merge_from(overlay.name);
        merge_nested(&mut self.hints, overlay.hints);
    }
}

impl Record for RoomInfo {
    type Key = String;
    const MERGE_KEY: Option<&'static str> = Some("room");

    fn merge_key(&self) -> Option<String> {
        string_key(&self.room)
    }
}

pub type RoomConfig = RecordList<RoomInfo>;

impl ConfigKind for RoomConfig {
    const NAME: &'static str = "rooms";
    const FILE_NAME: &'static str = "rooms.yml";

    fn baseline() -> Self {
        let room = |id: &str, names: &[&str]| RoomInfo {
            room: id.to_string(),
            name: text(names),
            hints: None,
        };
        vec![
            room("Blind's Hideout", &["Blind's Hideout", "Blind's Hut"]),
            room("Mimic Cave", &["Mimic Cave"]),
            RoomInfo {
                hints: Some(text(&["It's a long fall down."])),
                ..room("Pyramid Fairy", &["Pyramid Fairy", "Fat Fairy"])
            },
            room("Spring Ball Room", &["Spring Ball Room"]),
        ]
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_merge_key_field, assert_unique_keys};

    #[test]
    fn merge_key_is_room_field() {
        assert_merge_key_field(&RoomConfig::baseline()[0]);
    }

    #[test]
    fn baseline_keys_are_unique() {
        assert_unique_keys(&RoomConfig::baseline());
    }

    #[test]
    fn new_room_is_appended() {
        let mut config = RoomConfig::baseline();
        let overlay: RoomConfig = serde_yaml::from_str("- room: Secret Room\n  name: Shh\n").unwrap();
        config.merge_from(overlay);
        assert_eq!(config.last().unwrap().room, "Secret Room");
    }
}
