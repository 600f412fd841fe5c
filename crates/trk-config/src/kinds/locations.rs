use serde::{Deserialize, Serialize};
use trk_merge::{merge_nested, Mergeable, Record, RecordList};
use trk_types::VariantText;

use super::text;
use crate::kind::ConfigKind;

/// A single item location.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationInfo {
    /// Numeric location id from the randomizer logic.
    pub location_number: Option<u32>,
    pub name: VariantText,
    /// Map coordinates.
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub hints: Option<VariantText>,
    pub when_tracking_junk: Option<VariantText>,
    pub when_tracking_progression: Option<VariantText>,
    pub out_of_logic: Option<VariantText>,
}

impl LocationInfo {
    pub fn new(location_number: u32, name: VariantText) -> Self {
        Self {
            location_number: Some(location_number),
            name,
            ..Self::default()
        }
    }
}

impl Mergeable for LocationInfo {
    fn merge_from(&mut self, overlay: Self) {
        self.name.merge_from(overlay.name);
        merge_nested(&mut self.hints, overlay.hints);
        merge_nested(&mut self.when_tracking_junk, overlay.when_tracking_junk);
        merge_nested(&mut self.when_tracking_progression, overlay.when_tracking_progression);
        merge_nested(&mut self.out_of_logic, overlay.out_of_logic);
    }
}

impl Record for LocationInfo {
    type Key = u32;
    const MERGE_KEY: Option<&'static str> = Some("location_number");

    fn merge_key(&self) -> Option<u32> {
        self.location_number
    }
}

pub type LocationConfig = RecordList<LocationInfo>;

impl ConfigKind for LocationConfig {
    const NAME: &'static str = "locations";
    const FILE_NAME: &'static str = "locations.yml";

    fn baseline() -> Self {
        vec![
            LocationInfo {
                x: Some(1284),
                y: Some(1080),
                ..LocationInfo::new(256, text(&["Sahasrahla", "Sahasrahla's Gift"]))
            },
            LocationInfo {
                x: Some(850),
                y: Some(1220),
                hints: Some(text(&["It's behind a bush you have to lift."])),
                ..LocationInfo::new(257, text(&["Link's House"]))
            },
            LocationInfo {
                out_of_logic: Some(text(&["You'll need to bomb your way in there."])),
                ..LocationInfo::new(258, text(&["Kakariko Well - Top"]))
            },
            LocationInfo::new(1, text(&["Power Bomb (Crateria surface)"])),
            LocationInfo {
                when_tracking_junk: Some(text(&["All that for nothing."])),
                ..LocationInfo::new(2, text(&["Missile (outside Wrecked Ship bottom)"]))
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
    fn merge_key_is_location_number() {
        assert_merge_key_field(&LocationInfo::new(256, text(&["Sahasrahla"])));
    }

    #[test]
    fn baseline_keys_are_unique() {
        assert_unique_keys(&LocationConfig::baseline());
    }

    #[test]
    fn overlay_without_number_is_skipped() {
        let mut config = LocationConfig::baseline();
        let before = config.len();
        let overlay: LocationConfig = serde_yaml::from_str("- name: Mystery Spot\n").unwrap();

        config.merge_from(overlay);

        assert_eq!(config.len(), before);
    }

    #[test]
    fn coordinates_are_kept() {
        let mut config = LocationConfig::baseline();
        let overlay: LocationConfig =
            serde_yaml::from_str("- location_number: 256\n  x: 0\n  y: 0\n  name: Old Man Sahas\n").unwrap();

        config.merge_from(overlay);

        let sahasrahla = config.find(&256).unwrap();
        assert_eq!((sahasrahla.x, sahasrahla.y), (Some(1284), Some(1080)));
        assert_eq!(
            sahasrahla.name.texts(),
            vec!["Sahasrahla", "Sahasrahla's Gift", "Old Man Sahas"]
        );
    }
}
