use serde::{Deserialize, Serialize};
use trk_merge::{merge_nested, Mergeable, Record, RecordList};
use trk_types::VariantText;

use super::{string_key, text};
use crate::kind::ConfigKind;

/// A boss that is not tied to a dungeon reward.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BossInfo {
    pub boss: String,
    pub name: VariantText,
    pub when_tracked: Option<VariantText>,
    pub when_defeated: Option<VariantText>,
    pub image: Option<String>,
}

impl BossInfo {
    pub fn new(boss: impl Into<String>, name: VariantText) -> Self {
        Self {
            boss: boss.into(),
            name,
            ..Self::default()
        }
    }
}

impl Mergeable for BossInfo {
    fn merge_from(&mut self, overlay: Self) {
        self.name.merge_from(overlay.name);
        merge_nested(&mut self.when_tracked, overlay.when_tracked);
        merge_nested(&mut self.when_defeated, overlay.when_defeated);
    }
}

impl Record for BossInfo {
    type Key = String;
    const MERGE_KEY: Option<&'static str> = Some("boss");

    fn merge_key(&self) -> Option<String> {
        string_key(&self.boss)
    }
}

pub type BossConfig = RecordList<BossInfo>;

impl ConfigKind for BossConfig {
    const NAME: &'static str = "bosses";
    const FILE_NAME: &'static str = "bosses.yml";

    fn baseline() -> Self {
        vec![
            BossInfo {
                when_defeated: Some(text(&["Kraid is down. Not that it was hard."])),
                image: Some("kraid.png".into()),
                ..BossInfo::new("Kraid", text(&["Kraid"]))
            },
            BossInfo {
                image: Some("phantoon.png".into()),
                ..BossInfo::new("Phantoon", text(&["Phantoon"]))
            },
            BossInfo::new("Draygon", text(&["Draygon"])),
            BossInfo {
                when_tracked: Some(text(&["Ridley? Ridley."])),
                ..BossInfo::new("Ridley", text(&["Ridley", "Space Dragon"]))
            },
        ]
        .into()
    }
}
