//! The built-in configuration kinds.

mod bosses;
mod dungeons;
mod items;
mod locations;
mod regions;
mod requests;
mod responses;
mod rewards;
mod rooms;
mod ui;

pub use bosses::{BossConfig, BossInfo};
pub use dungeons::{DungeonConfig, DungeonInfo};
pub use items::{ItemConfig, ItemData};
pub use locations::{LocationConfig, LocationInfo};
pub use regions::{RegionConfig, RegionInfo};
pub use requests::{BasicVoiceRequest, RequestConfig};
pub use responses::{ChatConfig, HintsConfig, ResponseConfig, SpoilerConfig};
pub use rewards::{RewardConfig, RewardInfo};
pub use rooms::{RoomConfig, RoomInfo};
pub use ui::{UiConfig, UiGridLocation, UiGridLocationType, UiLayout};

use trk_types::VariantText;

/// Shorthand for baseline tables.
fn text(phrases: &[&str]) -> VariantText {
    VariantText::new(phrases.iter().copied())
}

/// Non-empty string keys identify a record; an empty key matches nothing.
fn string_key(key: &str) -> Option<String> {
    (!key.is_empty()).then(|| key.to_string())
}
