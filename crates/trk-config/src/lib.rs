//! Tracker configuration kinds.
//!
//! Each kind is one independently loaded configuration family with a fixed
//! shape, a conventional file name, and a built-in baseline that profile
//! overlays are merged onto.
//!
//! | Kind        | File            | Shape                          |
//! |-------------|-----------------|--------------------------------|
//! | `items`     | `items.yml`     | records keyed by `item`        |
//! | `locations` | `locations.yml` | records keyed by `location_number` |
//! | `dungeons`  | `dungeons.yml`  | records keyed by `dungeon`     |
//! | `bosses`    | `bosses.yml`    | records keyed by `boss`        |
//! | `rooms`     | `rooms.yml`     | records keyed by `room`        |
//! | `regions`   | `regions.yml`   | records keyed by `region`      |
//! | `rewards`   | `rewards.yml`   | records keyed by `reward`      |
//! | `responses` | `responses.yml` | property bag                   |
//! | `ui`        | `ui.yml`        | records keyed by `name`        |
//! | `requests`  | `requests.yml`  | records without a key          |
//!
//! # Key Types
//!
//! - [`ConfigKind`]: statically typed kind with its baseline factory
//! - [`KindRegistry`]: lookup of kinds by name for dynamic loading

pub mod kind;
pub mod kinds;
pub mod registry;

#[cfg(test)]
pub(crate) mod testing;

pub use kind::ConfigKind;
pub use kinds::{
    BasicVoiceRequest, BossConfig, BossInfo, ChatConfig, DungeonConfig, DungeonInfo, HintsConfig,
    ItemConfig, ItemData, LocationConfig, LocationInfo, RegionConfig, RegionInfo, RequestConfig,
    ResponseConfig, RewardConfig, RewardInfo, RoomConfig, RoomInfo, SpoilerConfig, UiConfig,
    UiGridLocation, UiGridLocationType, UiLayout,
};
pub use registry::{KindEntry, KindRegistry};
