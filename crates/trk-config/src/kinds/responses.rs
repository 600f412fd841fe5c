//! Tracker voice responses.
//!
//! Unlike the record kinds, responses are a single property bag. Every
//! field is optional so that an overlay only needs to mention what it adds.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use trk_merge::{
    merge_keyed_map, merge_nested, merge_nullable_map, merge_string_map, merge_string_set, Mergeable,
};
use trk_types::VariantText;

use super::text;
use crate::kind::ConfigKind;

/// Responses for giving hints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HintsConfig {
    pub enabled_hints: Option<VariantText>,
    pub disabled_hints: Option<VariantText>,
    pub no_applicable_hints: Option<VariantText>,
    pub item_not_in_logic: Option<VariantText>,
    pub item_in_early_sphere: Option<VariantText>,
    pub item_in_late_sphere: Option<VariantText>,
}

impl Mergeable for HintsConfig {
    fn merge_from(&mut self, overlay: Self) {
        merge_nested(&mut self.enabled_hints, overlay.enabled_hints);
        merge_nested(&mut self.disabled_hints, overlay.disabled_hints);
        merge_nested(&mut self.no_applicable_hints, overlay.no_applicable_hints);
        merge_nested(&mut self.item_not_in_logic, overlay.item_not_in_logic);
        merge_nested(&mut self.item_in_early_sphere, overlay.item_in_early_sphere);
        merge_nested(&mut self.item_in_late_sphere, overlay.item_in_late_sphere);
    }
}

/// Responses for chat integration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Messages treated as greetings to the tracker.
    pub recognized_greetings: Option<Vec<String>>,
    /// How to pronounce chat user names, keyed by user name.
    pub user_name_pronunciation: Option<BTreeMap<String, String>>,
    pub when_connected: Option<VariantText>,
    pub when_disconnected: Option<VariantText>,
    pub greeting_responses: Option<VariantText>,
    pub greeted_twice: Option<VariantText>,
    pub poll_opened: Option<VariantText>,
}

impl Mergeable for ChatConfig {
    fn merge_from(&mut self, overlay: Self) {
        merge_string_set(&mut self.recognized_greetings, overlay.recognized_greetings);
        merge_string_map(&mut self.user_name_pronunciation, overlay.user_name_pronunciation);
        merge_nested(&mut self.when_connected, overlay.when_connected);
        merge_nested(&mut self.when_disconnected, overlay.when_disconnected);
        merge_nested(&mut self.greeting_responses, overlay.greeting_responses);
        merge_nested(&mut self.greeted_twice, overlay.greeted_twice);
        merge_nested(&mut self.poll_opened, overlay.poll_opened);
    }
}

/// Responses for spoiler lookups.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpoilerConfig {
    pub item_is_in_location: Option<VariantText>,
    pub location_has_item: Option<VariantText>,
    pub playthrough_impossible: Option<VariantText>,
}

impl Mergeable for SpoilerConfig {
    fn merge_from(&mut self, overlay: Self) {
        merge_nested(&mut self.item_is_in_location, overlay.item_is_in_location);
        merge_nested(&mut self.location_has_item, overlay.location_has_item);
        merge_nested(&mut self.playthrough_impossible, overlay.playthrough_impossible);
    }
}

/// Everything the tracker says that is not tied to a specific item,
/// location, or boss.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseConfig {
    /// Display name of the tracker voice.
    pub tracker_name: Option<String>,
    pub start_tracking: Option<VariantText>,
    pub stop_tracking: Option<VariantText>,
    /// `{0}` is the item name.
    pub tracked_item: Option<VariantText>,
    /// `{0}` is the plural item name, `{1}` the count.
    pub tracked_item_multiple: Option<VariantText>,
    pub tracked_already_tracked: Option<VariantText>,
    /// Keyed by the number of times nothing was tracked out of logic.
    pub tracked_nothing_out_of_logic: Option<BTreeMap<u32, VariantText>>,
    /// Keyed by the number of out of logic items. A null entry means "say nothing".
    pub tracked_out_of_logic_item: Option<BTreeMap<u32, Option<VariantText>>>,
    /// Idle remarks keyed by a trigger name.
    pub idle: Option<BTreeMap<String, VariantText>>,
    pub error: Option<VariantText>,
    pub hints: Option<HintsConfig>,
    pub chat: Option<ChatConfig>,
    pub spoilers: Option<SpoilerConfig>,
}

impl Mergeable for ResponseConfig {
    fn merge_from(&mut self, overlay: Self) {
        merge_nested(&mut self.start_tracking, overlay.start_tracking);
        merge_nested(&mut self.stop_tracking, overlay.stop_tracking);
        merge_nested(&mut self.tracked_item, overlay.tracked_item);
        merge_nested(&mut self.tracked_item_multiple, overlay.tracked_item_multiple);
        merge_nested(&mut self.tracked_already_tracked, overlay.tracked_already_tracked);
        merge_keyed_map(&mut self.tracked_nothing_out_of_logic, overlay.tracked_nothing_out_of_logic);
        merge_nullable_map(&mut self.tracked_out_of_logic_item, overlay.tracked_out_of_logic_item);
        merge_keyed_map(&mut self.idle, overlay.idle);
        merge_nested(&mut self.error, overlay.error);
        merge_nested(&mut self.hints, overlay.hints);
        merge_nested(&mut self.chat, overlay.chat);
        merge_nested(&mut self.spoilers, overlay.spoilers);
    }
}

impl ConfigKind for ResponseConfig {
    const NAME: &'static str = "responses";
    const FILE_NAME: &'static str = "responses.yml";

    fn baseline() -> Self {
        Self {
            tracker_name: Some("Tracker".into()),
            start_tracking: Some(text(&["Hey, it's me, Tracker.", "Tracker here. Let's go."])),
            stop_tracking: Some(text(&["Bye!"])),
            tracked_item: Some(text(&["Toggled {0} on.", "Tracked {0}."])),
            tracked_item_multiple: Some(text(&["You now have {1} {0}."])),
            tracked_already_tracked: Some(text(&["You already have {0}."])),
            tracked_nothing_out_of_logic: Some(BTreeMap::from([
                (1, text(&["Are you sure you're in logic?"])),
                (5, text(&["That's five times now."])),
            ])),
            tracked_out_of_logic_item: Some(BTreeMap::from([
                (1, Some(text(&["You're out of logic, by the way."]))),
                (2, None),
            ])),
            idle: Some(BTreeMap::from([
                ("first".to_string(), text(&["Are you still there?"])),
                ("second".to_string(), text(&["Hello? Anyone?"])),
            ])),
            error: Some(text(&["Oops. Something went wrong."])),
            hints: Some(HintsConfig {
                enabled_hints: Some(text(&["Hints are on."])),
                disabled_hints: Some(text(&["Hints are off."])),
                no_applicable_hints: Some(text(&["I have nothing for you."])),
                item_not_in_logic: Some(text(&["{0} isn't in logic yet."])),
                item_in_early_sphere: Some(text(&["{0} is in an early sphere."])),
                item_in_late_sphere: Some(text(&["{0} is pretty late."])),
            }),
            chat: Some(ChatConfig {
                recognized_greetings: Some(vec!["hi".into(), "hello".into(), "hey tracker".into()]),
                user_name_pronunciation: Some(BTreeMap::new()),
                when_connected: Some(text(&["Connected to chat."])),
                when_disconnected: Some(text(&["Disconnected from chat."])),
                greeting_responses: Some(text(&["Hey, {0}!", "Hi, {0}."])),
                greeted_twice: Some(text(&["Hello again, {0}."])),
                poll_opened: Some(text(&["Poll's open."])),
            }),
            spoilers: Some(SpoilerConfig {
                item_is_in_location: Some(text(&["{0} is at {1}."])),
                location_has_item: Some(text(&["{0} has {1}."])),
                playthrough_impossible: Some(text(&["This seed can't be beaten."])),
            }),
        }
    }
}
