use serde::{Deserialize, Serialize};
use trk_merge::{Mergeable, Record, RecordList};
use trk_types::VariantText;

use super::{string_key, text};
use crate::kind::ConfigKind;

/// A dungeon reward (pendant, crystal, or boss token).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardInfo {
    pub reward: String,
    pub name: VariantText,
    pub article: Option<String>,
}

impl Mergeable for RewardInfo {
    fn merge_from(&mut self, overlay: Self) {
        self.name.merge_from(overlay.name);
    }
}

impl Record for RewardInfo {
    type Key = String;
    const MERGE_KEY: Option<&'static str> = Some("reward");

    fn merge_key(&self) -> Option<String> {
        string_key(&self.reward)
    }
}

pub type RewardConfig = RecordList<RewardInfo>;

impl ConfigKind for RewardConfig {
    const NAME: &'static str = "rewards";
    const FILE_NAME: &'static str = "rewards.yml";

    fn baseline() -> Self {
        let reward = |id: &str, names: &[&str], article: &str| RewardInfo {
            reward: id.to_string(),
            name: text(names),
            article: Some(article.to_string()),
        };
        vec![
            reward("PendantGreen", &["Green Pendant", "Pendant of Courage"], "the"),
            reward("PendantRed", &["Red Pendant"], "a"),
            reward("CrystalBlue", &["Blue Crystal", "Crystal"], "a"),
            reward("CrystalRed", &["Red Crystal"], "a"),
        ]
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_merge_key_field, assert_unique_keys};

    #[test]
    fn merge_key_is_reward_field() {
        assert_merge_key_field(&RewardConfig::baseline()[0]);
    }

    #[test]
    fn baseline_keys_are_unique() {
        assert_unique_keys(&RewardConfig::baseline());
    }
}
