use serde::{Deserialize, Serialize};
use trk_merge::{merge_nested, merge_string_set, Mergeable, Record, RecordList};
use trk_types::VariantText;

use super::text;
use crate::kind::ConfigKind;

/// A fixed phrase the tracker answers with a fixed response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicVoiceRequest {
    pub phrases: Option<Vec<String>>,
    pub response: Option<VariantText>,
}

impl BasicVoiceRequest {
    pub fn new(phrases: &[&str], response: VariantText) -> Self {
        Self {
            phrases: Some(phrases.iter().map(|p| p.to_string()).collect()),
            response: Some(response),
        }
    }

    /// `true` if `utterance` matches one of the phrases, ignoring case.
    pub fn matches(&self, utterance: &str) -> bool {
        self.phrases
            .iter()
            .flatten()
            .any(|phrase| phrase.eq_ignore_ascii_case(utterance.trim()))
    }
}

impl Mergeable for BasicVoiceRequest {
    fn merge_from(&mut self, overlay: Self) {
        merge_string_set(&mut self.phrases, overlay.phrases);
        merge_nested(&mut self.response, overlay.response);
    }
}

/// Requests have no identity; overlays always append.
impl Record for BasicVoiceRequest {
    type Key = ();
    const MERGE_KEY: Option<&'static str> = None;

    fn merge_key(&self) -> Option<()> {
        None
    }
}

pub type RequestConfig = RecordList<BasicVoiceRequest>;

impl ConfigKind for RequestConfig {
    const NAME: &'static str = "requests";
    const FILE_NAME: &'static str = "requests.yml";

    fn baseline() -> Self {
        vec![
            BasicVoiceRequest::new(&["hey tracker, say hi", "say hello"], text(&["Hi!", "Hello."])),
            BasicVoiceRequest::new(
                &["hey tracker, what's your favorite item"],
                text(&["The Hookshot. Obviously."]),
            ),
        ]
        .into()
    }

    /// Trim phrases and drop requests that cannot be spoken.
    fn on_post_load(&mut self) {
        for request in self.iter_mut() {
            if let Some(phrases) = request.phrases.as_mut() {
                for phrase in phrases.iter_mut() {
                    *phrase = phrase.trim().to_string();
                }
                phrases.retain(|phrase| !phrase.is_empty());
            }
        }
        self.retain(|request| request.phrases.as_ref().is_some_and(|p| !p.is_empty()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_always_append() {
        let mut config = RequestConfig::baseline();
        let overlay = RequestConfig::from(vec![BasicVoiceRequest::new(&["say hello"], text(&["Yo."]))]);

        config.merge_from(overlay);

        assert_eq!(config.len(), 3);
        assert!(config[2].matches("Say Hello"));
    }

    #[test]
    fn post_load_drops_unspeakable_requests() {
        let mut overlay: RequestConfig = serde_yaml::from_str(
            "- phrases: ['  how are you  ', '']\n  response: Fine.\n- response: Nobody can ask this.\n- phrases: []\n",
        )
        .unwrap();

        overlay.on_post_load();

        assert_eq!(overlay.len(), 1);
        assert_eq!(overlay[0].phrases.as_deref(), Some(&["how are you".to_string()][..]));
    }

    #[test]
    fn merge_unions_phrases_and_appends_responses() {
        let mut request = BasicVoiceRequest::new(&["a", "b"], text(&["one"]));
        request.merge_from(BasicVoiceRequest::new(&["b", "c"], text(&["two"])));
        assert_eq!(request.phrases.unwrap(), vec!["a", "b", "c"]);
        assert_eq!(request.response.unwrap().texts(), vec!["one", "two"]);
    }
}
