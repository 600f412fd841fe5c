//! Multi-phrasing text values.
//!
//! A [`VariantText`] holds every way a message may be phrased. Which phrasing
//! is used is decided at speaking time by weighted random selection, so a
//! profile can add flavour lines without removing the stock ones.
//!
//! In profile documents a value may be written as a plain string, a list of
//! strings, a list of phrasing objects, or any mix of the last two:
//!
//! ```yaml
//! name: Sword
//! plural:
//!   - Swords
//!   - text: Pointy sticks
//!     weight: 0.2
//! ```

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{TypeError, TypeResult};
use crate::format::format_placeholders;

/// Weight assigned to a phrasing when none is given.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Total weight at which selection stops being random and the first phrasing
/// at or above this weight is always chosen.
pub const FORCED_WEIGHT: f64 = 1000.0;

/// A follow-up line spoken after a phrasing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalLine {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// One phrasing of a [`VariantText`].
#[derive(Clone, Debug, PartialEq)]
pub struct Possibility {
    pub text: String,
    pub weight: f64,
    /// Tracker image to display while the phrasing is spoken.
    pub image: Option<String>,
    pub additional_lines: Option<Vec<AdditionalLine>>,
}

impl Possibility {
    /// A phrasing with the default weight.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            weight: DEFAULT_WEIGHT,
            image: None,
            additional_lines: None,
        }
    }

    /// A phrasing with an explicit weight. Negative weights are rejected.
    pub fn weighted(text: impl Into<String>, weight: f64) -> TypeResult<Self> {
        let text = text.into();
        if weight < 0.0 || weight.is_nan() {
            return Err(TypeError::NegativeWeight { text, weight });
        }
        Ok(Self {
            weight,
            ..Self::new(text)
        })
    }

    /// Attach a tracker image.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// `true` if this phrasing can be written as a bare string.
    fn is_plain(&self) -> bool {
        self.weight == DEFAULT_WEIGHT && self.image.is_none() && self.additional_lines.is_none()
    }
}

impl From<&str> for Possibility {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Possibility {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Possibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Several interchangeable phrasings of one message.
///
/// Order is significant only for forced selection and for display; merging
/// appends phrasings and never removes or de-duplicates them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VariantText(Vec<Possibility>);

impl VariantText {
    /// An empty value with no phrasings.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from plain phrasings with the default weight.
    pub fn new<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(texts.into_iter().map(Possibility::new).collect())
    }

    /// Build from fully specified phrasings.
    pub fn from_possibilities(possibilities: Vec<Possibility>) -> Self {
        Self(possibilities)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Possibility> {
        self.0.iter()
    }

    /// The texts of all phrasings, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.0.iter().map(|p| p.text.as_str()).collect()
    }

    /// The first phrasing, used wherever a stable display name is needed.
    pub fn primary(&self) -> Option<&str> {
        self.0.first().map(|p| p.text.as_str())
    }

    pub fn push(&mut self, possibility: impl Into<Possibility>) {
        self.0.push(possibility.into());
    }

    /// Append every phrasing of `other`, in order, keeping duplicates.
    pub fn append(&mut self, other: VariantText) {
        self.0.extend(other.0);
    }

    /// Case-insensitive lookup of a phrasing text.
    pub fn contains_text(&self, text: &str) -> bool {
        self.0.iter().any(|p| p.text.eq_ignore_ascii_case(text))
    }

    pub fn total_weight(&self) -> f64 {
        self.0.iter().map(|p| p.weight).sum()
    }

    /// Choose a phrasing with probability proportional to its weight.
    ///
    /// Returns `None` only when there are no phrasings.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Possibility> {
        if self.0.is_empty() {
            return None;
        }

        let total = self.total_weight();
        if total >= FORCED_WEIGHT {
            if let Some(forced) = self.0.iter().find(|p| p.weight >= FORCED_WEIGHT) {
                return Some(forced);
            }
        }

        if total <= 0.0 {
            return self.0.first();
        }

        let mut target = rng.gen_range(0.0..total);
        for possibility in &self.0 {
            if target < possibility.weight {
                return Some(possibility);
            }
            target -= possibility.weight;
        }

        // Floating-point residue can leave `target` just past the last bucket.
        self.0.last()
    }

    /// Pick a phrasing and substitute its `{N}` placeholders.
    pub fn format<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        args: &[&dyn fmt::Display],
    ) -> Option<String> {
        self.pick(rng)
            .map(|possibility| format_placeholders(&possibility.text, args))
    }
}

impl From<&str> for VariantText {
    fn from(text: &str) -> Self {
        Self::new([text])
    }
}

impl<'a> IntoIterator for &'a VariantText {
    type Item = &'a Possibility;
    type IntoIter = std::slice::Iter<'a, Possibility>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for VariantText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.texts().join(" | "))
    }
}

// ---------------------------------------------------------------------------
// Serde representation
// ---------------------------------------------------------------------------

fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}

#[derive(Deserialize)]
struct PossibilityFields {
    text: String,
    #[serde(default = "default_weight")]
    weight: f64,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    additional_lines: Option<Vec<AdditionalLine>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PossibilityRepr {
    Text(String),
    Full(PossibilityFields),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum VariantTextRepr {
    Many(Vec<PossibilityRepr>),
    One(PossibilityRepr),
}

impl TryFrom<PossibilityRepr> for Possibility {
    type Error = TypeError;

    fn try_from(repr: PossibilityRepr) -> TypeResult<Self> {
        match repr {
            PossibilityRepr::Text(text) => Ok(Possibility::new(text)),
            PossibilityRepr::Full(fields) => {
                let mut possibility = Possibility::weighted(fields.text, fields.weight)?;
                possibility.image = fields.image;
                possibility.additional_lines = fields.additional_lines;
                Ok(possibility)
            }
        }
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum PossibilityOut<'a> {
    Text(&'a str),
    Full {
        text: &'a str,
        weight: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        image: Option<&'a str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        additional_lines: Option<&'a [AdditionalLine]>,
    },
}

impl<'a> From<&'a Possibility> for PossibilityOut<'a> {
    fn from(p: &'a Possibility) -> Self {
        if p.is_plain() {
            PossibilityOut::Text(&p.text)
        } else {
            PossibilityOut::Full {
                text: &p.text,
                weight: p.weight,
                image: p.image.as_deref(),
                additional_lines: p.additional_lines.as_deref(),
            }
        }
    }
}

impl Serialize for Possibility {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        PossibilityOut::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Possibility {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = PossibilityRepr::deserialize(deserializer)?;
        Possibility::try_from(repr).map_err(serde::de::Error::custom)
    }
}

impl Serialize for VariantText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().map(PossibilityOut::from))
    }
}

impl<'de> Deserialize<'de> for VariantText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let reprs = match VariantTextRepr::deserialize(deserializer)? {
            VariantTextRepr::Many(reprs) => reprs,
            VariantTextRepr::One(repr) => vec![repr],
        };
        reprs
            .into_iter()
            .map(Possibility::try_from)
            .collect::<TypeResult<Vec<_>>>()
            .map(VariantText)
            .map_err(serde::de::Error::custom)
    }
}
