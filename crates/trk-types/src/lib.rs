//! Foundation types for tracker configuration.
//!
//! Every configuration kind is built from a handful of shared value types.
//! The most important one is [`VariantText`]: a message that can be spoken
//! in several interchangeable ways, each phrasing carrying a selection weight.
//!
//! # Key Types
//!
//! - [`VariantText`]: Ordered set of interchangeable phrasings
//! - [`Possibility`]: One phrasing with weight, optional image and follow-up lines
//! - [`AdditionalLine`]: A follow-up line spoken after a phrasing
//! - [`TypeError`]: Construction and decoding failures

pub mod error;
pub mod format;
pub mod variant;

pub use error::{TypeError, TypeResult};
pub use format::format_placeholders;
pub use variant::{AdditionalLine, Possibility, VariantText, DEFAULT_WEIGHT, FORCED_WEIGHT};
