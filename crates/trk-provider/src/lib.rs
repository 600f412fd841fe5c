//! Tracker configuration provider.
//!
//! Builds each configuration kind by starting from its built-in baseline and
//! merging the overlay documents of the selected profiles in order:
//!
//! ```text
//! baseline ─▶ merge(profile₁) ─▶ merge(profile₁ mood) ─▶ merge(profile₂) ─▶ …
//! ```
//!
//! # Key Types
//!
//! - [`ConfigProvider`]: typed and name-based loading
//! - [`ProviderSettings`]: where external profiles live and which sources to use
//! - [`LoadedConfig`] / [`AppliedOverlay`]: a merged kind plus the overlays that built it

pub mod error;
pub mod provenance;
pub mod provider;
pub mod settings;

pub use error::{ProviderError, ProviderResult};
pub use provenance::{AppliedOverlay, LoadedConfig};
pub use provider::ConfigProvider;
pub use settings::{ProviderSettings, CONFIG_DIR_ENV, SETTINGS_FILE_NAME};
