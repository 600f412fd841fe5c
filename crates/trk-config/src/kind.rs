use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;
use trk_merge::Mergeable;

/// A configuration kind: one shape, one file, one baseline.
///
/// A parsed overlay starts from empty fields; [`ConfigKind::baseline`] is
/// the fully populated configuration it is merged onto.
pub trait ConfigKind: Mergeable + Serialize + DeserializeOwned + Debug + Send + 'static {
    /// Short name used on the command line and in the registry.
    const NAME: &'static str;

    /// Conventional file name inside a profile.
    const FILE_NAME: &'static str;

    /// Build the built-in configuration that overlays are merged onto.
    fn baseline() -> Self;

    /// Normalize a freshly parsed overlay before it is merged.
    fn on_post_load(&mut self) {}
}
