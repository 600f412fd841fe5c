use crate::document::{DocumentOrigin, ProfileDocument};
use crate::error::ProfileResult;

/// A place profile documents can be read from.
///
/// Implementations must satisfy these invariants:
/// - A missing profile or missing file is `Ok(None)`, never an error.
/// - Names passed in have already been validated by the caller.
/// - Listings are sorted and contain no duplicates.
pub trait ProfileSource: Send + Sync {
    /// Origin reported for every document this source serves.
    fn origin(&self) -> DocumentOrigin;

    /// Read `<profile>/<file_name>`.
    fn read_document(&self, profile: &str, file_name: &str) -> ProfileResult<Option<ProfileDocument>>;

    /// Names of all profiles this source knows about.
    fn list_profiles(&self) -> ProfileResult<Vec<String>>;

    /// File names present in one profile. Unknown profiles list as empty.
    fn list_files(&self, profile: &str) -> ProfileResult<Vec<String>>;
}
