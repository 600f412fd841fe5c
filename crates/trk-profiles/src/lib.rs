//! Profile document sources for tracker configuration.
//!
//! A *profile* is a named bundle of overlay documents, one optional file per
//! configuration kind (`items.yml`, `responses.yml`, ...). Profiles live in
//! an editable external directory or are compiled into the binary; the
//! [`ProfileLoader`] asks its sources in order and returns the first match.
//!
//! # Key Types
//!
//! - [`ProfileSource`]: trait for anything that can serve profile documents
//! - [`DirectorySource`]: `<root>/<profile>/<file>` on disk
//! - [`BundledSource`]: documents compiled into the binary
//! - [`InMemoryProfileSource`]: for tests and embedding
//! - [`ProfileLoader`]: layered lookup and profile discovery
//! - [`ProfileDocument`]: raw document text plus where it came from

pub mod bundled;
pub mod directory;
pub mod document;
pub mod error;
pub mod loader;
pub mod memory;
pub mod names;
pub mod traits;

pub use bundled::{BundledDocument, BundledSource};
pub use directory::DirectorySource;
pub use document::{DocumentOrigin, ProfileDocument};
pub use error::{ProfileError, ProfileResult};
pub use loader::{mood_file_name, ProfileLoader, TEMPLATES_PROFILE};
pub use memory::InMemoryProfileSource;
pub use names::{validate_mood_name, validate_profile_name};
pub use traits::ProfileSource;
