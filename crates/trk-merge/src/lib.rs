//! Merge engine for tracker configuration.
//!
//! A configuration kind starts from a fully populated baseline and absorbs
//! profile overlays one at a time. How each field absorbs its overlay is
//! decided by the field's type, not by per-kind logic:
//!
//! | Field type                               | Rule                                   |
//! |------------------------------------------|----------------------------------------|
//! | [`RecordList<T>`]                        | upsert by [`Record::merge_key`]        |
//! | `BTreeMap<K, VariantText>`               | merge entries by key                   |
//! | `Vec<String>` (string set)               | ordered union                          |
//! | any [`Mergeable`] (incl. `VariantText`)  | recurse                                |
//! | `BTreeMap<String, String>`               | overlay replaces per key               |
//! | anything else (scalars)                  | untouched, baseline wins               |
//!
//! Each kind implements [`Mergeable`] by calling the helpers in [`fields`]
//! for its fields in declaration order.
//!
//! # Design Rules
//!
//! 1. Merging is a left fold; the overlay applied last wins on collisions.
//! 2. `VariantText` merges append phrasings and never de-duplicate.
//! 3. Scalar fields are never overwritten by an overlay.
//! 4. Typed merges cannot fail. Type-erased merges check shapes before
//!    mutating anything ([`merge_erased`]).

pub mod erased;
pub mod error;
pub mod fields;
pub mod records;
pub mod traits;

pub use erased::{merge_erased, ErasedConfig};
pub use error::{MergeError, MergeResult};
pub use fields::{
    merge_keyed_map, merge_map_entries, merge_nested, merge_nullable_entries,
    merge_nullable_map, merge_string_map, merge_string_set,
};
pub use records::{merge_records, RecordList};
pub use traits::{Mergeable, Record};
