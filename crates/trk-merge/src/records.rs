//! Record lists and the upsert-by-key merge.

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::traits::{Mergeable, Record};

/// An ordered list of records that merges by upsert.
///
/// Serializes as a plain sequence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordList<T>(Vec<T>);

impl<T> RecordList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Consume the list and return its records.
    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

impl<T: Record> RecordList<T> {
    /// Find the first record whose key equals `key`.
    pub fn find(&self, key: &T::Key) -> Option<&T> {
        self.0
            .iter()
            .find(|record| record.merge_key().as_ref() == Some(key))
    }
}

impl<T> Default for RecordList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for RecordList<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for RecordList<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> From<Vec<T>> for RecordList<T> {
    fn from(records: Vec<T>) -> Self {
        Self(records)
    }
}

impl<T> FromIterator<T> for RecordList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for RecordList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a RecordList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: Record> Mergeable for RecordList<T> {
    fn merge_from(&mut self, overlay: Self) {
        merge_records(&mut self.0, overlay.0);
    }
}

/// Upsert `overlay` records into `primary`.
///
/// 1. An empty overlay is a no-op.
/// 2. If `primary` is empty or `T` has no merge key, every overlay record is
///    appended in order.
/// 3. Otherwise each overlay record is merged into the first primary record
///    with an equal key, or appended when none matches. Overlay records
///    without a key are dropped.
///
/// Key uniqueness is not enforced. Records appended by this call take part in
/// matching for later records of the same overlay.
pub fn merge_records<T: Record>(primary: &mut Vec<T>, overlay: Vec<T>) {
    if overlay.is_empty() {
        return;
    }

    if primary.is_empty() || T::MERGE_KEY.is_none() {
        debug!(appended = overlay.len(), "appending records");
        primary.extend(overlay);
        return;
    }

    let mut merged = 0usize;
    let mut appended = 0usize;
    let mut skipped = 0usize;

    for record in overlay {
        let Some(key) = record.merge_key() else {
            trace!(field = T::MERGE_KEY, "skipping record without merge key");
            skipped += 1;
            continue;
        };

        let existing = primary
            .iter_mut()
            .find(|candidate| candidate.merge_key().as_ref() == Some(&key));

        match existing {
            Some(existing) => {
                existing.merge_from(record);
                merged += 1;
            }
            None => {
                primary.push(record);
                appended += 1;
            }
        }
    }

    debug!(merged, appended, skipped, "merged record list");
}
