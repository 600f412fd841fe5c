//! Per-field merge helpers.
//!
//! A property-bag kind implements [`Mergeable`] by calling one helper per
//! mergeable field, in declaration order. Scalar fields are simply not
//! mentioned, which is what keeps the baseline's value.
//!
//! Every `Option` helper treats `None` in the primary as "absent" and assigns
//! the overlay wholesale; `None` in the overlay is always a no-op.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::traits::Mergeable;

/// Merge an optional nested document.
///
/// Primary absent: take the overlay. Both present: recurse.
pub fn merge_nested<T: Mergeable>(primary: &mut Option<T>, overlay: Option<T>) {
    let Some(overlay) = overlay else {
        return;
    };
    match primary {
        Some(existing) => existing.merge_from(overlay),
        None => *primary = Some(overlay),
    }
}

/// Merge an optional keyed map.
pub fn merge_keyed_map<K: Ord, V: Mergeable>(
    primary: &mut Option<BTreeMap<K, V>>,
    overlay: Option<BTreeMap<K, V>>,
) {
    let Some(overlay) = overlay else {
        return;
    };
    match primary {
        Some(existing) => merge_map_entries(existing, overlay),
        None => *primary = Some(overlay),
    }
}

/// Merge keyed-map entries: existing keys are merged, new keys inserted.
pub fn merge_map_entries<K: Ord, V: Mergeable>(primary: &mut BTreeMap<K, V>, overlay: BTreeMap<K, V>) {
    for (key, value) in overlay {
        match primary.entry(key) {
            Entry::Occupied(mut slot) => slot.get_mut().merge_from(value),
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
        }
    }
}

/// Merge an optional keyed map whose values may be null.
pub fn merge_nullable_map<K: Ord, V: Mergeable>(
    primary: &mut Option<BTreeMap<K, Option<V>>>,
    overlay: Option<BTreeMap<K, Option<V>>>,
) {
    let Some(overlay) = overlay else {
        return;
    };
    match primary {
        Some(existing) => merge_nullable_entries(existing, overlay),
        None => *primary = Some(overlay),
    }
}

/// Merge keyed-map entries whose values may be null.
///
/// A null overlay value never changes the primary. A non-null overlay value
/// is merged into a non-null primary entry and otherwise stored as is.
pub fn merge_nullable_entries<K: Ord, V: Mergeable>(
    primary: &mut BTreeMap<K, Option<V>>,
    overlay: BTreeMap<K, Option<V>>,
) {
    for (key, value) in overlay {
        let Some(value) = value else {
            continue;
        };
        match primary.entry(key) {
            Entry::Occupied(mut slot) => match slot.get_mut() {
                Some(existing) => existing.merge_from(value),
                empty => *empty = Some(value),
            },
            Entry::Vacant(slot) => {
                slot.insert(Some(value));
            }
        }
    }
}

/// Ordered union of two string sets.
///
/// Overlay entries not already present are appended in overlay order.
/// Comparison is exact (case-sensitive).
pub fn merge_string_set(primary: &mut Option<Vec<String>>, overlay: Option<Vec<String>>) {
    let Some(overlay) = overlay else {
        return;
    };
    match primary {
        Some(existing) => {
            for entry in overlay {
                if !existing.contains(&entry) {
                    existing.push(entry);
                }
            }
        }
        None => *primary = Some(overlay),
    }
}

/// Merge a string-to-string map: the overlay's value replaces per key.
pub fn merge_string_map(
    primary: &mut Option<BTreeMap<String, String>>,
    overlay: Option<BTreeMap<String, String>>,
) {
    let Some(overlay) = overlay else {
        return;
    };
    match primary {
        Some(existing) => existing.extend(overlay),
        None => *primary = Some(overlay),
    }
}
