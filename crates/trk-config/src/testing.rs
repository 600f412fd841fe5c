//! Shared assertions for kind tests.

use serde::Serialize;
use trk_merge::Record;

/// Assert that `T::MERGE_KEY` names a serialized field of `record` holding
/// the same value as `record.merge_key()`.
pub(crate) fn assert_merge_key_field<T>(record: &T)
where
    T: Record + Serialize,
    T::Key: Serialize,
{
    let field = T::MERGE_KEY.expect("record type declares a merge key");
    let value = serde_json::to_value(record).unwrap();
    let serialized = value
        .get(field)
        .unwrap_or_else(|| panic!("field {field:?} missing from serialized record"));
    let expected = serde_json::to_value(record.merge_key()).unwrap();
    assert_eq!(serialized, &expected, "field {field:?} does not hold the merge key");
}

/// Assert that every record in a baseline has a key and keys are unique.
pub(crate) fn assert_unique_keys<T: Record>(records: &[T]) {
    let keys: Vec<T::Key> = records
        .iter()
        .map(|record| record.merge_key().expect("baseline record has a merge key"))
        .collect();
    for (i, key) in keys.iter().enumerate() {
        assert!(!keys[..i].contains(key), "duplicate merge key {key:?}");
    }
}
