use std::fmt::Debug;

use trk_types::VariantText;

/// A value that can absorb an overlay of the same shape.
///
/// All implementations must satisfy these invariants:
/// - Merging an empty overlay (every field absent or empty) is a no-op.
/// - Scalar fields are never overwritten.
/// - Collections only grow; nothing present in `self` is removed.
/// - The overlay is consumed; its values are moved, never cloned.
pub trait Mergeable {
    /// Fold `overlay` into `self`.
    fn merge_from(&mut self, overlay: Self);
}

/// An element of a record list, identified by an optional merge key.
///
/// Record lists upsert by key: an overlay record whose key matches an
/// existing record is merged into it, otherwise it is appended.
pub trait Record: Mergeable {
    /// Type of the key value. Records without a key use `()`.
    type Key: PartialEq + Debug;

    /// Serialized name of the field holding the key, or `None` when the
    /// record type has no key and overlays always append.
    const MERGE_KEY: Option<&'static str>;

    /// Read the key of this record.
    ///
    /// `None` means the record cannot be matched. Such overlay records are
    /// skipped when the primary list is non-empty.
    fn merge_key(&self) -> Option<Self::Key>;
}

impl Mergeable for VariantText {
    fn merge_from(&mut self, overlay: Self) {
        self.append(overlay);
    }
}

impl<T: Mergeable> Mergeable for Option<T> {
    fn merge_from(&mut self, overlay: Self) {
        crate::fields::merge_nested(self, overlay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_text_merge_appends() {
        let mut base = VariantText::new(["Sword"]);
        base.merge_from(VariantText::new(["Cursed Blade"]));
        assert_eq!(base.texts(), vec!["Sword", "Cursed Blade"]);
    }

    #[test]
    fn variant_text_merge_keeps_duplicates() {
        let mut base = VariantText::new(["hi"]);
        base.merge_from(VariantText::new(["hi"]));
        base.merge_from(VariantText::new(["hi"]));
        assert_eq!(base.len(), 3);
    }

    #[test]
    fn variant_text_merge_empty_overlay() {
        let mut base = VariantText::new(["a", "b"]);
        base.merge_from(VariantText::empty());
        assert_eq!(base.texts(), vec!["a", "b"]);
    }

    #[test]
    fn option_merge_assigns_when_absent() {
        let mut base: Option<VariantText> = None;
        base.merge_from(Some(VariantText::new(["x"])));
        assert_eq!(base, Some(VariantText::new(["x"])));
    }

    #[test]
    fn option_merge_recurses_when_present() {
        let mut base = Some(VariantText::new(["x"]));
        base.merge_from(Some(VariantText::new(["y"])));
        base.merge_from(None);
        assert_eq!(base.map(|v| v.len()), Some(2));
    }
}
