//! Type-erased merging for configurations looked up by name.
//!
//! Statically typed merges cannot combine two different shapes. Callers that
//! only know a kind by its name hold `Box<dyn ErasedConfig>` instead, and the
//! shape check moves to run time.

use std::any::{type_name, Any};
use std::fmt;

use serde::Serialize;

use crate::error::{MergeError, MergeResult};
use crate::traits::Mergeable;

/// A mergeable configuration whose concrete type is known only at run time.
///
/// Implemented for every `Mergeable + Serialize + Debug` type.
pub trait ErasedConfig: Any + fmt::Debug + Send {
    /// Fully qualified name of the concrete type.
    fn shape_name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// Merge `overlay` into `self` if both have the same concrete type.
    ///
    /// On mismatch `self` is left untouched.
    fn merge_boxed(&mut self, overlay: Box<dyn ErasedConfig>) -> MergeResult<()>;

    /// Serialize to a JSON value.
    fn to_json(&self) -> serde_json::Result<serde_json::Value>;
}

impl<T> ErasedConfig for T
where
    T: Mergeable + Serialize + fmt::Debug + Send + 'static,
{
    fn shape_name(&self) -> &'static str {
        type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn merge_boxed(&mut self, overlay: Box<dyn ErasedConfig>) -> MergeResult<()> {
        let found = overlay.shape_name();
        let overlay = overlay
            .into_any()
            .downcast::<T>()
            .map_err(|_| MergeError::ShapeMismatch {
                expected: type_name::<T>(),
                found,
            })?;
        self.merge_from(*overlay);
        Ok(())
    }

    fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

impl dyn ErasedConfig {
    /// Borrow the concrete value if it has type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Recover the concrete value if it has type `T`.
    pub fn downcast<T: Any>(self: Box<Self>) -> Result<Box<T>, Box<dyn Any>> {
        self.into_any().downcast::<T>()
    }
}

/// Merge `overlay` into `primary`, checking that both have the same shape.
pub fn merge_erased(primary: &mut dyn ErasedConfig, overlay: Box<dyn ErasedConfig>) -> MergeResult<()> {
    primary.merge_boxed(overlay)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trk_types::VariantText;

    use crate::records::RecordList;
    use crate::traits::Record;

    #[derive(Clone, Debug, PartialEq, Serialize)]
    struct Tag(String);

    impl Mergeable for Tag {
        fn merge_from(&mut self, _overlay: Self) {}
    }

    impl Record for Tag {
        type Key = String;
        const MERGE_KEY: Option<&'static str> = None;

        fn merge_key(&self) -> Option<String> {
            None
        }
    }

    #[test]
    fn same_shape_merges() {
        let mut primary: Box<dyn ErasedConfig> = Box::new(VariantText::new(["a"]));
        merge_erased(primary.as_mut(), Box::new(VariantText::new(["b"]))).unwrap();

        let merged = primary.downcast_ref::<VariantText>().unwrap();
        assert_eq!(merged.texts(), vec!["a", "b"]);
    }

    #[test]
    fn different_shapes_fail_without_mutation() {
        let mut primary: Box<dyn ErasedConfig> = Box::new(VariantText::new(["a"]));
        let overlay: Box<dyn ErasedConfig> = Box::new(RecordList::from(vec![Tag("t".into())]));

        let err = merge_erased(primary.as_mut(), overlay).unwrap_err();

        match err {
            MergeError::ShapeMismatch { expected, found } => {
                assert!(expected.ends_with("VariantText"));
                assert!(found.contains("RecordList"));
            }
        }
        let untouched = primary.downcast_ref::<VariantText>().unwrap();
        assert_eq!(untouched.texts(), vec!["a"]);
    }

    #[test]
    fn to_json_serializes_concrete_value() {
        let value: Box<dyn ErasedConfig> = Box::new(RecordList::from(vec![Tag("t".into())]));
        assert_eq!(value.to_json().unwrap(), serde_json::json!(["t"]));
    }

    #[test]
    fn downcast_recovers_value() {
        let value: Box<dyn ErasedConfig> = Box::new(VariantText::from("x"));
        let concrete = value.downcast::<VariantText>().unwrap();
        assert_eq!(concrete.primary(), Some("x"));
    }
}
