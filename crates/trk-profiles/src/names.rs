//! Profile and mood name validation.
//!
//! Both names end up inside filesystem paths, so they must be a single,
//! visible path segment:
//! - Must be non-empty
//! - Must not contain `/` or `\`
//! - Must not contain `..`
//! - Must not contain control characters
//! - Must not start with `.`
//!
//! Mood names additionally must not contain `.`, since the mood is the
//! middle segment of `<stem>.<mood>.<ext>`.

use crate::error::{ProfileError, ProfileResult};

/// Check the rules shared by profile and mood names, returning the reason
/// for the first violation.
fn segment_violation(name: &str) -> Option<String> {
    if name.is_empty() {
        return Some("must not be empty".into());
    }
    if let Some(ch) = name.chars().find(|ch| matches!(ch, '/' | '\\')) {
        return Some(format!("contains path separator: {ch:?}"));
    }
    if name.contains("..") {
        return Some("must not contain '..'".into());
    }
    if let Some(ch) = name.chars().find(|ch| ch.is_control()) {
        return Some(format!("contains control character: {ch:?}"));
    }
    if name.starts_with('.') {
        return Some("must not start with '.'".into());
    }
    None
}

/// Validate a profile name, returning `Ok(())` if valid.
///
/// # Examples
///
/// ```
/// use trk_profiles::validate_profile_name;
///
/// assert!(validate_profile_name("Halloween").is_ok());
/// assert!(validate_profile_name("Sassy Tracker v2").is_ok());
/// assert!(validate_profile_name("../etc").is_err());
/// ```
pub fn validate_profile_name(name: &str) -> ProfileResult<()> {
    match segment_violation(name) {
        Some(reason) => Err(ProfileError::InvalidProfileName {
            name: name.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

/// Validate a mood name, returning `Ok(())` if valid.
pub fn validate_mood_name(name: &str) -> ProfileResult<()> {
    let reason = segment_violation(name).or_else(|| {
        name.contains('.')
            .then(|| "must not contain '.'".to_string())
    });
    match reason {
        Some(reason) => Err(ProfileError::InvalidMoodName {
            name: name.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_profile_names() {
        assert!(validate_profile_name("Halloween").is_ok());
        assert!(validate_profile_name("my profile").is_ok());
        assert!(validate_profile_name("v1.2").is_ok());
        assert!(validate_profile_name("Ünïcödé").is_ok());
    }

    #[test]
    fn reject_empty_name() {
        assert!(validate_profile_name("").is_err());
    }

    #[test]
    fn reject_separators() {
        assert!(validate_profile_name("a/b").is_err());
        assert!(validate_profile_name("a\\b").is_err());
    }

    #[test]
    fn reject_parent_traversal() {
        assert!(validate_profile_name("..").is_err());
        assert!(validate_profile_name("a..b").is_err());
    }

    #[test]
    fn reject_control_characters() {
        assert!(validate_profile_name("tab\there").is_err());
        assert!(validate_profile_name("nul\0").is_err());
    }

    #[test]
    fn reject_leading_dot() {
        assert!(validate_profile_name(".hidden").is_err());
    }

    #[test]
    fn error_carries_name_and_reason() {
        let err = validate_profile_name("a/b").unwrap_err();
        match err {
            ProfileError::InvalidProfileName { name, reason } => {
                assert_eq!(name, "a/b");
                assert!(reason.contains("separator"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn mood_names() {
        assert!(validate_mood_name("spooky").is_ok());
        assert!(validate_mood_name("very spooky").is_ok());
        assert!(validate_mood_name("a.b").is_err());
        assert!(validate_mood_name("").is_err());
        assert!(matches!(
            validate_mood_name("x/y"),
            Err(ProfileError::InvalidMoodName { .. })
        ));
    }
}
