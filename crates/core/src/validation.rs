//! Input validation utilities.
//!
//! Validates configuration values before they are used to match wire identifiers.

use crate::{MappingError, MappingResult};

/// Validates that an identifier root is a dotted numeric OID such as `1.1.23`.
///
/// Classification rules match act identifiers by exact root, so a typo in a configured root would
/// silently disable a flag. This rejects:
/// - empty or whitespace-only strings
/// - roots longer than the HL7 `II.root` limit
/// - anything other than ASCII digits separated by single dots
///
/// # Errors
///
/// Returns `MappingError::Rules` if the root is invalid.
pub fn validate_oid_root(root: &str) -> MappingResult<()> {
    const MAX_ROOT_LEN: usize = 128;

    if root.trim().is_empty() {
        return Err(MappingError::Rules("identifier root cannot be empty".into()));
    }

    if root.len() > MAX_ROOT_LEN {
        return Err(MappingError::Rules(format!(
            "identifier root exceeds maximum length of {} characters",
            MAX_ROOT_LEN
        )));
    }

    let ok = root
        .split('.')
        .all(|arc| !arc.is_empty() && arc.bytes().all(|b| b.is_ascii_digit()));

    if !ok {
        return Err(MappingError::Rules(format!(
            "identifier root {root:?} must be digits separated by single '.'"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_oid_root_accepts_valid_roots() {
        assert!(validate_oid_root("1.1.23").is_ok());
        assert!(validate_oid_root("2.10.12").is_ok());
        assert!(validate_oid_root("7").is_ok());
    }

    #[test]
    fn test_validate_oid_root_rejects_empty_root() {
        let err = validate_oid_root("  ").expect_err("should reject whitespace");
        assert!(matches!(err, MappingError::Rules(msg) if msg.contains("cannot be empty")));
    }

    #[test]
    fn test_validate_oid_root_rejects_too_long_root() {
        let long_root = "1.".repeat(70) + "1";
        let err = validate_oid_root(&long_root).expect_err("should reject too long");
        assert!(matches!(err, MappingError::Rules(msg) if msg.contains("exceeds maximum length")));
    }

    #[test]
    fn test_validate_oid_root_rejects_malformed_arcs() {
        for root in ["1..7", ".1.7", "1.7.", "1.a.7", "1.1.7 "] {
            let err = validate_oid_root(root).expect_err("should reject malformed root");
            assert!(matches!(err, MappingError::Rules(msg) if msg.contains("digits separated")));
        }
    }
}
