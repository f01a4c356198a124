//! Comprehensive unit tests for the Identifiers module
//!
//! Tests cover policy number parsing, prefix handling, conversion,
//! and serde behaviour.

use core_kernel::{IdentifierError, PolicyNumber};

mod parsing {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let id = PolicyNumber::parse("TC123ABC45").unwrap();
        assert_eq!(id.as_str(), "TC123ABC45");
        assert_eq!(id.to_string(), "TC123ABC45");
    }

    #[test]
    fn test_minimum_length() {
        assert!(PolicyNumber::parse("TC12").is_ok());
        assert_eq!(
            PolicyNumber::parse("TC1"),
            Err(IdentifierError::TooShort { actual: 3, minimum: 4 })
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(PolicyNumber::parse(""), Err(IdentifierError::Empty));
    }

    #[test]
    fn test_non_ascii_rejected() {
        assert_eq!(
            PolicyNumber::parse("TC12é45"),
            Err(IdentifierError::InvalidCharacter('é'))
        );
    }

    #[test]
    fn test_from_str() {
        let id: PolicyNumber = "AB9999".parse().unwrap();
        assert_eq!(id.serial(), "9999");
    }
}

mod prefix {
    use super::*;

    #[test]
    fn test_alphabetic_prefix() {
        let id = PolicyNumber::parse("TC123ABC45").unwrap();
        assert_eq!(id.prefix(), "TC");
        assert!(id.has_alphabetic_prefix());
    }

    #[test]
    fn test_numeric_prefix_is_still_stripped() {
        let id = PolicyNumber::parse("12123ABC45").unwrap();
        assert_eq!(id.prefix(), "12");
        assert_eq!(id.serial(), "123ABC45");
        assert!(!id.has_alphabetic_prefix());
    }
}

mod serde_tests {
    use super::*;

    #[test]
    fn test_serializes_as_string() {
        let id = PolicyNumber::parse("TC123ABC45").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"TC123ABC45\"");
    }

    #[test]
    fn test_deserialize_validates() {
        assert!(serde_json::from_str::<PolicyNumber>("\"TC123ABC45\"").is_ok());
        assert!(serde_json::from_str::<PolicyNumber>("\"TC-1\"").is_err());
    }
}
