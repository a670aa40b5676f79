//! Core traits for Pagecraft
//!
//! This module defines the traits implemented across the engine for
//! consistent validation, identification, and naming behavior.

use crate::error::BuilderResult;

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for types that can be validated
///
/// Types implementing this trait can check their internal consistency
/// and return validation errors if the state is invalid.
pub trait Validatable {
    /// Validate the current state of the object
    ///
    /// Returns `Ok(())` if valid, or a `BuilderError` describing the problem.
    fn validate(&self) -> BuilderResult<()>;

    /// Check if the object is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Get all validation errors (for types that can have multiple errors)
    fn validation_errors(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => vec![],
            Err(e) => vec![e.to_string()],
        }
    }
}

// ============================================================================
// Identifiable Trait
// ============================================================================

/// Trait for types that carry a UUID identifier
pub trait Identifiable {
    /// Get the unique identifier
    fn id(&self) -> uuid::Uuid;

    /// Check if this matches another identifier
    fn matches_id(&self, id: uuid::Uuid) -> bool {
        self.id() == id
    }
}

// ============================================================================
// Named Trait
// ============================================================================

/// Trait for types that have a human-readable name
pub trait Named {
    /// Get the name
    fn name(&self) -> &str;

    /// Set the name
    fn set_name(&mut self, name: String);

    /// Check if the name matches (case-insensitive)
    fn name_matches(&self, other: &str) -> bool {
        self.name().eq_ignore_ascii_case(other)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BuilderError;

    struct TestValidatable {
        valid: bool,
    }

    impl Validatable for TestValidatable {
        fn validate(&self) -> BuilderResult<()> {
            if self.valid {
                Ok(())
            } else {
                Err(BuilderError::validation("Invalid state"))
            }
        }
    }

    #[test]
    fn test_validatable_trait() {
        let valid = TestValidatable { valid: true };
        assert!(valid.is_valid());
        assert!(valid.validation_errors().is_empty());

        let invalid = TestValidatable { valid: false };
        assert!(!invalid.is_valid());
        assert_eq!(invalid.validation_errors().len(), 1);
    }

    struct TestNamed {
        name: String,
    }

    impl Named for TestNamed {
        fn name(&self) -> &str {
            &self.name
        }

        fn set_name(&mut self, name: String) {
            self.name = name;
        }
    }

    #[test]
    fn test_named_trait() {
        let mut named = TestNamed {
            name: "Home".to_string(),
        };
        assert!(named.name_matches("home"));
        named.set_name("Pricing".to_string());
        assert_eq!(named.name(), "Pricing");
    }

    struct TestIdentifiable {
        id: uuid::Uuid,
    }

    impl Identifiable for TestIdentifiable {
        fn id(&self) -> uuid::Uuid {
            self.id
        }
    }

    #[test]
    fn test_identifiable_trait() {
        let id = uuid::Uuid::new_v4();
        let item = TestIdentifiable { id };
        assert!(item.matches_id(id));
        assert!(!item.matches_id(uuid::Uuid::new_v4()));
    }
}
