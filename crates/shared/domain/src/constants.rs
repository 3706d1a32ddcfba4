//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Names and free-text fields
// =============================================================================

/// Minimum person name length (characters, after cleaning)
pub const MIN_NAME_LENGTH: usize = 2;

/// Maximum person name length (characters, after cleaning)
pub const MAX_NAME_LENGTH: usize = 100;

/// Minimum length for course, campus and title fields
pub const MIN_TEXT_LENGTH: usize = 2;

/// Maximum length for course, campus and title fields
pub const MAX_TEXT_LENGTH: usize = 100;

// =============================================================================
// Age bounds (inclusive)
// =============================================================================

pub const STUDENT_MIN_AGE: i32 = 1;
pub const STUDENT_MAX_AGE: i32 = 120;

pub const INSTRUCTOR_MIN_AGE: i32 = 18;
pub const INSTRUCTOR_MAX_AGE: i32 = 120;

// =============================================================================
// Student phase (semester) bounds (inclusive)
// =============================================================================

pub const MIN_PHASE: i32 = 1;
pub const MAX_PHASE: i32 = 12;

// =============================================================================
// Instructor salary
// =============================================================================

/// Upper bound for a monthly salary
pub const MAX_SALARY: f64 = 1_000_000.0;

// =============================================================================
// Documents and contact
// =============================================================================

/// Number of digits in a CPF
pub const CPF_LENGTH: usize = 11;

/// Separators accepted (and discarded) when parsing a CPF
pub const CPF_SEPARATORS: &[char] = &['.', '-', '/'];

/// Landline: two-digit area code plus eight digits
pub const CONTACT_MIN_DIGITS: usize = 10;

/// Mobile: two-digit area code plus nine digits
pub const CONTACT_MAX_DIGITS: usize = 11;

/// Formatting characters accepted (and discarded) when parsing a contact
pub const CONTACT_SEPARATORS: &[char] = &['(', ')', '-', '+', '.'];

// =============================================================================
// Record labels (used in error messages)
// =============================================================================

pub const ENTITY_STUDENT: &str = "Student";
pub const ENTITY_INSTRUCTOR: &str = "Instructor";
pub const FIELD_CPF: &str = "CPF";
