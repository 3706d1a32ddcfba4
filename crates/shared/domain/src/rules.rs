//! Field-level business rules.
//!
//! Each rule checks one form field and returns the cleaned value, so the
//! services can build a persistable record by chaining them with `?`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{
    MAX_NAME_LENGTH, MAX_PHASE, MAX_SALARY, MAX_TEXT_LENGTH, MIN_NAME_LENGTH, MIN_PHASE,
    MIN_TEXT_LENGTH,
};
use crate::contact::Contact;
use crate::cpf::Cpf;
use crate::error::{DomainError, DomainResult};

/// Letters (any script), spaces, apostrophes, hyphens and dots.
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}][\p{L} .'\-]*$").expect("name pattern is valid"));

/// Trim and collapse runs of whitespace to a single space.
pub fn clean_text(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Reject blank input; return the cleaned text otherwise.
pub fn required(field: &str, value: &str) -> DomainResult<String> {
    let cleaned = clean_text(value);
    if cleaned.is_empty() {
        return Err(DomainError::validation(format!("{} is required", field)));
    }
    Ok(cleaned)
}

/// Person name: required, bounded length, letters only.
pub fn name(value: &str) -> DomainResult<String> {
    let cleaned = required("Name", value)?;
    let length = cleaned.chars().count();

    if length < MIN_NAME_LENGTH {
        return Err(DomainError::validation(format!(
            "Name must be at least {} characters",
            MIN_NAME_LENGTH
        )));
    }
    if length > MAX_NAME_LENGTH {
        return Err(DomainError::validation(format!(
            "Name must be at most {} characters",
            MAX_NAME_LENGTH
        )));
    }
    if !NAME_PATTERN.is_match(&cleaned) {
        return Err(DomainError::validation(
            "Name must contain only letters and spaces",
        ));
    }

    Ok(cleaned)
}

/// Age within inclusive bounds.
pub fn age(value: i32, min: i32, max: i32) -> DomainResult<i32> {
    if value < min || value > max {
        return Err(DomainError::validation(format!(
            "Age must be between {} and {}",
            min, max
        )));
    }
    Ok(value)
}

/// Free-text field such as course, campus or title.
pub fn text_field(field: &str, value: &str) -> DomainResult<String> {
    let cleaned = required(field, value)?;
    let length = cleaned.chars().count();

    if !(MIN_TEXT_LENGTH..=MAX_TEXT_LENGTH).contains(&length) {
        return Err(DomainError::validation(format!(
            "{} must be between {} and {} characters",
            field, MIN_TEXT_LENGTH, MAX_TEXT_LENGTH
        )));
    }

    Ok(cleaned)
}

/// Student phase (semester).
pub fn phase(value: i32) -> DomainResult<i32> {
    if !(MIN_PHASE..=MAX_PHASE).contains(&value) {
        return Err(DomainError::validation(format!(
            "Phase must be between {} and {}",
            MIN_PHASE, MAX_PHASE
        )));
    }
    Ok(value)
}

/// Positive, finite salary below the configured ceiling.
pub fn salary(value: f64) -> DomainResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(DomainError::validation("Salary must be greater than zero"));
    }
    if value > MAX_SALARY {
        return Err(DomainError::validation(format!(
            "Salary must be at most {:.2}",
            MAX_SALARY
        )));
    }
    Ok(value)
}

pub fn cpf(value: &str) -> DomainResult<Cpf> {
    Cpf::parse(value)
}

pub fn contact(value: &str) -> DomainResult<Contact> {
    Contact::parse(value)
}
