//! CPF value object.
//!
//! A CPF is the Brazilian individual taxpayer number: nine base digits followed
//! by two check digits, usually written as `000.000.000-00`.

use serde::{Deserialize, Serialize};

use crate::constants::{CPF_LENGTH, CPF_SEPARATORS, FIELD_CPF};
use crate::error::{DomainError, DomainResult};

/// Validated CPF, stored as its 11 bare digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf {
    digits: String,
}

impl Cpf {
    /// Clean and validate a CPF as typed by a user.
    ///
    /// Dots, dashes, slashes and whitespace are discarded. Anything else that
    /// is not a digit is rejected.
    ///
    /// # Errors
    /// Returns a validation error if the value is blank, has the wrong number
    /// of digits, is a repeated-digit sequence, or fails the check digits.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(DomainError::validation(format!("{} is required", FIELD_CPF)));
        }

        let mut digits = String::with_capacity(CPF_LENGTH);
        for c in raw.chars() {
            if c.is_ascii_digit() {
                digits.push(c);
            } else if !(c.is_whitespace() || CPF_SEPARATORS.contains(&c)) {
                return Err(DomainError::validation(format!(
                    "{} must contain only digits",
                    FIELD_CPF
                )));
            }
        }

        if digits.len() != CPF_LENGTH {
            return Err(DomainError::validation(format!(
                "{} must have exactly {} digits",
                FIELD_CPF, CPF_LENGTH
            )));
        }

        let values: Vec<u32> = digits.bytes().map(|b| u32::from(b - b'0')).collect();

        // 000.000.000-00, 111.111.111-11, ... pass the checksum but are not issued
        if values.iter().all(|&d| d == values[0]) {
            return Err(DomainError::validation(format!("{} is invalid", FIELD_CPF)));
        }

        if check_digit(&values[..9]) != values[9] || check_digit(&values[..10]) != values[10] {
            return Err(DomainError::validation(format!("{} is invalid", FIELD_CPF)));
        }

        Ok(Self { digits })
    }

    /// Rebuild a CPF from digits that were validated before being stored.
    pub fn from_digits(digits: String) -> Self {
        Self { digits }
    }

    /// Bare digits, as persisted.
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Consume and return the bare digits.
    pub fn into_string(self) -> String {
        self.digits
    }

    /// Human-readable `000.000.000-00` rendering.
    pub fn formatted(&self) -> String {
        if self.digits.len() != CPF_LENGTH || !self.digits.is_ascii() {
            return self.digits.clone();
        }
        format!(
            "{}.{}.{}-{}",
            &self.digits[0..3],
            &self.digits[3..6],
            &self.digits[6..9],
            &self.digits[9..11]
        )
    }
}

/// Mod-11 check digit over `digits`, weighted from `len + 1` down to 2.
fn check_digit(digits: &[u32]) -> u32 {
    let top_weight = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| d * (top_weight - i as u32))
        .sum();

    match (sum * 10) % 11 {
        10 => 0,
        rest => rest,
    }
}

impl std::fmt::Display for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl TryFrom<String> for Cpf {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Cpf::parse(&value)
    }
}

impl From<Cpf> for String {
    fn from(cpf: Cpf) -> Self {
        cpf.digits
    }
}
