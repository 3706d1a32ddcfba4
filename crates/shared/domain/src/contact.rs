//! Contact (phone number) value object.

use serde::{Deserialize, Serialize};

use crate::constants::{CONTACT_MAX_DIGITS, CONTACT_MIN_DIGITS, CONTACT_SEPARATORS};
use crate::error::{DomainError, DomainResult};

/// Phone number with area code, stored as bare digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Contact {
    digits: String,
}

impl Contact {
    /// Clean and validate a phone number such as `(48) 99999-1234`.
    ///
    /// # Errors
    /// Returns a validation error if the value is blank, contains letters,
    /// has a digit count outside 10..=11, or starts with zero.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(DomainError::validation("Contact is required"));
        }

        let mut digits = String::with_capacity(CONTACT_MAX_DIGITS);
        for c in raw.chars() {
            if c.is_ascii_digit() {
                digits.push(c);
            } else if !(c.is_whitespace() || CONTACT_SEPARATORS.contains(&c)) {
                return Err(DomainError::validation("Contact must contain only digits"));
            }
        }

        if !(CONTACT_MIN_DIGITS..=CONTACT_MAX_DIGITS).contains(&digits.len()) {
            return Err(DomainError::validation(format!(
                "Contact must have {} or {} digits including area code",
                CONTACT_MIN_DIGITS, CONTACT_MAX_DIGITS
            )));
        }

        if digits.starts_with('0') {
            return Err(DomainError::validation("Contact area code cannot start with 0"));
        }

        Ok(Self { digits })
    }

    /// Rebuild a contact from digits that were validated before being stored.
    pub fn from_digits(digits: String) -> Self {
        Self { digits }
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    pub fn into_string(self) -> String {
        self.digits
    }

    /// `(48) 99999-1234` for mobiles, `(48) 3333-1234` for landlines.
    pub fn formatted(&self) -> String {
        let d = &self.digits;
        if !d.is_ascii() {
            return d.clone();
        }
        match d.len() {
            CONTACT_MAX_DIGITS => format!("({}) {}-{}", &d[0..2], &d[2..7], &d[7..11]),
            CONTACT_MIN_DIGITS => format!("({}) {}-{}", &d[0..2], &d[2..6], &d[6..10]),
            _ => d.clone(),
        }
    }
}

impl std::fmt::Display for Contact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl TryFrom<String> for Contact {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Contact::parse(&value)
    }
}

impl From<Contact> for String {
    fn from(contact: Contact) -> Self {
        contact.digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile_number() {
        let contact = Contact::parse("(48) 99999-1234").unwrap();
        assert_eq!(contact.as_str(), "48999991234");
        assert_eq!(contact.formatted(), "(48) 99999-1234");
    }

    #[test]
    fn test_landline_number() {
        let contact = Contact::parse("48 3333.1234").unwrap();
        assert_eq!(contact.as_str(), "4833331234");
        assert_eq!(contact.to_string(), "(48) 3333-1234");
    }

    #[test]
    fn test_digit_count_bounds() {
        assert!(Contact::parse("489999912").is_err());
        assert!(Contact::parse("489999912345").is_err());
    }

    #[test]
    fn test_leading_zero_rejected() {
        let err = Contact::parse("04899991234").unwrap_err();
        assert_eq!(
            err,
            DomainError::validation("Contact area code cannot start with 0")
        );
    }

    #[test]
    fn test_letters_rejected() {
        assert!(Contact::parse("48 9999-ABCD").is_err());
    }

    #[test]
    fn test_blank_is_required() {
        let err = Contact::parse("").unwrap_err();
        assert_eq!(err, DomainError::validation("Contact is required"));
    }

    #[test]
    fn test_formatted_leaves_corrupt_stored_value_as_is() {
        let mobile = Contact::from_digits("489999912é".to_string());
        assert_eq!(mobile.formatted(), "489999912é");

        let landline = Contact::from_digits("48333312é".to_string());
        assert_eq!(landline.formatted(), "48333312é");
    }
}
