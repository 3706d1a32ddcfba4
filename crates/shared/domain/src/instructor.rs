//! Instructor domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::contact::Contact;
use crate::cpf::Cpf;

/// Instructor domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instructor {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub cpf: Cpf,
    pub contact: Contact,
    pub campus: String,
    /// Academic title, e.g. "Master" or "Doctor"
    pub title: String,
    /// Monthly salary
    pub salary: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw instructor form submission, exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstructorForm {
    pub name: String,
    pub age: i32,
    pub cpf: String,
    pub contact: String,
    pub campus: String,
    pub title: String,
    pub salary: f64,
}

impl From<&Instructor> for InstructorForm {
    fn from(instructor: &Instructor) -> Self {
        Self {
            name: instructor.name.clone(),
            age: instructor.age,
            cpf: instructor.cpf.as_str().to_string(),
            contact: instructor.contact.as_str().to_string(),
            campus: instructor.campus.clone(),
            title: instructor.title.clone(),
            salary: instructor.salary,
        }
    }
}

/// Validated and cleaned instructor fields, ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct InstructorData {
    pub name: String,
    pub age: i32,
    pub cpf: Cpf,
    pub contact: Contact,
    pub campus: String,
    pub title: String,
    pub salary: f64,
}

/// Instructor response (formatted for display)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct InstructorResponse {
    pub id: i32,
    pub name: String,
    pub age: i32,
    /// CPF as `000.000.000-00`
    pub cpf: String,
    /// Phone as `(00) 00000-0000`
    pub contact: String,
    pub campus: String,
    pub title: String,
    pub salary: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Instructor> for InstructorResponse {
    fn from(instructor: &Instructor) -> Self {
        Self {
            id: instructor.id,
            name: instructor.name.clone(),
            age: instructor.age,
            cpf: instructor.cpf.formatted(),
            contact: instructor.contact.formatted(),
            campus: instructor.campus.clone(),
            title: instructor.title.clone(),
            salary: instructor.salary,
            created_at: instructor.created_at,
            updated_at: instructor.updated_at,
        }
    }
}

impl From<Instructor> for InstructorResponse {
    fn from(instructor: Instructor) -> Self {
        InstructorResponse::from(&instructor)
    }
}
