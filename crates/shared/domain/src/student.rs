//! Student domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::contact::Contact;
use crate::cpf::Cpf;

/// Student domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub cpf: Cpf,
    pub contact: Contact,
    pub course: String,
    /// Current semester within the course
    pub phase: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw student form submission, exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentForm {
    pub name: String,
    pub age: i32,
    pub cpf: String,
    pub contact: String,
    pub course: String,
    pub phase: i32,
}

/// Prefill an edit form from the stored record.
impl From<&Student> for StudentForm {
    fn from(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            age: student.age,
            cpf: student.cpf.as_str().to_string(),
            contact: student.contact.as_str().to_string(),
            course: student.course.clone(),
            phase: student.phase,
        }
    }
}

/// Validated and cleaned student fields, ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentData {
    pub name: String,
    pub age: i32,
    pub cpf: Cpf,
    pub contact: Contact,
    pub course: String,
    pub phase: i32,
}

/// Student response (formatted for display)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct StudentResponse {
    pub id: i32,
    pub name: String,
    pub age: i32,
    /// CPF as `000.000.000-00`
    pub cpf: String,
    /// Phone as `(00) 00000-0000`
    pub contact: String,
    pub course: String,
    pub phase: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Student> for StudentResponse {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id,
            name: student.name.clone(),
            age: student.age,
            cpf: student.cpf.formatted(),
            contact: student.contact.formatted(),
            course: student.course.clone(),
            phase: student.phase,
            created_at: student.created_at,
            updated_at: student.updated_at,
        }
    }
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        StudentResponse::from(&student)
    }
}
