//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the student and instructor records, the CPF and contact value objects, and
//! the field rules applied to form submissions.

pub mod constants;
pub mod contact;
pub mod cpf;
pub mod error;
pub mod instructor;
pub mod rules;
pub mod student;

pub use constants::*;
pub use contact::Contact;
pub use cpf::Cpf;
pub use error::{DomainError, DomainResult};
pub use instructor::{Instructor, InstructorData, InstructorForm, InstructorResponse};
pub use student::{Student, StudentData, StudentForm, StudentResponse};
