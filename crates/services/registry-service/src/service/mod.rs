//! Service layer - validation rules applied before persistence.

mod instructor_service;
mod student_service;

pub use instructor_service::{validate_instructor, InstructorManager, InstructorService};
pub use student_service::{validate_student, StudentManager, StudentService};
