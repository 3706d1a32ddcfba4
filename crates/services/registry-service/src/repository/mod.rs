//! Repository layer for data access.
//!
//! One repository per table; every statement is built by SeaORM and bound
//! with parameters.

pub mod entities;
mod instructor_repository;
mod student_repository;

use sea_orm::{DbErr, SqlErr};

use common::AppError;
use domain::FIELD_CPF;

pub use instructor_repository::{InstructorRepository, InstructorStore};
pub use student_repository::{StudentRepository, StudentStore};

#[cfg(any(test, feature = "test-utils"))]
pub use instructor_repository::MockInstructorRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use student_repository::MockStudentRepository;

/// Map a write error, turning unique-index violations into conflicts.
///
/// CPF is the only unique column besides the primary key.
pub(crate) fn map_write_err(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::debug!("Unique constraint violated: {}", detail);
            AppError::conflict(FIELD_CPF)
        }
        _ => AppError::from(err),
    }
}
