//! Student service - validates student forms and delegates to the repository.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{
    rules, Cpf, DomainResult, Student, StudentData, StudentForm, ENTITY_STUDENT, FIELD_CPF,
    STUDENT_MAX_AGE, STUDENT_MIN_AGE,
};

use crate::repository::StudentRepository;

/// Student service trait for dependency injection.
#[async_trait]
pub trait StudentService: Send + Sync {
    /// Validate and insert a new student
    async fn register_student(&self, form: StudentForm) -> AppResult<Student>;

    /// Validate and overwrite an existing student
    async fn update_student(&self, id: i32, form: StudentForm) -> AppResult<Student>;

    /// Delete student by ID
    async fn delete_student(&self, id: i32) -> AppResult<()>;

    /// Get student by ID
    async fn get_student(&self, id: i32) -> AppResult<Student>;

    /// Get student by CPF, accepting any common CPF formatting
    async fn find_student_by_cpf(&self, cpf: &str) -> AppResult<Student>;

    /// List students, optionally filtered by a name fragment
    async fn list_students(&self, name_filter: Option<String>) -> AppResult<Vec<Student>>;

    /// Count all students
    async fn count_students(&self) -> AppResult<u64>;
}

/// Apply the student field rules in form order, stopping at the first failure.
pub fn validate_student(form: &StudentForm) -> DomainResult<StudentData> {
    Ok(StudentData {
        name: rules::name(&form.name)?,
        age: rules::age(form.age, STUDENT_MIN_AGE, STUDENT_MAX_AGE)?,
        cpf: rules::cpf(&form.cpf)?,
        contact: rules::contact(&form.contact)?,
        course: rules::text_field("Course", &form.course)?,
        phase: rules::phase(form.phase)?,
    })
}

/// Concrete implementation of StudentService using repository.
pub struct StudentManager {
    repo: Arc<dyn StudentRepository>,
}

impl StudentManager {
    /// Create new student service instance with repository
    pub fn new(repo: Arc<dyn StudentRepository>) -> Self {
        Self { repo }
    }

    fn validate(form: &StudentForm) -> AppResult<StudentData> {
        validate_student(form).map_err(|e| {
            tracing::debug!(error = %e, "Student form rejected");
            AppError::from(e)
        })
    }

    /// Reject a CPF already held by another student.
    async fn ensure_cpf_available(&self, cpf: &Cpf, current_id: Option<i32>) -> AppResult<()> {
        if let Some(existing) = self.repo.find_by_cpf(cpf.as_str()).await? {
            if Some(existing.id) != current_id {
                tracing::debug!(cpf = %cpf, existing_id = existing.id, "Duplicate student CPF");
                return Err(AppError::conflict(FIELD_CPF));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl StudentService for StudentManager {
    async fn register_student(&self, form: StudentForm) -> AppResult<Student> {
        let data = Self::validate(&form)?;
        self.ensure_cpf_available(&data.cpf, None).await?;

        let student = self.repo.create(data).await?;
        tracing::info!(id = student.id, "Student registered");
        Ok(student)
    }

    async fn update_student(&self, id: i32, form: StudentForm) -> AppResult<Student> {
        self.get_student(id).await?;

        let data = Self::validate(&form)?;
        self.ensure_cpf_available(&data.cpf, Some(id)).await?;

        let student = self.repo.update(id, data).await?;
        tracing::info!(id, "Student updated");
        Ok(student)
    }

    async fn delete_student(&self, id: i32) -> AppResult<()> {
        self.repo.delete(id).await?;
        tracing::info!(id, "Student deleted");
        Ok(())
    }

    async fn get_student(&self, id: i32) -> AppResult<Student> {
        self.repo.find_by_id(id).await?.ok_or_not_found(ENTITY_STUDENT)
    }

    async fn find_student_by_cpf(&self, cpf: &str) -> AppResult<Student> {
        let cpf = Cpf::parse(cpf)?;
        self.repo
            .find_by_cpf(cpf.as_str())
            .await?
            .ok_or_not_found(ENTITY_STUDENT)
    }

    async fn list_students(&self, name_filter: Option<String>) -> AppResult<Vec<Student>> {
        self.repo.list(name_filter).await
    }

    async fn count_students(&self) -> AppResult<u64> {
        self.repo.count().await
    }
}
