//! Instructor service - validates instructor forms and delegates to the repository.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{
    rules, Cpf, DomainResult, Instructor, InstructorData, InstructorForm, ENTITY_INSTRUCTOR,
    FIELD_CPF, INSTRUCTOR_MAX_AGE, INSTRUCTOR_MIN_AGE,
};

use crate::repository::InstructorRepository;

/// Instructor service trait for dependency injection.
#[async_trait]
pub trait InstructorService: Send + Sync {
    /// Validate and insert a new instructor
    async fn register_instructor(&self, form: InstructorForm) -> AppResult<Instructor>;

    /// Validate and overwrite an existing instructor
    async fn update_instructor(&self, id: i32, form: InstructorForm) -> AppResult<Instructor>;

    /// Delete instructor by ID
    async fn delete_instructor(&self, id: i32) -> AppResult<()>;

    /// Get instructor by ID
    async fn get_instructor(&self, id: i32) -> AppResult<Instructor>;

    /// Get instructor by CPF, accepting any common CPF formatting
    async fn find_instructor_by_cpf(&self, cpf: &str) -> AppResult<Instructor>;

    /// List instructors, optionally filtered by a name fragment
    async fn list_instructors(&self, name_filter: Option<String>) -> AppResult<Vec<Instructor>>;

    /// Count all instructors
    async fn count_instructors(&self) -> AppResult<u64>;
}

/// Apply the instructor field rules in form order, stopping at the first failure.
pub fn validate_instructor(form: &InstructorForm) -> DomainResult<InstructorData> {
    Ok(InstructorData {
        name: rules::name(&form.name)?,
        age: rules::age(form.age, INSTRUCTOR_MIN_AGE, INSTRUCTOR_MAX_AGE)?,
        cpf: rules::cpf(&form.cpf)?,
        contact: rules::contact(&form.contact)?,
        campus: rules::text_field("Campus", &form.campus)?,
        title: rules::text_field("Title", &form.title)?,
        salary: rules::salary(form.salary)?,
    })
}

/// Concrete implementation of InstructorService using repository.
pub struct InstructorManager {
    repo: Arc<dyn InstructorRepository>,
}

impl InstructorManager {
    /// Create new instructor service instance with repository
    pub fn new(repo: Arc<dyn InstructorRepository>) -> Self {
        Self { repo }
    }

    fn validate(form: &InstructorForm) -> AppResult<InstructorData> {
        validate_instructor(form).map_err(|e| {
            tracing::debug!(error = %e, "Instructor form rejected");
            AppError::from(e)
        })
    }

    /// Reject a CPF already held by another instructor.
    async fn ensure_cpf_available(&self, cpf: &Cpf, current_id: Option<i32>) -> AppResult<()> {
        if let Some(existing) = self.repo.find_by_cpf(cpf.as_str()).await? {
            if Some(existing.id) != current_id {
                tracing::debug!(cpf = %cpf, existing_id = existing.id, "Duplicate instructor CPF");
                return Err(AppError::conflict(FIELD_CPF));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl InstructorService for InstructorManager {
    async fn register_instructor(&self, form: InstructorForm) -> AppResult<Instructor> {
        let data = Self::validate(&form)?;
        self.ensure_cpf_available(&data.cpf, None).await?;

        let instructor = self.repo.create(data).await?;
        tracing::info!(id = instructor.id, "Instructor registered");
        Ok(instructor)
    }

    async fn update_instructor(&self, id: i32, form: InstructorForm) -> AppResult<Instructor> {
        self.get_instructor(id).await?;

        let data = Self::validate(&form)?;
        self.ensure_cpf_available(&data.cpf, Some(id)).await?;

        let instructor = self.repo.update(id, data).await?;
        tracing::info!(id, "Instructor updated");
        Ok(instructor)
    }

    async fn delete_instructor(&self, id: i32) -> AppResult<()> {
        self.repo.delete(id).await?;
        tracing::info!(id, "Instructor deleted");
        Ok(())
    }

    async fn get_instructor(&self, id: i32) -> AppResult<Instructor> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_not_found(ENTITY_INSTRUCTOR)
    }

    async fn find_instructor_by_cpf(&self, cpf: &str) -> AppResult<Instructor> {
        let cpf = Cpf::parse(cpf)?;
        self.repo
            .find_by_cpf(cpf.as_str())
            .await?
            .ok_or_not_found(ENTITY_INSTRUCTOR)
    }

    async fn list_instructors(&self, name_filter: Option<String>) -> AppResult<Vec<Instructor>> {
        self.repo.list(name_filter).await
    }

    async fn count_instructors(&self) -> AppResult<u64> {
        self.repo.count().await
    }
}
