//! Student repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use super::entities::student::{self, ActiveModel, Entity as StudentEntity};
use super::map_write_err;
use common::{AppError, AppResult, OptionExt};
use domain::{Student, StudentData, ENTITY_STUDENT};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Student repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Find student by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Student>>;

    /// Find student by CPF (bare digits)
    async fn find_by_cpf(&self, cpf: &str) -> AppResult<Option<Student>>;

    /// List students ordered by ID, optionally filtered by a name fragment
    async fn list(&self, name_filter: Option<String>) -> AppResult<Vec<Student>>;

    /// Count all students
    async fn count(&self) -> AppResult<u64>;

    /// Insert a validated student
    async fn create(&self, data: StudentData) -> AppResult<Student>;

    /// Overwrite every field of an existing student
    async fn update(&self, id: i32, data: StudentData) -> AppResult<Student>;

    /// Delete student by ID
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// SeaORM-backed implementation of StudentRepository
pub struct StudentStore {
    db: DatabaseConnection,
}

impl StudentStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StudentRepository for StudentStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Student>> {
        let result = StudentEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Student::from))
    }

    async fn find_by_cpf(&self, cpf: &str) -> AppResult<Option<Student>> {
        let result = StudentEntity::find()
            .filter(student::Column::Cpf.eq(cpf))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Student::from))
    }

    async fn list(&self, name_filter: Option<String>) -> AppResult<Vec<Student>> {
        let models = StudentEntity::find()
            .order_by_asc(student::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        let fragment = name_filter
            .as_deref()
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_lowercase);

        // SQLite LIKE folds ASCII only and treats % and _ as wildcards
        Ok(models
            .into_iter()
            .filter(|m| match &fragment {
                Some(fragment) => m.name.to_lowercase().contains(fragment.as_str()),
                None => true,
            })
            .map(Student::from)
            .collect())
    }

    async fn count(&self) -> AppResult<u64> {
        StudentEntity::find()
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }

    async fn create(&self, data: StudentData) -> AppResult<Student> {
        let now = Utc::now();
        let active_model = ActiveModel {
            name: Set(data.name),
            age: Set(data.age),
            cpf: Set(data.cpf.into_string()),
            contact: Set(data.contact.into_string()),
            course: Set(data.course),
            phase: Set(data.phase),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(map_write_err)?;
        Ok(Student::from(model))
    }

    async fn update(&self, id: i32, data: StudentData) -> AppResult<Student> {
        let existing = StudentEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found(ENTITY_STUDENT)?;

        let mut active: ActiveModel = existing.into();
        active.name = Set(data.name);
        active.age = Set(data.age);
        active.cpf = Set(data.cpf.into_string());
        active.contact = Set(data.contact.into_string());
        active.course = Set(data.course);
        active.phase = Set(data.phase);
        active.updated_at = Set(Utc::now());

        let model = active.update(&self.db).await.map_err(map_write_err)?;
        Ok(Student::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = StudentEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(ENTITY_STUDENT));
        }

        Ok(())
    }
}
