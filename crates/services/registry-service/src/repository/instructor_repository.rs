//! Instructor repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use super::entities::instructor::{self, ActiveModel, Entity as InstructorEntity};
use super::map_write_err;
use common::{AppError, AppResult, OptionExt};
use domain::{Instructor, InstructorData, ENTITY_INSTRUCTOR};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Instructor repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait InstructorRepository: Send + Sync {
    /// Find instructor by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Instructor>>;

    /// Find instructor by CPF (bare digits)
    async fn find_by_cpf(&self, cpf: &str) -> AppResult<Option<Instructor>>;

    /// List instructors ordered by ID, optionally filtered by a name fragment
    async fn list(&self, name_filter: Option<String>) -> AppResult<Vec<Instructor>>;

    /// Count all instructors
    async fn count(&self) -> AppResult<u64>;

    /// Insert a validated instructor
    async fn create(&self, data: InstructorData) -> AppResult<Instructor>;

    /// Overwrite every field of an existing instructor
    async fn update(&self, id: i32, data: InstructorData) -> AppResult<Instructor>;

    /// Delete instructor by ID
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// SeaORM-backed implementation of InstructorRepository
pub struct InstructorStore {
    db: DatabaseConnection,
}

impl InstructorStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InstructorRepository for InstructorStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Instructor>> {
        let result = InstructorEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Instructor::from))
    }

    async fn find_by_cpf(&self, cpf: &str) -> AppResult<Option<Instructor>> {
        let result = InstructorEntity::find()
            .filter(instructor::Column::Cpf.eq(cpf))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Instructor::from))
    }

    async fn list(&self, name_filter: Option<String>) -> AppResult<Vec<Instructor>> {
        let models = InstructorEntity::find()
            .order_by_asc(instructor::Column::Id)
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
            .map(Instructor::from)
            .collect())
    }

    async fn count(&self) -> AppResult<u64> {
        InstructorEntity::find()
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }

    async fn create(&self, data: InstructorData) -> AppResult<Instructor> {
        let now = Utc::now();
        let active_model = ActiveModel {
            name: Set(data.name),
            age: Set(data.age),
            cpf: Set(data.cpf.into_string()),
            contact: Set(data.contact.into_string()),
            campus: Set(data.campus),
            title: Set(data.title),
            salary: Set(data.salary),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(map_write_err)?;
        Ok(Instructor::from(model))
    }

    async fn update(&self, id: i32, data: InstructorData) -> AppResult<Instructor> {
        let existing = InstructorEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found(ENTITY_INSTRUCTOR)?;

        let mut active: ActiveModel = existing.into();
        active.name = Set(data.name);
        active.age = Set(data.age);
        active.cpf = Set(data.cpf.into_string());
        active.contact = Set(data.contact.into_string());
        active.campus = Set(data.campus);
        active.title = Set(data.title);
        active.salary = Set(data.salary);
        active.updated_at = Set(Utc::now());

        let model = active.update(&self.db).await.map_err(map_write_err)?;
        Ok(Instructor::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = InstructorEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(ENTITY_INSTRUCTOR));
        }

        Ok(())
    }
}
