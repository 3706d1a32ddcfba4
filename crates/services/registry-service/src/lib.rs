//! Registry Service Library
//!
//! Student and instructor management: SQLite persistence through SeaORM,
//! repositories over each table, and services that validate form
//! submissions before anything is written.
//!
//! The same [`Registry`] is shared by the command-line forms and the HTTP
//! gateway.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::info;

use common::{AppResult, DatabaseConfig};

use crate::infra::Database;
use crate::repository::{InstructorStore, StudentStore};
use crate::service::{InstructorManager, InstructorService, StudentManager, StudentService};

/// Wired services over one database connection.
#[derive(Clone)]
pub struct Registry {
    db: Database,
    pub students: Arc<dyn StudentService>,
    pub instructors: Arc<dyn InstructorService>,
}

impl Registry {
    /// Connect, migrate, and wire repositories into services.
    pub async fn open(config: &DatabaseConfig) -> AppResult<Self> {
        let db = Database::connect(config).await?;
        Ok(Self::from_database(db))
    }

    /// Wire services over an already connected database.
    pub fn from_database(db: Database) -> Self {
        let student_repo = Arc::new(StudentStore::new(db.get_connection()));
        let instructor_repo = Arc::new(InstructorStore::new(db.get_connection()));

        Self {
            students: Arc::new(StudentManager::new(student_repo)),
            instructors: Arc::new(InstructorManager::new(instructor_repo)),
            db,
        }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

/// Migration action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Run a migration action and return the resulting status of every migration.
pub async fn run_migrations(
    config: &DatabaseConfig,
    action: MigrateAction,
) -> AppResult<Vec<(String, bool)>> {
    let db = Database::connect_without_migrations(config).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {}
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(db.migration_status().await?)
}
