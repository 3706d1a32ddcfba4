//! Application state for dependency injection.

use std::sync::Arc;

use registry_service_lib::infra::Database;
use registry_service_lib::service::{InstructorService, StudentService};
use registry_service_lib::Registry;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub students: Arc<dyn StudentService>,
    pub instructors: Arc<dyn InstructorService>,
    pub db: Database,
}

impl AppState {
    /// Create new app state from the wired registry.
    pub fn new(registry: &Registry) -> Self {
        Self {
            students: registry.students.clone(),
            instructors: registry.instructors.clone(),
            db: registry.database().clone(),
        }
    }
}
