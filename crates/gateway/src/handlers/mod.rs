//! HTTP handlers.

pub mod health_handler;
pub mod instructor_handler;
pub mod student_handler;

pub use health_handler::health_routes;
pub use instructor_handler::instructor_routes;
pub use student_handler::student_routes;

use serde::Deserialize;
use utoipa::IntoParams;

/// Query string accepted by the listing endpoints.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Case-insensitive name fragment
    pub name: Option<String>,
}
