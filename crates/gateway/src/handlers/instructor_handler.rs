//! Instructor handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use common::AppResult;
use domain::{InstructorForm, InstructorResponse};
use registry_service_lib::service::validate_instructor;

use super::ListQuery;
use crate::extractors::{form_error, ValidPath, ValidatedJson};
use crate::state::AppState;

/// Instructor form payload (used for both create and update)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "check_form"))]
pub struct InstructorRequest {
    #[schema(example = "Carlos Pereira")]
    pub name: String,
    #[schema(example = 45)]
    pub age: i32,
    #[schema(example = "111.444.777-35")]
    pub cpf: String,
    #[schema(example = "(48) 3333-1234")]
    pub contact: String,
    #[schema(example = "Pedra Branca")]
    pub campus: String,
    #[schema(example = "Doctor")]
    pub title: String,
    #[schema(example = 8500.0)]
    pub salary: f64,
}

impl From<InstructorRequest> for InstructorForm {
    fn from(req: InstructorRequest) -> Self {
        Self {
            name: req.name,
            age: req.age,
            cpf: req.cpf,
            contact: req.contact,
            campus: req.campus,
            title: req.title,
            salary: req.salary,
        }
    }
}

/// Apply the instructor form rules in field order, reporting the first failure.
fn check_form(req: &InstructorRequest) -> Result<(), ValidationError> {
    validate_instructor(&req.clone().into())
        .map(|_| ())
        .map_err(form_error)
}

/// Create instructor routes
pub fn instructor_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_instructors).post(create_instructor))
        .route(
            "/:id",
            get(get_instructor)
                .put(update_instructor)
                .delete(delete_instructor),
        )
        .route("/cpf/:cpf", get(get_instructor_by_cpf))
}

/// List instructors
#[utoipa::path(
    get,
    path = "/instructors",
    tag = "Instructors",
    params(ListQuery),
    responses(
        (status = 200, description = "Instructors ordered by ID", body = Vec<InstructorResponse>)
    )
)]
pub async fn list_instructors(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<InstructorResponse>>> {
    let instructors = state.instructors.list_instructors(query.name).await?;
    Ok(Json(
        instructors.iter().map(InstructorResponse::from).collect(),
    ))
}

/// Register an instructor
#[utoipa::path(
    post,
    path = "/instructors",
    tag = "Instructors",
    request_body = InstructorRequest,
    responses(
        (status = 201, description = "Instructor registered", body = InstructorResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "CPF already registered")
    )
)]
pub async fn create_instructor(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<InstructorRequest>,
) -> AppResult<(StatusCode, Json<InstructorResponse>)> {
    let instructor = state.instructors.register_instructor(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(InstructorResponse::from(instructor))))
}

/// Get instructor by ID
#[utoipa::path(
    get,
    path = "/instructors/{id}",
    tag = "Instructors",
    params(("id" = i32, Path, description = "Instructor ID")),
    responses(
        (status = 200, description = "Instructor record", body = InstructorResponse),
        (status = 404, description = "Instructor not found")
    )
)]
pub async fn get_instructor(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
) -> AppResult<Json<InstructorResponse>> {
    let instructor = state.instructors.get_instructor(id).await?;
    Ok(Json(InstructorResponse::from(instructor)))
}

/// Get instructor by CPF
#[utoipa::path(
    get,
    path = "/instructors/cpf/{cpf}",
    tag = "Instructors",
    params(("cpf" = String, Path, description = "CPF, formatted or bare digits")),
    responses(
        (status = 200, description = "Instructor record", body = InstructorResponse),
        (status = 400, description = "Invalid CPF"),
        (status = 404, description = "Instructor not found")
    )
)]
pub async fn get_instructor_by_cpf(
    State(state): State<AppState>,
    ValidPath(cpf): ValidPath<String>,
) -> AppResult<Json<InstructorResponse>> {
    let instructor = state.instructors.find_instructor_by_cpf(&cpf).await?;
    Ok(Json(InstructorResponse::from(instructor)))
}

/// Replace an instructor's fields
#[utoipa::path(
    put,
    path = "/instructors/{id}",
    tag = "Instructors",
    params(("id" = i32, Path, description = "Instructor ID")),
    request_body = InstructorRequest,
    responses(
        (status = 200, description = "Instructor updated", body = InstructorResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Instructor not found"),
        (status = 409, description = "CPF belongs to another instructor")
    )
)]
pub async fn update_instructor(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
    ValidatedJson(payload): ValidatedJson<InstructorRequest>,
) -> AppResult<Json<InstructorResponse>> {
    let instructor = state
        .instructors
        .update_instructor(id, payload.into())
        .await?;
    Ok(Json(InstructorResponse::from(instructor)))
}

/// Delete an instructor
#[utoipa::path(
    delete,
    path = "/instructors/{id}",
    tag = "Instructors",
    params(("id" = i32, Path, description = "Instructor ID")),
    responses(
        (status = 204, description = "Instructor deleted"),
        (status = 404, description = "Instructor not found")
    )
)]
pub async fn delete_instructor(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
) -> AppResult<StatusCode> {
    state.instructors.delete_instructor(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
