//! Student handlers.

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
use domain::{StudentForm, StudentResponse};
use registry_service_lib::service::validate_student;

use super::ListQuery;
use crate::extractors::{form_error, ValidPath, ValidatedJson};
use crate::state::AppState;

/// Student form payload (used for both create and update)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "check_form"))]
pub struct StudentRequest {
    #[schema(example = "Maria Silva")]
    pub name: String,
    #[schema(example = 20)]
    pub age: i32,
    #[schema(example = "529.982.247-25")]
    pub cpf: String,
    #[schema(example = "(48) 99999-1234")]
    pub contact: String,
    #[schema(example = "Computer Science")]
    pub course: String,
    #[schema(example = 3)]
    pub phase: i32,
}

impl From<StudentRequest> for StudentForm {
    fn from(req: StudentRequest) -> Self {
        Self {
            name: req.name,
            age: req.age,
            cpf: req.cpf,
            contact: req.contact,
            course: req.course,
            phase: req.phase,
        }
    }
}

/// Apply the student form rules in field order, reporting the first failure.
fn check_form(req: &StudentRequest) -> Result<(), ValidationError> {
    validate_student(&req.clone().into())
        .map(|_| ())
        .map_err(form_error)
}

/// Create student routes
pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_students).post(create_student))
        .route(
            "/:id",
            get(get_student).put(update_student).delete(delete_student),
        )
        .route("/cpf/:cpf", get(get_student_by_cpf))
}

/// List students
#[utoipa::path(
    get,
    path = "/students",
    tag = "Students",
    params(ListQuery),
    responses(
        (status = 200, description = "Students ordered by ID", body = Vec<StudentResponse>)
    )
)]
pub async fn list_students(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<StudentResponse>>> {
    let students = state.students.list_students(query.name).await?;
    Ok(Json(students.iter().map(StudentResponse::from).collect()))
}

/// Register a student
#[utoipa::path(
    post,
    path = "/students",
    tag = "Students",
    request_body = StudentRequest,
    responses(
        (status = 201, description = "Student registered", body = StudentResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "CPF already registered")
    )
)]
pub async fn create_student(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<StudentRequest>,
) -> AppResult<(StatusCode, Json<StudentResponse>)> {
    let student = state.students.register_student(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(StudentResponse::from(student))))
}

/// Get student by ID
#[utoipa::path(
    get,
    path = "/students/{id}",
    tag = "Students",
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student record", body = StudentResponse),
        (status = 404, description = "Student not found")
    )
)]
pub async fn get_student(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
) -> AppResult<Json<StudentResponse>> {
    let student = state.students.get_student(id).await?;
    Ok(Json(StudentResponse::from(student)))
}

/// Get student by CPF
#[utoipa::path(
    get,
    path = "/students/cpf/{cpf}",
    tag = "Students",
    params(("cpf" = String, Path, description = "CPF, formatted or bare digits")),
    responses(
        (status = 200, description = "Student record", body = StudentResponse),
        (status = 400, description = "Invalid CPF"),
        (status = 404, description = "Student not found")
    )
)]
pub async fn get_student_by_cpf(
    State(state): State<AppState>,
    ValidPath(cpf): ValidPath<String>,
) -> AppResult<Json<StudentResponse>> {
    let student = state.students.find_student_by_cpf(&cpf).await?;
    Ok(Json(StudentResponse::from(student)))
}

/// Replace a student's fields
#[utoipa::path(
    put,
    path = "/students/{id}",
    tag = "Students",
    params(("id" = i32, Path, description = "Student ID")),
    request_body = StudentRequest,
    responses(
        (status = 200, description = "Student updated", body = StudentResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Student not found"),
        (status = 409, description = "CPF belongs to another student")
    )
)]
pub async fn update_student(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
    ValidatedJson(payload): ValidatedJson<StudentRequest>,
) -> AppResult<Json<StudentResponse>> {
    let student = state.students.update_student(id, payload.into()).await?;
    Ok(Json(StudentResponse::from(student)))
}

/// Delete a student
#[utoipa::path(
    delete,
    path = "/students/{id}",
    tag = "Students",
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 204, description = "Student deleted"),
        (status = 404, description = "Student not found")
    )
)]
pub async fn delete_student(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i32>,
) -> AppResult<StatusCode> {
    state.students.delete_student(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
