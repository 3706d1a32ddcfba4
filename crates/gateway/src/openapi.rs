//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::instructor_handler::InstructorRequest;
use crate::handlers::student_handler::StudentRequest;
use domain::{InstructorResponse, StudentResponse};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::student_handler::list_students,
        crate::handlers::student_handler::create_student,
        crate::handlers::student_handler::get_student,
        crate::handlers::student_handler::get_student_by_cpf,
        crate::handlers::student_handler::update_student,
        crate::handlers::student_handler::delete_student,
        crate::handlers::instructor_handler::list_instructors,
        crate::handlers::instructor_handler::create_instructor,
        crate::handlers::instructor_handler::get_instructor,
        crate::handlers::instructor_handler::get_instructor_by_cpf,
        crate::handlers::instructor_handler::update_instructor,
        crate::handlers::instructor_handler::delete_instructor,
    ),
    components(
        schemas(
            StudentRequest,
            StudentResponse,
            InstructorRequest,
            InstructorResponse,
        )
    ),
    tags(
        (name = "Students", description = "Student registration endpoints"),
        (name = "Instructors", description = "Instructor registration endpoints"),
    )
)]
pub struct ApiDoc;
