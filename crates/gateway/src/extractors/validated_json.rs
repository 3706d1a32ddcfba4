//! Validated JSON extractor.

use std::borrow::Cow;

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationError, ValidationErrors};

use common::AppError;
use domain::DomainError;

/// Key validator files struct-level (`schema`) errors under.
const FORM_ERRORS: &str = "__all__";

/// JSON extractor that runs the payload's form check before it reaches a handler.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::validation(first_message(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// Wrap a failed form rule as a struct-level validation error.
pub fn form_error(err: DomainError) -> ValidationError {
    let mut error = ValidationError::new("form");
    error.message = Some(Cow::Owned(err.to_string()));
    error
}

/// The form-level message if present, otherwise the alphabetically first field.
fn first_message(errors: &ValidationErrors) -> String {
    let fields = errors.field_errors();
    fields
        .get(FORM_ERRORS)
        .or_else(|| fields.iter().min_by(|a, b| a.0.cmp(b.0)).map(|(_, v)| v))
        .and_then(|errors| errors.first())
        .and_then(|error| error.message.as_ref())
        .map(|msg| msg.to_string())
        .unwrap_or_else(|| "Validation failed".to_string())
}
