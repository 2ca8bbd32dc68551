//! Service-level error taxonomy.
//!
//! Services fail with one of four kinds; the HTTP layer alone decides how a
//! kind becomes a response. Nothing here is retried.

use serde_json::json;
use thiserror::Error;

use catalog_db::DbError;
use catalog_http::error::AppError;

/// Failures surfaced by the resource services.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Missing or malformed required input.
    #[error("{message}")]
    Validation {
        fields: Vec<&'static str>,
        message: String,
    },

    /// The targeted id has no matching active row.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Storage-level referential or uniqueness violation.
    #[error("constraint violation: {0}")]
    Constraint(String),

    /// Any other failure; surfaced generically.
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl ServiceError {
    /// Validation failure naming every missing required field.
    pub fn missing_fields(fields: Vec<&'static str>) -> Self {
        let message = format!("missing required fields: {}", fields.join(", "));
        Self::Validation { fields, message }
    }
}

impl From<DbError> for ServiceError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Constraint(detail) => Self::Constraint(detail),
            DbError::Unexpected(err) => Self::Unexpected(anyhow::Error::new(err)),
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation { fields, message } => AppError::validation(
                fields
                    .iter()
                    .map(|field| json!({"field": field, "error": "required"}))
                    .collect(),
                message,
            ),
            ServiceError::NotFound(resource) => {
                AppError::not_found(format!("{resource} not found"))
            }
            ServiceError::Constraint(detail) => AppError::conflict(
                vec![json!({"error": detail})],
                "request conflicts with existing catalog state",
            ),
            ServiceError::Unexpected(err) => AppError::Internal(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn missing_fields_lists_every_field() {
        let err = ServiceError::missing_fields(vec!["title", "isbn"]);
        match &err {
            ServiceError::Validation { fields, message } => {
                assert_eq!(fields, &vec!["title", "isbn"]);
                assert_eq!(message, "missing required fields: title, isbn");
            }
            _ => panic!("expected Validation"),
        }
    }

    #[test]
    fn validation_maps_to_unprocessable_entity() {
        let response =
            AppError::from(ServiceError::missing_fields(vec!["name"])).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = AppError::from(ServiceError::NotFound("author")).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn constraint_maps_to_conflict() {
        let err = ServiceError::Constraint("books_author_id_fkey".to_string());
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn unexpected_maps_to_500() {
        let err = ServiceError::Unexpected(anyhow::anyhow!("pool exhausted"));
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
