//! Storage error classification.

use thiserror::Error;

/// Failures reported by the storage layer.
///
/// Constraint violations (referential, uniqueness, not-null, check) are
/// client-caused and separated from everything else; callers map them to a
/// client-class outcome without inspecting sub-causes.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("constraint violation: {0}")]
    Constraint(String),

    #[error("database error: {0}")]
    Unexpected(sqlx::Error),
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            use sqlx::error::ErrorKind;
            match db_err.kind() {
                ErrorKind::ForeignKeyViolation
                | ErrorKind::UniqueViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => {
                    return Self::Constraint(db_err.message().to_string());
                }
                _ => {}
            }
        }
        Self::Unexpected(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_are_unexpected() {
        let err = DbError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, DbError::Unexpected(_)));
    }
}
