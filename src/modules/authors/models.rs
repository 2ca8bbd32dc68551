use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::ServiceError;
use crate::utils::is_blank;

/// Catalog author. `deleted_at` is set when the row is soft-deleted.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Author {
    pub id: i32,
    pub name: String,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Payload for creating an author.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAuthor {
    pub name: Option<String>,
    pub bio: Option<String>,
}

impl CreateAuthor {
    /// Presence check for required fields.
    pub fn validate(&self) -> Result<(), ServiceError> {
        if is_blank(&self.name) {
            return Err(ServiceError::missing_fields(vec!["name"]));
        }
        Ok(())
    }
}

/// Payload for updating an author. Only `id` is service-validated; the
/// remaining fields are forwarded to storage as supplied.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAuthor {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub bio: Option<String>,
}

/// Query parameters accepted by the author listing endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
}
