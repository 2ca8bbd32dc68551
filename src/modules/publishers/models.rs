use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::ServiceError;
use crate::utils::is_blank;

/// Catalog publisher.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Publisher {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Payload for creating a publisher.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePublisher {
    pub name: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl CreatePublisher {
    /// Presence check for required fields.
    pub fn validate(&self) -> Result<(), ServiceError> {
        if is_blank(&self.name) {
            return Err(ServiceError::missing_fields(vec!["name"]));
        }
        Ok(())
    }
}

/// Payload for updating a publisher. Only `id` is service-validated.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePublisher {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Query parameters accepted by the publisher listing endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_name_only() {
        let payload = CreatePublisher {
            name: Some("P".to_string()),
            address: None,
            description: None,
            phone: None,
            email: None,
        };
        assert!(payload.validate().is_ok());

        let payload = CreatePublisher {
            name: None,
            address: Some("X".to_string()),
            description: None,
            phone: Some("1".to_string()),
            email: None,
        };
        assert!(payload.validate().is_err());
    }
}
