//! Shared request/response helpers for the catalog endpoints.

use serde::{Deserialize, Serialize};

use catalog_db::{Page, PageMeta};

/// Uniform response envelope: a message plus optional data and pagination.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageMeta>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Envelope carrying a single entity.
    pub fn with_data(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            pagination: None,
        }
    }
}

impl<T: Serialize> ApiResponse<Vec<T>> {
    /// Envelope carrying one page of a listing.
    pub fn paginated(message: impl Into<String>, page: Page<T>) -> Self {
        Self {
            message: message.into(),
            data: Some(page.data),
            pagination: Some(page.pagination),
        }
    }
}

/// Body shape for operations addressed by id (update target, delete).
///
/// The id is an explicit scalar field; handlers never accept a bare body as
/// the identifier.
#[derive(Debug, Clone, Deserialize)]
pub struct IdPayload {
    pub id: Option<i32>,
}

/// True when an optional text field is absent or effectively empty.
pub fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_detection() {
        assert!(is_blank(&None));
        assert!(is_blank(&Some(String::new())));
        assert!(is_blank(&Some("   ".to_string())));
        assert!(!is_blank(&Some("x".to_string())));
    }

    #[test]
    fn envelope_skips_absent_blocks() {
        let body = ApiResponse::with_data("ok", 1);
        let rendered = serde_json::to_value(&body).unwrap();
        assert_eq!(rendered["message"], "ok");
        assert_eq!(rendered["data"], 1);
        assert!(rendered.get("pagination").is_none());
    }

    #[test]
    fn paginated_envelope_carries_both_blocks() {
        let page = Page {
            data: vec![1, 2, 3],
            pagination: PageMeta::compute(3, 1, 10),
        };
        let rendered = serde_json::to_value(ApiResponse::paginated("ok", page)).unwrap();
        assert_eq!(rendered["data"].as_array().unwrap().len(), 3);
        assert_eq!(rendered["pagination"]["total_records"], 3);
        assert_eq!(rendered["pagination"]["total_pages"], 1);
    }
}
