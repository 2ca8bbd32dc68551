use catalog_db::{normalize_page, page_offset, ListFilter, Page, PageMeta};

use crate::error::ServiceError;

use super::models::{Author, CreateAuthor, UpdateAuthor};
use super::repository::AuthorRepository;

/// Orchestrates author operations: validation, filtering, pagination, and
/// the single-row lifecycle.
#[derive(Clone)]
pub struct AuthorService {
    repo: AuthorRepository,
}

impl AuthorService {
    pub fn new(repo: AuthorRepository) -> Self {
        Self { repo }
    }

    /// List active authors with optional name search.
    ///
    /// The requested limit bounds the select; count and select run without a
    /// shared snapshot, so totals may drift between the two under writes.
    pub async fn list(
        &self,
        page: Option<i64>,
        limit: Option<i64>,
        search: Option<&str>,
    ) -> Result<Page<Author>, ServiceError> {
        let (page, limit) = normalize_page(page, limit);
        let filter = ListFilter::active("deleted_at").search("name", search);

        let total = self.repo.count(&filter).await?;
        let pagination = PageMeta::compute(total, page, limit);
        let data = self
            .repo
            .select_page(&filter, limit, page_offset(page, limit))
            .await?;

        Ok(Page { data, pagination })
    }

    pub async fn get(&self, id: i32) -> Result<Author, ServiceError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound("author"))
    }

    pub async fn create(&self, payload: CreateAuthor) -> Result<Author, ServiceError> {
        payload.validate()?;
        Ok(self.repo.insert(&payload).await?)
    }

    pub async fn update(&self, payload: UpdateAuthor) -> Result<Author, ServiceError> {
        let id = payload
            .id
            .ok_or_else(|| ServiceError::missing_fields(vec!["id"]))?;
        self.repo
            .update(id, &payload)
            .await?
            .ok_or(ServiceError::NotFound("author"))
    }

    pub async fn soft_delete(&self, id: Option<i32>) -> Result<Author, ServiceError> {
        let id = id.ok_or_else(|| ServiceError::missing_fields(vec!["id"]))?;
        self.repo
            .soft_delete(id)
            .await?
            .ok_or(ServiceError::NotFound("author"))
    }
}
