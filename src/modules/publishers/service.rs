use catalog_db::{normalize_page, page_offset, ListFilter, Page, PageMeta};

use crate::error::ServiceError;

use super::models::{CreatePublisher, Publisher, UpdatePublisher};
use super::repository::PublisherRepository;

/// Orchestrates publisher operations.
#[derive(Clone)]
pub struct PublisherService {
    repo: PublisherRepository,
}

impl PublisherService {
    pub fn new(repo: PublisherRepository) -> Self {
        Self { repo }
    }

    /// List active publishers with optional name search.
    pub async fn list(
        &self,
        page: Option<i64>,
        limit: Option<i64>,
        search: Option<&str>,
    ) -> Result<Page<Publisher>, ServiceError> {
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

    pub async fn get(&self, id: i32) -> Result<Publisher, ServiceError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound("publisher"))
    }

    pub async fn create(&self, payload: CreatePublisher) -> Result<Publisher, ServiceError> {
        payload.validate()?;
        Ok(self.repo.insert(&payload).await?)
    }

    pub async fn update(&self, payload: UpdatePublisher) -> Result<Publisher, ServiceError> {
        let id = payload
            .id
            .ok_or_else(|| ServiceError::missing_fields(vec!["id"]))?;
        self.repo
            .update(id, &payload)
            .await?
            .ok_or(ServiceError::NotFound("publisher"))
    }

    pub async fn soft_delete(&self, id: Option<i32>) -> Result<Publisher, ServiceError> {
        let id = id.ok_or_else(|| ServiceError::missing_fields(vec!["id"]))?;
        self.repo
            .soft_delete(id)
            .await?
            .ok_or(ServiceError::NotFound("publisher"))
    }
}
