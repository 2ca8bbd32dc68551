use catalog_db::{normalize_page, page_offset, ListFilter, Page, PageMeta};

use crate::error::ServiceError;

use super::models::{Book, BookRow, CreateBook, Genre, UpdateBook};
use super::repository::BookRepository;

/// Orchestrates book operations.
#[derive(Clone)]
pub struct BookService {
    repo: BookRepository,
}

impl BookService {
    pub fn new(repo: BookRepository) -> Self {
        Self { repo }
    }

    /// List active books with optional title search and exact genre filter.
    ///
    /// The two narrowing parameters are independent predicates in one flat
    /// conjunction; the requested limit bounds the select.
    pub async fn list(
        &self,
        page: Option<i64>,
        limit: Option<i64>,
        search: Option<&str>,
        genre: Option<Genre>,
    ) -> Result<Page<Book>, ServiceError> {
        let (page, limit) = normalize_page(page, limit);
        let filter = ListFilter::active("b.deleted_at")
            .search("b.title", search)
            .exact_enum(
                "b.genre",
                "genre_book",
                genre.map(|g| g.as_str().to_string()),
            );

        let total = self.repo.count(&filter).await?;
        let pagination = PageMeta::compute(total, page, limit);
        let data = self
            .repo
            .select_page(&filter, limit, page_offset(page, limit))
            .await?;

        Ok(Page { data, pagination })
    }

    pub async fn get(&self, id: i32) -> Result<Book, ServiceError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound("book"))
    }

    pub async fn create(&self, payload: CreateBook) -> Result<BookRow, ServiceError> {
        payload.validate()?;
        Ok(self.repo.insert(&payload).await?)
    }

    pub async fn update(&self, payload: UpdateBook) -> Result<BookRow, ServiceError> {
        let id = payload
            .id
            .ok_or_else(|| ServiceError::missing_fields(vec!["id"]))?;
        self.repo
            .update(id, &payload)
            .await?
            .ok_or(ServiceError::NotFound("book"))
    }

    pub async fn soft_delete(&self, id: Option<i32>) -> Result<BookRow, ServiceError> {
        let id = id.ok_or_else(|| ServiceError::missing_fields(vec!["id"]))?;
        self.repo
            .soft_delete(id)
            .await?
            .ok_or(ServiceError::NotFound("book"))
    }
}
