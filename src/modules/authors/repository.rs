use sqlx::PgPool;

use catalog_db::{DbError, ListFilter};

use super::models::{Author, CreateAuthor, UpdateAuthor};

/// Data access for authors over the shared connection pool.
#[derive(Clone)]
pub struct AuthorRepository {
    pool: PgPool,
}

impl AuthorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Count active authors matching the filter.
    pub async fn count(&self, filter: &ListFilter) -> Result<i64, DbError> {
        let sql = format!("SELECT COUNT(*) FROM authors {}", filter.where_sql());
        let mut query = sqlx::query_scalar::<_, i64>(&sql);
        for bind in filter.binds() {
            query = query.bind(bind.clone());
        }
        Ok(query.fetch_one(&self.pool).await?)
    }

    /// Fetch one page of active authors, in storage order.
    pub async fn select_page(
        &self,
        filter: &ListFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Author>, DbError> {
        let sql = format!(
            "SELECT * FROM authors {} LIMIT ${} OFFSET ${}",
            filter.where_sql(),
            filter.next_placeholder(),
            filter.next_placeholder() + 1,
        );
        let mut query = sqlx::query_as::<_, Author>(&sql);
        for bind in filter.binds() {
            query = query.bind(bind.clone());
        }
        Ok(query.bind(limit).bind(offset).fetch_all(&self.pool).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Author>, DbError> {
        Ok(sqlx::query_as::<_, Author>(
            "SELECT * FROM authors WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }

    pub async fn insert(&self, author: &CreateAuthor) -> Result<Author, DbError> {
        Ok(sqlx::query_as::<_, Author>(
            "INSERT INTO authors (name, bio) VALUES ($1, $2) RETURNING *",
        )
        .bind(author.name.as_deref())
        .bind(author.bio.as_deref())
        .fetch_one(&self.pool)
        .await?)
    }

    /// Update an active author; `None` means no such active row.
    pub async fn update(&self, id: i32, author: &UpdateAuthor) -> Result<Option<Author>, DbError> {
        Ok(sqlx::query_as::<_, Author>(
            "UPDATE authors SET name = $2, bio = $3, updated_at = now() \
             WHERE id = $1 AND deleted_at IS NULL RETURNING *",
        )
        .bind(id)
        .bind(author.name.as_deref())
        .bind(author.bio.as_deref())
        .fetch_optional(&self.pool)
        .await?)
    }

    /// Stamp `deleted_at` on an active author; `None` means no such active
    /// row (including one already soft-deleted).
    pub async fn soft_delete(&self, id: i32) -> Result<Option<Author>, DbError> {
        Ok(sqlx::query_as::<_, Author>(
            "UPDATE authors SET deleted_at = now(), updated_at = now() \
             WHERE id = $1 AND deleted_at IS NULL RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }
}
