use sqlx::PgPool;

use catalog_db::{DbError, ListFilter};

use super::models::{CreatePublisher, Publisher, UpdatePublisher};

/// Data access for publishers over the shared connection pool.
#[derive(Clone)]
pub struct PublisherRepository {
    pool: PgPool,
}

impl PublisherRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Count active publishers matching the filter.
    pub async fn count(&self, filter: &ListFilter) -> Result<i64, DbError> {
        let sql = format!("SELECT COUNT(*) FROM publishers {}", filter.where_sql());
        let mut query = sqlx::query_scalar::<_, i64>(&sql);
        for bind in filter.binds() {
            query = query.bind(bind.clone());
        }
        Ok(query.fetch_one(&self.pool).await?)
    }

    /// Fetch one page of active publishers, in storage order.
    pub async fn select_page(
        &self,
        filter: &ListFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Publisher>, DbError> {
        let sql = format!(
            "SELECT * FROM publishers {} LIMIT ${} OFFSET ${}",
            filter.where_sql(),
            filter.next_placeholder(),
            filter.next_placeholder() + 1,
        );
        let mut query = sqlx::query_as::<_, Publisher>(&sql);
        for bind in filter.binds() {
            query = query.bind(bind.clone());
        }
        Ok(query.bind(limit).bind(offset).fetch_all(&self.pool).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Publisher>, DbError> {
        Ok(sqlx::query_as::<_, Publisher>(
            "SELECT * FROM publishers WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }

    pub async fn insert(&self, publisher: &CreatePublisher) -> Result<Publisher, DbError> {
        Ok(sqlx::query_as::<_, Publisher>(
            "INSERT INTO publishers (name, address, description, phone, email) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(publisher.name.as_deref())
        .bind(publisher.address.as_deref())
        .bind(publisher.description.as_deref())
        .bind(publisher.phone.as_deref())
        .bind(publisher.email.as_deref())
        .fetch_one(&self.pool)
        .await?)
    }

    /// Update an active publisher; `None` means no such active row.
    pub async fn update(
        &self,
        id: i32,
        publisher: &UpdatePublisher,
    ) -> Result<Option<Publisher>, DbError> {
        Ok(sqlx::query_as::<_, Publisher>(
            "UPDATE publishers SET name = $2, address = $3, description = $4, \
             phone = $5, email = $6, updated_at = now() \
             WHERE id = $1 AND deleted_at IS NULL RETURNING *",
        )
        .bind(id)
        .bind(publisher.name.as_deref())
        .bind(publisher.address.as_deref())
        .bind(publisher.description.as_deref())
        .bind(publisher.phone.as_deref())
        .bind(publisher.email.as_deref())
        .fetch_optional(&self.pool)
        .await?)
    }

    /// Stamp `deleted_at` on an active publisher; `None` means no such
    /// active row.
    pub async fn soft_delete(&self, id: i32) -> Result<Option<Publisher>, DbError> {
        Ok(sqlx::query_as::<_, Publisher>(
            "UPDATE publishers SET deleted_at = now(), updated_at = now() \
             WHERE id = $1 AND deleted_at IS NULL RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }
}
