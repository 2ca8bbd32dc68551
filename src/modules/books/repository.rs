use sqlx::PgPool;

use catalog_db::{DbError, ListFilter};

use super::models::{Book, BookRow, CreateBook, UpdateBook};

/// Read selects enrich each row with the referenced author and publisher
/// names. The join conditions exclude soft-deleted references so a dangling
/// reference nulls the name instead of leaking a deleted row's data.
const SELECT_ENRICHED: &str = "SELECT b.*, a.name AS author_name, p.name AS publisher_name \
     FROM books b \
     LEFT JOIN authors a ON a.id = b.author_id AND a.deleted_at IS NULL \
     LEFT JOIN publishers p ON p.id = b.publisher_id AND p.deleted_at IS NULL";

/// Data access for books over the shared connection pool.
#[derive(Clone)]
pub struct BookRepository {
    pool: PgPool,
}

impl BookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Count active books matching the filter. Predicates only touch `b.*`
    /// columns, so the count skips the enrichment joins.
    pub async fn count(&self, filter: &ListFilter) -> Result<i64, DbError> {
        let sql = format!("SELECT COUNT(*) FROM books b {}", filter.where_sql());
        let mut query = sqlx::query_scalar::<_, i64>(&sql);
        for bind in filter.binds() {
            query = query.bind(bind.clone());
        }
        Ok(query.fetch_one(&self.pool).await?)
    }

    /// Fetch one page of active books with enrichment, in storage order.
    pub async fn select_page(
        &self,
        filter: &ListFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Book>, DbError> {
        let sql = format!(
            "{SELECT_ENRICHED} {} LIMIT ${} OFFSET ${}",
            filter.where_sql(),
            filter.next_placeholder(),
            filter.next_placeholder() + 1,
        );
        let mut query = sqlx::query_as::<_, Book>(&sql);
        for bind in filter.binds() {
            query = query.bind(bind.clone());
        }
        Ok(query.bind(limit).bind(offset).fetch_all(&self.pool).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Book>, DbError> {
        let sql = format!("{SELECT_ENRICHED} WHERE b.id = $1 AND b.deleted_at IS NULL");
        Ok(sqlx::query_as::<_, Book>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    /// Insert a book. A nonexistent author or publisher reference surfaces
    /// as a constraint violation from storage.
    pub async fn insert(&self, book: &CreateBook) -> Result<BookRow, DbError> {
        Ok(sqlx::query_as::<_, BookRow>(
            "INSERT INTO books \
             (title, author_id, publisher_id, isbn, price, stock, year, genre, description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *",
        )
        .bind(book.title.as_deref())
        .bind(book.author_id)
        .bind(book.publisher_id)
        .bind(book.isbn.as_deref())
        .bind(book.price.as_deref())
        .bind(book.stock.as_deref())
        .bind(book.year)
        .bind(book.genre)
        .bind(book.description.as_deref())
        .fetch_one(&self.pool)
        .await?)
    }

    /// Update an active book; `None` means no such active row.
    pub async fn update(&self, id: i32, book: &UpdateBook) -> Result<Option<BookRow>, DbError> {
        Ok(sqlx::query_as::<_, BookRow>(
            "UPDATE books SET title = $2, author_id = $3, publisher_id = $4, isbn = $5, \
             price = $6, stock = $7, year = $8, genre = $9, description = $10, \
             updated_at = now() \
             WHERE id = $1 AND deleted_at IS NULL RETURNING *",
        )
        .bind(id)
        .bind(book.title.as_deref())
        .bind(book.author_id)
        .bind(book.publisher_id)
        .bind(book.isbn.as_deref())
        .bind(book.price.as_deref())
        .bind(book.stock.as_deref())
        .bind(book.year)
        .bind(book.genre)
        .bind(book.description.as_deref())
        .fetch_optional(&self.pool)
        .await?)
    }

    /// Stamp `deleted_at` on an active book; `None` means no such active
    /// row.
    pub async fn soft_delete(&self, id: i32) -> Result<Option<BookRow>, DbError> {
        Ok(sqlx::query_as::<_, BookRow>(
            "UPDATE books SET deleted_at = now(), updated_at = now() \
             WHERE id = $1 AND deleted_at IS NULL RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }
}
