pub mod models;
pub mod repository;
pub mod service;

use async_trait::async_trait;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::json;
use sqlx::PgPool;

use catalog_http::error::AppError;
use catalog_kernel::{InitCtx, Migration, Module};

use crate::utils::{ApiResponse, IdPayload};

use self::models::{Book, BookRow, CreateBook, ListQuery, UpdateBook};
use self::repository::BookRepository;
use self::service::BookService;

/// Books module: CRUD with soft deletion, title search, genre filter, and
/// author/publisher name enrichment.
pub struct BooksModule {
    service: BookService,
}

impl BooksModule {
    pub fn new(pool: PgPool) -> Self {
        Self {
            service: BookService::new(BookRepository::new(pool)),
        }
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/all", get(list_books))
            .route("/create", post(create_book))
            .route("/update", put(update_book))
            .route("/delete", delete(delete_book))
            .route("/health", get(health_check))
            .route("/{id}", get(get_book))
            .with_state(self.service.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "/all": {
                    "get": {
                        "summary": "List books",
                        "tags": ["Books"],
                        "parameters": [
                            {"name": "page", "in": "query", "schema": {"type": "integer", "default": 1}},
                            {"name": "limit", "in": "query", "schema": {"type": "integer", "default": 10}},
                            {"name": "search", "in": "query", "description": "Substring match on title", "schema": {"type": "string"}},
                            {"name": "genre", "in": "query", "description": "Exact genre filter", "schema": {"$ref": "#/components/schemas/Genre"}}
                        ],
                        "responses": {
                            "200": {
                                "description": "Paginated books with author and publisher names",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "object",
                                            "properties": {
                                                "message": {"type": "string"},
                                                "data": {
                                                    "type": "array",
                                                    "items": {"$ref": "#/components/schemas/Book"}
                                                },
                                                "pagination": {"$ref": "#/components/schemas/PageMeta"}
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                "/{id}": {
                    "get": {
                        "summary": "Get book by ID",
                        "tags": ["Books"],
                        "parameters": [
                            {"name": "id", "in": "path", "required": true, "schema": {"type": "integer"}}
                        ],
                        "responses": {
                            "200": {
                                "description": "Book with author and publisher names",
                                "content": {
                                    "application/json": {
                                        "schema": {"$ref": "#/components/schemas/Book"}
                                    }
                                }
                            },
                            "404": {
                                "description": "Book not found",
                                "content": {
                                    "application/json": {
                                        "schema": {"$ref": "#/components/schemas/ErrorResponse"}
                                    }
                                }
                            }
                        }
                    }
                },
                "/create": {
                    "post": {
                        "summary": "Create a book",
                        "tags": ["Books"],
                        "responses": {
                            "201": {"description": "Created book"},
                            "409": {"description": "Referenced author or publisher does not exist"},
                            "422": {"description": "Validation error"}
                        }
                    }
                },
                "/update": {
                    "put": {
                        "summary": "Update a book",
                        "tags": ["Books"],
                        "responses": {
                            "200": {"description": "Updated book"},
                            "404": {"description": "Book not found"}
                        }
                    }
                },
                "/delete": {
                    "delete": {
                        "summary": "Soft-delete a book",
                        "tags": ["Books"],
                        "responses": {
                            "200": {"description": "Deleted book with deleted_at set"},
                            "404": {"description": "Book not found"}
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Book": {
                        "type": "object",
                        "properties": {
                            "id": {"type": "integer"},
                            "title": {"type": "string"},
                            "author_id": {"type": "integer"},
                            "publisher_id": {"type": "integer"},
                            "isbn": {"type": "string"},
                            "price": {"type": "string"},
                            "stock": {"type": "string"},
                            "year": {"type": "integer"},
                            "genre": {"$ref": "#/components/schemas/Genre"},
                            "description": {"type": "string", "nullable": true},
                            "created_at": {"type": "string", "format": "date-time"},
                            "updated_at": {"type": "string", "format": "date-time"},
                            "deleted_at": {"type": "string", "format": "date-time", "nullable": true},
                            "author_name": {"type": "string", "nullable": true},
                            "publisher_name": {"type": "string", "nullable": true}
                        },
                        "required": ["id", "title", "author_id", "publisher_id", "isbn", "price", "stock", "year", "genre"]
                    },
                    "Genre": {
                        "type": "string",
                        "enum": [
                            "fiction", "non-fiction", "mystery", "fantasy", "science fiction",
                            "biography", "history", "romance", "thriller", "self-help",
                            "children", "young adult", "horror", "poetry", "cookbook",
                            "graphic novel", "travel", "health", "business", "religion",
                            "philosophy", "art", "music", "sports", "technology",
                            "education", "parenting", "home and garden", "crafts and hobbies",
                            "computers", "internet", "science", "mathematics", "engineering",
                            "law", "politics", "social sciences"
                        ]
                    }
                }
            }
        }))
    }

    fn migrations(&self) -> Vec<Migration> {
        vec![
            Migration {
                id: "001_genre_enum",
                up: r#"
                    CREATE TYPE genre_book AS ENUM (
                        'fiction', 'non-fiction', 'mystery', 'fantasy', 'science fiction',
                        'biography', 'history', 'romance', 'thriller', 'self-help',
                        'children', 'young adult', 'horror', 'poetry', 'cookbook',
                        'graphic novel', 'travel', 'health', 'business', 'religion',
                        'philosophy', 'art', 'music', 'sports', 'technology',
                        'education', 'parenting', 'home and garden', 'crafts and hobbies',
                        'computers', 'internet', 'science', 'mathematics', 'engineering',
                        'law', 'politics', 'social sciences'
                    );
                    "#,
            },
            Migration {
                id: "002_books_table",
                up: r#"
                    CREATE TABLE IF NOT EXISTS books (
                        id SERIAL PRIMARY KEY,
                        title VARCHAR(255) NOT NULL,
                        author_id INTEGER NOT NULL REFERENCES authors(id),
                        publisher_id INTEGER NOT NULL REFERENCES publishers(id),
                        isbn VARCHAR(20) NOT NULL,
                        price VARCHAR(20) NOT NULL,
                        stock VARCHAR(10) NOT NULL,
                        year INTEGER NOT NULL,
                        genre genre_book NOT NULL,
                        description TEXT,
                        created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
                        updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
                        deleted_at TIMESTAMPTZ
                    );
                    "#,
            },
        ]
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module stopped");
        Ok(())
    }
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "books module is healthy"
}

async fn list_books(
    State(service): State<BookService>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<Book>>>, AppError> {
    let page = service
        .list(query.page, query.limit, query.search.as_deref(), query.genre)
        .await?;
    Ok(Json(ApiResponse::paginated(
        "Books retrieved successfully",
        page,
    )))
}

async fn get_book(
    State(service): State<BookService>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Book>>, AppError> {
    let book = service.get(id).await?;
    Ok(Json(ApiResponse::with_data(
        "Book retrieved successfully",
        book,
    )))
}

async fn create_book(
    State(service): State<BookService>,
    Json(payload): Json<CreateBook>,
) -> Result<(StatusCode, Json<ApiResponse<BookRow>>), AppError> {
    let book = service.create(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_data("Book created successfully", book)),
    ))
}

async fn update_book(
    State(service): State<BookService>,
    Json(payload): Json<UpdateBook>,
) -> Result<Json<ApiResponse<BookRow>>, AppError> {
    let book = service.update(payload).await?;
    Ok(Json(ApiResponse::with_data(
        "Book updated successfully",
        book,
    )))
}

async fn delete_book(
    State(service): State<BookService>,
    Json(payload): Json<IdPayload>,
) -> Result<Json<ApiResponse<BookRow>>, AppError> {
    let book = service.soft_delete(payload.id).await?;
    Ok(Json(ApiResponse::with_data(
        "Book deleted successfully",
        book,
    )))
}

/// Create a new instance of the books module
pub fn create_module(pool: PgPool) -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(BooksModule::new(pool))
}
