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

use self::models::{Author, CreateAuthor, ListQuery, UpdateAuthor};
use self::repository::AuthorRepository;
use self::service::AuthorService;

/// Authors module: CRUD with soft deletion and name search.
pub struct AuthorsModule {
    service: AuthorService,
}

impl AuthorsModule {
    pub fn new(pool: PgPool) -> Self {
        Self {
            service: AuthorService::new(AuthorRepository::new(pool)),
        }
    }
}

#[async_trait]
impl Module for AuthorsModule {
    fn name(&self) -> &'static str {
        "authors"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "authors module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/all", get(list_authors))
            .route("/create", post(create_author))
            .route("/update", put(update_author))
            .route("/delete", delete(delete_author))
            .route("/health", get(health_check))
            .route("/{id}", get(get_author))
            .with_state(self.service.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "/all": {
                    "get": {
                        "summary": "List authors",
                        "tags": ["Authors"],
                        "parameters": [
                            {"name": "page", "in": "query", "schema": {"type": "integer", "default": 1}},
                            {"name": "limit", "in": "query", "schema": {"type": "integer", "default": 10}},
                            {"name": "search", "in": "query", "schema": {"type": "string"}}
                        ],
                        "responses": {
                            "200": {
                                "description": "Paginated authors",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "object",
                                            "properties": {
                                                "message": {"type": "string"},
                                                "data": {
                                                    "type": "array",
                                                    "items": {"$ref": "#/components/schemas/Author"}
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
                        "summary": "Get author by ID",
                        "tags": ["Authors"],
                        "parameters": [
                            {"name": "id", "in": "path", "required": true, "schema": {"type": "integer"}}
                        ],
                        "responses": {
                            "200": {
                                "description": "Author",
                                "content": {
                                    "application/json": {
                                        "schema": {"$ref": "#/components/schemas/Author"}
                                    }
                                }
                            },
                            "404": {
                                "description": "Author not found",
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
                        "summary": "Create an author",
                        "tags": ["Authors"],
                        "responses": {
                            "201": {
                                "description": "Created author",
                                "content": {
                                    "application/json": {
                                        "schema": {"$ref": "#/components/schemas/Author"}
                                    }
                                }
                            },
                            "422": {
                                "description": "Validation error",
                                "content": {
                                    "application/json": {
                                        "schema": {"$ref": "#/components/schemas/ErrorResponse"}
                                    }
                                }
                            }
                        }
                    }
                },
                "/update": {
                    "put": {
                        "summary": "Update an author",
                        "tags": ["Authors"],
                        "responses": {
                            "200": {"description": "Updated author"},
                            "404": {"description": "Author not found"}
                        }
                    }
                },
                "/delete": {
                    "delete": {
                        "summary": "Soft-delete an author",
                        "tags": ["Authors"],
                        "responses": {
                            "200": {"description": "Deleted author with deleted_at set"},
                            "404": {"description": "Author not found"}
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Author": {
                        "type": "object",
                        "properties": {
                            "id": {"type": "integer"},
                            "name": {"type": "string"},
                            "bio": {"type": "string", "nullable": true},
                            "created_at": {"type": "string", "format": "date-time"},
                            "updated_at": {"type": "string", "format": "date-time"},
                            "deleted_at": {"type": "string", "format": "date-time", "nullable": true}
                        },
                        "required": ["id", "name", "created_at", "updated_at"]
                    },
                    "PageMeta": {
                        "type": "object",
                        "properties": {
                            "current_page": {"type": "integer"},
                            "page_size": {"type": "integer"},
                            "total_records": {"type": "integer"},
                            "total_pages": {"type": "integer"},
                            "has_next": {"type": "boolean"},
                            "has_previous": {"type": "boolean"}
                        }
                    }
                }
            }
        }))
    }

    fn migrations(&self) -> Vec<Migration> {
        vec![Migration {
            id: "001_init",
            up: r#"
                CREATE TABLE IF NOT EXISTS authors (
                    id SERIAL PRIMARY KEY,
                    name VARCHAR(255) NOT NULL,
                    bio VARCHAR(1000),
                    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
                    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
                    deleted_at TIMESTAMPTZ
                );
                "#,
        }]
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "authors module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "authors module stopped");
        Ok(())
    }
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "authors module is healthy"
}

async fn list_authors(
    State(service): State<AuthorService>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<Author>>>, AppError> {
    let page = service
        .list(query.page, query.limit, query.search.as_deref())
        .await?;
    Ok(Json(ApiResponse::paginated(
        "Authors retrieved successfully",
        page,
    )))
}

async fn get_author(
    State(service): State<AuthorService>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Author>>, AppError> {
    let author = service.get(id).await?;
    Ok(Json(ApiResponse::with_data(
        "Author retrieved successfully",
        author,
    )))
}

async fn create_author(
    State(service): State<AuthorService>,
    Json(payload): Json<CreateAuthor>,
) -> Result<(StatusCode, Json<ApiResponse<Author>>), AppError> {
    let author = service.create(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_data("Author created successfully", author)),
    ))
}

async fn update_author(
    State(service): State<AuthorService>,
    Json(payload): Json<UpdateAuthor>,
) -> Result<Json<ApiResponse<Author>>, AppError> {
    let author = service.update(payload).await?;
    Ok(Json(ApiResponse::with_data(
        "Author updated successfully",
        author,
    )))
}

async fn delete_author(
    State(service): State<AuthorService>,
    Json(payload): Json<IdPayload>,
) -> Result<Json<ApiResponse<Author>>, AppError> {
    let author = service.soft_delete(payload.id).await?;
    Ok(Json(ApiResponse::with_data(
        "Author deleted successfully",
        author,
    )))
}

/// Create a new instance of the authors module
pub fn create_module(pool: PgPool) -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(AuthorsModule::new(pool))
}
