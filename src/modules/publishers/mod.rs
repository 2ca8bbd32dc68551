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

use self::models::{CreatePublisher, ListQuery, Publisher, UpdatePublisher};
use self::repository::PublisherRepository;
use self::service::PublisherService;

/// Publishers module: CRUD with soft deletion and name search.
pub struct PublishersModule {
    service: PublisherService,
}

impl PublishersModule {
    pub fn new(pool: PgPool) -> Self {
        Self {
            service: PublisherService::new(PublisherRepository::new(pool)),
        }
    }
}

#[async_trait]
impl Module for PublishersModule {
    fn name(&self) -> &'static str {
        "publishers"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "publishers module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/all", get(list_publishers))
            .route("/create", post(create_publisher))
            .route("/update", put(update_publisher))
            .route("/delete", delete(delete_publisher))
            .route("/health", get(health_check))
            .route("/{id}", get(get_publisher))
            .with_state(self.service.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "/all": {
                    "get": {
                        "summary": "List publishers",
                        "tags": ["Publishers"],
                        "parameters": [
                            {"name": "page", "in": "query", "schema": {"type": "integer", "default": 1}},
                            {"name": "limit", "in": "query", "schema": {"type": "integer", "default": 10}},
                            {"name": "search", "in": "query", "schema": {"type": "string"}}
                        ],
                        "responses": {
                            "200": {"description": "Paginated publishers"}
                        }
                    }
                },
                "/{id}": {
                    "get": {
                        "summary": "Get publisher by ID",
                        "tags": ["Publishers"],
                        "parameters": [
                            {"name": "id", "in": "path", "required": true, "schema": {"type": "integer"}}
                        ],
                        "responses": {
                            "200": {"description": "Publisher"},
                            "404": {
                                "description": "Publisher not found",
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
                        "summary": "Create a publisher",
                        "tags": ["Publishers"],
                        "responses": {
                            "201": {"description": "Created publisher"},
                            "422": {"description": "Validation error"}
                        }
                    }
                },
                "/update": {
                    "put": {
                        "summary": "Update a publisher",
                        "tags": ["Publishers"],
                        "responses": {
                            "200": {"description": "Updated publisher"},
                            "404": {"description": "Publisher not found"}
                        }
                    }
                },
                "/delete": {
                    "delete": {
                        "summary": "Soft-delete a publisher",
                        "tags": ["Publishers"],
                        "responses": {
                            "200": {"description": "Deleted publisher with deleted_at set"},
                            "404": {"description": "Publisher not found"}
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Publisher": {
                        "type": "object",
                        "properties": {
                            "id": {"type": "integer"},
                            "name": {"type": "string"},
                            "address": {"type": "string", "nullable": true},
                            "description": {"type": "string", "nullable": true},
                            "phone": {"type": "string", "nullable": true},
                            "email": {"type": "string", "nullable": true},
                            "created_at": {"type": "string", "format": "date-time"},
                            "updated_at": {"type": "string", "format": "date-time"},
                            "deleted_at": {"type": "string", "format": "date-time", "nullable": true}
                        },
                        "required": ["id", "name", "created_at", "updated_at"]
                    }
                }
            }
        }))
    }

    fn migrations(&self) -> Vec<Migration> {
        vec![Migration {
            id: "001_init",
            up: r#"
                CREATE TABLE IF NOT EXISTS publishers (
                    id SERIAL PRIMARY KEY,
                    name VARCHAR(255) NOT NULL,
                    address VARCHAR(500),
                    description VARCHAR(500),
                    phone VARCHAR(20),
                    email VARCHAR(255),
                    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
                    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
                    deleted_at TIMESTAMPTZ
                );
                "#,
        }]
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "publishers module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "publishers module stopped");
        Ok(())
    }
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "publishers module is healthy"
}

async fn list_publishers(
    State(service): State<PublisherService>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<Publisher>>>, AppError> {
    let page = service
        .list(query.page, query.limit, query.search.as_deref())
        .await?;
    Ok(Json(ApiResponse::paginated(
        "Publishers retrieved successfully",
        page,
    )))
}

async fn get_publisher(
    State(service): State<PublisherService>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Publisher>>, AppError> {
    let publisher = service.get(id).await?;
    Ok(Json(ApiResponse::with_data(
        "Publisher retrieved successfully",
        publisher,
    )))
}

async fn create_publisher(
    State(service): State<PublisherService>,
    Json(payload): Json<CreatePublisher>,
) -> Result<(StatusCode, Json<ApiResponse<Publisher>>), AppError> {
    let publisher = service.create(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_data(
            "Publisher created successfully",
            publisher,
        )),
    ))
}

async fn update_publisher(
    State(service): State<PublisherService>,
    Json(payload): Json<UpdatePublisher>,
) -> Result<Json<ApiResponse<Publisher>>, AppError> {
    let publisher = service.update(payload).await?;
    Ok(Json(ApiResponse::with_data(
        "Publisher updated successfully",
        publisher,
    )))
}

async fn delete_publisher(
    State(service): State<PublisherService>,
    Json(payload): Json<IdPayload>,
) -> Result<Json<ApiResponse<Publisher>>, AppError> {
    let publisher = service.soft_delete(payload.id).await?;
    Ok(Json(ApiResponse::with_data(
        "Publisher deleted successfully",
        publisher,
    )))
}

/// Create a new instance of the publishers module
pub fn create_module(pool: PgPool) -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(PublishersModule::new(pool))
}
