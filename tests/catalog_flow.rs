//! End-to-end catalog flow against a live PostgreSQL instance.
//!
//! These tests exercise the store-dependent contract: soft-delete
//! visibility, referential integrity on book creation, and list enrichment.
//! They are ignored by default; point `CATALOG_TEST_DATABASE_URL` at a
//! disposable database and run `cargo test -- --ignored`.

use sqlx::PgPool;

use catalog_app::error::ServiceError;
use catalog_app::modules::authors::models::CreateAuthor;
use catalog_app::modules::authors::repository::AuthorRepository;
use catalog_app::modules::authors::service::AuthorService;
use catalog_app::modules::books::models::{CreateBook, Genre, UpdateBook};
use catalog_app::modules::books::repository::BookRepository;
use catalog_app::modules::books::service::BookService;
use catalog_app::modules::publishers::models::CreatePublisher;
use catalog_app::modules::publishers::repository::PublisherRepository;
use catalog_app::modules::publishers::service::PublisherService;
use catalog_kernel::ModuleRegistry;

async fn setup() -> (PgPool, AuthorService, PublisherService, BookService) {
    let url = std::env::var("CATALOG_TEST_DATABASE_URL")
        .unwrap_or_else(|_| "postgres://localhost:5432/catalog_test".to_string());
    let pool = PgPool::connect(&url).await.expect("connect test database");

    let mut registry = ModuleRegistry::new();
    catalog_app::register_all(&mut registry, &pool);
    catalog_db::migrate::run(&pool, &registry.collect_migrations())
        .await
        .expect("apply migrations");

    (
        pool.clone(),
        AuthorService::new(AuthorRepository::new(pool.clone())),
        PublisherService::new(PublisherRepository::new(pool.clone())),
        BookService::new(BookRepository::new(pool)),
    )
}

fn create_author_payload(name: &str) -> CreateAuthor {
    CreateAuthor {
        name: Some(name.to_string()),
        bio: Some("writer".to_string()),
    }
}

fn create_publisher_payload(name: &str) -> CreatePublisher {
    CreatePublisher {
        name: Some(name.to_string()),
        address: Some("X".to_string()),
        description: None,
        phone: Some("1".to_string()),
        email: None,
    }
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn create_search_and_enrich() {
    let (_pool, authors, publishers, books) = setup().await;

    let author = authors
        .create(create_author_payload("A. Poe"))
        .await
        .expect("create author");
    let publisher = publishers
        .create(create_publisher_payload("P"))
        .await
        .expect("create publisher");

    // Unique title so the search predicate isolates this test's data.
    let title = format!("T-{}-{}", author.id, publisher.id);
    let book = books
        .create(CreateBook {
            title: Some(title.clone()),
            author_id: Some(author.id),
            publisher_id: Some(publisher.id),
            isbn: Some("123".to_string()),
            price: Some("9.99".to_string()),
            stock: Some("5".to_string()),
            year: Some(2020),
            genre: Some(Genre::Fiction),
            description: None,
        })
        .await
        .expect("create book");
    assert_eq!(book.title, title);

    let page = books
        .list(None, None, Some(title.as_str()), None)
        .await
        .expect("list books");
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.pagination.total_records, 1);
    assert_eq!(page.pagination.total_pages, 1);
    assert!(!page.pagination.has_next);

    let listed = &page.data[0];
    assert_eq!(listed.author_name.as_deref(), Some("A. Poe"));
    assert_eq!(listed.publisher_name.as_deref(), Some("P"));
    assert_eq!(listed.genre, Genre::Fiction);

    // Genre filter composes with the same search.
    let filtered = books
        .list(None, None, Some(title.as_str()), Some(Genre::Fiction))
        .await
        .expect("list with genre filter");
    assert_eq!(filtered.data.len(), 1);

    let none = books
        .list(None, None, Some(title.as_str()), Some(Genre::Poetry))
        .await
        .expect("list with mismatched genre");
    assert!(none.data.is_empty());
    assert_eq!(none.pagination.total_records, 0);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn book_with_unknown_author_is_a_constraint_violation() {
    let (_pool, _authors, publishers, books) = setup().await;

    let publisher = publishers
        .create(create_publisher_payload("Orphan Press"))
        .await
        .expect("create publisher");

    let result = books
        .create(CreateBook {
            title: Some("Orphan".to_string()),
            author_id: Some(i32::MAX),
            publisher_id: Some(publisher.id),
            isbn: Some("000".to_string()),
            price: Some("1.00".to_string()),
            stock: Some("0".to_string()),
            year: Some(2020),
            genre: Some(Genre::Mystery),
            description: None,
        })
        .await;

    assert!(matches!(result, Err(ServiceError::Constraint(_))));
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn soft_delete_is_terminal() {
    let (_pool, authors, _publishers, _books) = setup().await;

    let author = authors
        .create(create_author_payload("Ephemeral"))
        .await
        .expect("create author");

    let deleted = authors
        .soft_delete(Some(author.id))
        .await
        .expect("soft delete");
    assert!(deleted.deleted_at.is_some());

    // Gone from reads.
    assert!(matches!(
        authors.get(author.id).await,
        Err(ServiceError::NotFound(_))
    ));

    // Second delete targets no active row.
    assert!(matches!(
        authors.soft_delete(Some(author.id)).await,
        Err(ServiceError::NotFound(_))
    ));
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn update_never_resurrects() {
    let (_pool, authors, _publishers, _books) = setup().await;

    let author = authors
        .create(create_author_payload("Lazarus"))
        .await
        .expect("create author");
    authors
        .soft_delete(Some(author.id))
        .await
        .expect("soft delete");

    let result = authors
        .update(catalog_app::modules::authors::models::UpdateAuthor {
            id: Some(author.id),
            name: Some("Lazarus II".to_string()),
            bio: None,
        })
        .await;
    assert!(matches!(result, Err(ServiceError::NotFound(_))));
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn deleted_rows_vanish_from_listings() {
    let (_pool, authors, _publishers, books) = setup().await;

    let author = authors
        .create(create_author_payload("Ghost Writer 9000"))
        .await
        .expect("create author");
    authors
        .soft_delete(Some(author.id))
        .await
        .expect("soft delete");

    let page = authors
        .list(None, None, Some("Ghost Writer 9000"))
        .await
        .expect("list authors");
    assert!(page.data.is_empty());
    assert_eq!(page.pagination.total_records, 0);
    assert_eq!(page.pagination.total_pages, 0);
    assert!(!page.pagination.has_next);

    // Enrichment survives a dangling reference: a book whose author was
    // soft-deleted keeps its row with a null author_name.
    let remaining = books.list(None, None, None, None).await.expect("list books");
    for book in &remaining.data {
        if book.author_id == author.id {
            assert!(book.author_name.is_none());
        }
    }
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn update_requires_id() {
    let (_pool, _authors, _publishers, books) = setup().await;

    let result = books
        .update(UpdateBook {
            id: None,
            title: Some("No Id".to_string()),
            author_id: None,
            publisher_id: None,
            isbn: None,
            price: None,
            stock: None,
            year: None,
            genre: None,
            description: None,
        })
        .await;
    assert!(matches!(result, Err(ServiceError::Validation { .. })));
}
