pub mod authors;
pub mod books;
pub mod publishers;

use catalog_kernel::ModuleRegistry;
use sqlx::PgPool;

/// Register all catalog modules with the registry.
///
/// Books registers last: its tables reference authors and publishers, and
/// migrations run in registration order.
pub fn register_all(registry: &mut ModuleRegistry, pool: &PgPool) {
    registry.register(authors::create_module(pool.clone()));
    registry.register(publishers::create_module(pool.clone()));
    registry.register(books::create_module(pool.clone()));
}
