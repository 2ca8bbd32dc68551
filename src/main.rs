use anyhow::Context;

use catalog_kernel::settings::Settings;
use catalog_kernel::{InitCtx, ModuleRegistry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load catalog settings")?;

    catalog_telemetry::init(&settings.telemetry)?;

    tracing::info!(
        env = ?settings.environment,
        "catalog-app bootstrap starting"
    );

    let pool = catalog_db::connect(&settings.database).await?;

    let mut registry = ModuleRegistry::new();
    catalog_app::register_all(&mut registry, &pool);

    let ctx = InitCtx {
        settings: &settings,
    };
    registry.init_modules(&ctx).await?;

    let migrations = registry.collect_migrations();
    catalog_db::migrate::run(&pool, &migrations)
        .await
        .context("failed to apply migrations")?;

    registry.start_modules(&ctx).await?;

    tracing::info!("catalog-app bootstrap complete");

    catalog_http::start_server(&registry, &settings).await?;

    registry.stop_modules().await?;

    Ok(())
}
