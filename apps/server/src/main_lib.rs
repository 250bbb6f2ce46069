use std::sync::Arc;

use crate::config::{Config, LogFormat};
use blueprint_core::blueprint::{BlueprintService, BlueprintServiceTrait};
use blueprint_storage_sqlite::{blueprint::BlueprintRepository, db, seed};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub blueprint_service: Arc<dyn BlueprintServiceTrait + Send + Sync>,
    pub default_questions: u32,
    pub max_questions: u32,
}

pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init(),
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let blueprint_repository = Arc::new(BlueprintRepository::new(pool.clone(), writer));
    let blueprint_service = Arc::new(BlueprintService::new(blueprint_repository));

    if config.seed_on_start {
        let summary = seed::seed_defaults(blueprint_service.as_ref()).await?;
        tracing::info!(
            "Seeded blueprint: {} categories upserted, {} NEC references added",
            summary.categories_upserted,
            summary.nec_refs_inserted
        );
    }

    Ok(Arc::new(AppState {
        blueprint_service,
        default_questions: config.default_questions,
        max_questions: config.max_questions,
    }))
}
