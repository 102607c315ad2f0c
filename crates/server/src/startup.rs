use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, employees::ServerState};
use service::{
    db::employee_store::SeaOrmEmployeeStore,
    directory::service::{DirectoryConfig, DirectoryService},
    file::employee_store::FileEmployeeStore,
};

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn directory_config(cfg: &configs::AppConfig) -> DirectoryConfig {
    DirectoryConfig {
        company_username: cfg.credentials.company_username.clone(),
        company_password: cfg.credentials.company_password.clone(),
    }
}

/// Table-backed entry: connect, apply migrations, serve.
pub async fn run_db() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();
    let cfg = configs::load_or_default();

    let db = if cfg.database.url.trim().is_empty() {
        models::db::connect().await?
    } else {
        models::db::connect_with(&cfg.database).await?
    };
    // The schema is applied on boot; the create-table migration is idempotent.
    migration::Migrator::up(&db, None).await?;

    let store = Arc::new(SeaOrmEmployeeStore::new(db));
    let state = ServerState {
        directory: DirectoryService::new(store, directory_config(&cfg)),
        liveness: "PostgreSQL employee directory running",
    };
    serve(state, &cfg).await
}

/// File-backed entry: ensure the data directory, open the file store, serve.
pub async fn run_file() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();
    let cfg = configs::load_or_default();

    let file_path = cfg.storage.employees_file.clone();
    if let Some(parent) = Path::new(&file_path).parent().filter(|p| !p.as_os_str().is_empty()) {
        common::env::ensure_data_dir(&parent.to_string_lossy()).await?;
    }
    let store = FileEmployeeStore::new(&file_path).await?;
    info!(%file_path, "using file-backed employee store");

    let state = ServerState {
        directory: DirectoryService::new(store, directory_config(&cfg)),
        liveness: "File-backed employee directory running",
    };
    serve(state, &cfg).await
}

async fn serve(state: ServerState, cfg: &configs::AppConfig) -> anyhow::Result<()> {
    let app: Router = routes::build_router(state, build_cors());
    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, "starting employee directory");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
