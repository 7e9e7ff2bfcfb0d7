use item_inventory::{
    build_router, config::Config, db, storage::LocalFileStore, AppState,
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,item_inventory=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!("Opening database at {}", config.database_url);
    let pool = db::connect(&config.database_url, config.db_max_connections).await?;
    db::init_schema(&pool).await?;
    info!("Schema ready.");

    let files = LocalFileStore::new(&config.uploads_dir);
    tokio::fs::create_dir_all(files.root()).await?;
    info!(uploads_dir = %config.uploads_dir, "Upload directory ready.");

    let state = AppState::new(pool, files, config.credentials.clone());
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
