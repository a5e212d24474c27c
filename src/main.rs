use aimod_api::config::AppConfig;
use aimod_api::db::{self, ClientHolder, DB_CLIENT_SLOT};
use aimod_api::{routes, AppState};
use anyhow::Context as _;
use mimalloc::MiMalloc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// M-MIMALLOC-APP: Use mimalloc as global allocator for improved performance.
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aimod_api=debug,tower_http=debug,sqlx=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let config = AppConfig::from_env().context("Failed to load configuration")?;

    let holder = ClientHolder::new(DB_CLIENT_SLOT, config.run_mode);
    let pool = holder
        .get_or_init(|| db::create_pool(&config.database_url, config.database_max_connections))
        .await?;

    let addr = config.bind_addr();
    tracing::info!(host = %addr, mode = %config.run_mode, "Starting AIMod API server");

    let app = routes::router(AppState {
        db: pool,
        config,
    });

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
