use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use citacoes_api::infrastructure::AppState;
use citacoes_api::{config, db, server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env before reading RUST_LOG or any config
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "citacoes_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = config::Config::from_env();

    // Initialize database
    let db = match db::init_db(&config.database_url).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to initialize database {}: {}", config.database_url, e);
            return Err(e.into());
        }
    };

    // Repositories and services are built once here and handed to the router
    let state = AppState::new(db);
    let app = server::build_router(state, &config);

    server::serve(app, config.port).await?;
    Ok(())
}
