//! Gateway Entry Point
//!
//! Wires the authentication gate: env configuration, tracing, the
//! PostgreSQL pool, and the HTTP surface. Uses `anyhow` for startup
//! errors; everything past startup returns typed outcomes.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use auth::{AuthConfig, PgIdentityRepository, auth_router};
use prometheus::Registry;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gateway=info,auth=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url =
        env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to identity store");

    // Run migrations
    sqlx::migrate!("../../database/migrations").run(&pool).await?;

    tracing::info!("Migrations completed");

    // Optional application-wide pepper; must match provisioning
    let config = AuthConfig {
        password_pepper: env::var("AUTH_PEPPER").ok().map(String::into_bytes),
    };

    let registry = Arc::new(Registry::new());
    let repo = PgIdentityRepository::new(pool);

    // Build router
    let app = auth_router(repo, config, registry)?.layer(TraceLayer::new_for_http());

    // Start server
    let addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:2775".to_string())
        .parse()
        .context("BIND_ADDR must be a valid socket address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
