// Main entry point for the catalog API server

use std::sync::Arc;

use anyhow::{Context, Result};
use catalog_core::domains::auth::actions::seed_super_admin_emails;
use catalog_core::domains::auth::JwtService;
use catalog_core::kernel::ServerDeps;
use catalog_core::{server::build_app, Config};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,catalog_core=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting book catalog API");

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(default_profile = %config.default_profile, "Configuration loaded");

    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations complete");

    let jwt_service = Arc::new(JwtService::new(&config.jwt_secret, config.jwt_issuer.clone()));
    let server_deps = Arc::new(ServerDeps::postgres(pool.clone(), jwt_service));

    seed_super_admin_emails(&config.super_admin_emails, &server_deps)
        .await
        .context("Failed to seed super-admin allow-list")?;

    let app = build_app(
        pool,
        server_deps,
        config.default_profile,
        &config.allowed_origins,
    );

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("GraphQL endpoint: http://localhost:{}/graphql", config.port);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
