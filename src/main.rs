//! Employee REST Backend
//!
//! A thin HTTP service mapping CRUD requests onto a MongoDB collection.

mod api;
mod config;
mod db;
mod errors;
mod models;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::EmployeeStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EmployeeStore>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Employee Backend");
    tracing::info!(
        "Database: {} / collection: {}",
        config.db_name,
        config.collection_name
    );
    tracing::info!("Bind address: {}", config.bind_addr);

    // Connect and ping; an unreachable database is fatal before serving.
    let (client, repository) = db::init_store(&config).await?;
    tracing::info!("MongoDB connected");

    // Create application state
    let state = AppState {
        store: Arc::new(repository),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    // Serve until interrupted. In-flight requests are not drained.
    tokio::select! {
        result = async { axum::serve(listener, app).await } => result?,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    // Best-effort close of the shared client.
    client.shutdown().await;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        // Employees
        .route("/employee", post(api::create_employee))
        .route("/employee/{id}", get(api::get_employee))
        .route("/employee", get(api::list_employees))
        .route("/employee/{id}", put(api::update_employee))
        .route("/employee/{id}", delete(api::delete_employee))
        .route("/employee", delete(api::delete_all_employees))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint. Does not touch the database.
async fn health_check() -> &'static str {
    "running..."
}
