// src/main.rs
use axum::{routing::get, Router};
use catalog_backend::{database, routes, state::AppState};
use dotenvy::dotenv;
use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::fmt::init as tracing_init;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_init();

    // Load environment variables
    dotenv().ok();

    // Create database pool. Startup fails fast when the store is
    // unreachable: a catalog API without its table serves nothing but
    // errors, so dying loudly beats limping along.
    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set");
    let db_pool = database::create_pool(&database_url).await
        .expect("Failed to create database pool");

    // Create application state
    let app_state = AppState::new(db_pool);

    // The UI is served from a different origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build application under /api
    let api = routes::create_router()
        .route("/status", get(|| async { "Catalog API is running" }));

    let app = Router::new()
        .nest("/api", api)
        .route("/health", get(health_check))
        .layer(cors)
        .with_state(app_state);

    // Start server (axum 0.8 style) with HOST/PORT from the environment
    let host_str = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let host: IpAddr = host_str.parse().unwrap_or_else(|_| "127.0.0.1".parse().unwrap());
    let port = std::env::var("PORT").ok().and_then(|p| p.parse::<u16>().ok()).unwrap_or(3000);
    let addr = SocketAddr::from((host, port));

    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server running on {}", addr);
            listener
        }
        Err(e) => {
            tracing::error!(%addr, error = %e, "Failed to bind");
            return;
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "Server error");
    }
}

async fn health_check() -> &'static str {
    "OK"
}
