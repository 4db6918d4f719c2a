//! Bistro API Server
//!
//! A small CRUD backend for restaurant records with a cuisine-diverse
//! recommendation endpoint. Uses hexagonal (ports & adapters) architecture
//! for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Json, Router};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::PostgresRestaurantRepository;
use app::RestaurantService;
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub restaurant_service: Arc<RestaurantService<PostgresRestaurantRepository>>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,bistro_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Bistro API...");

    // Load configuration
    let config = Config::from_env();

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url).await?;
    tracing::info!("Database connected");

    // Create adapters and services
    let restaurant_repo = Arc::new(PostgresRestaurantRepository::new(db));
    let restaurant_service = Arc::new(RestaurantService::new(restaurant_repo));

    let state = AppState { restaurant_service };

    // Build router
    let app = Router::new()
        // Health check
        .route("/health", get(health))
        // Restaurant CRUD
        .route(
            "/restaurants",
            get(handlers::list_restaurants).post(handlers::create_restaurant),
        )
        // Attribute lookup and recommendations (static segments before :id)
        .route("/restaurants/search", get(handlers::search_restaurants))
        .route(
            "/restaurants/recommendations",
            get(handlers::recommend_restaurants),
        )
        .route(
            "/restaurants/:id",
            get(handlers::get_restaurant)
                .patch(handlers::update_restaurant)
                .delete(handlers::delete_restaurant),
        )
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
