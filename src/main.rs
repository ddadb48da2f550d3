mod auth;
mod config;
mod db;
mod error;
mod models;
mod stats;
mod views;

use axum::{
    routing::{delete, get, post},
    Router,
};
use config::Config;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

/// Shared application state
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().expect("Invalid configuration");
    if config.admin_password.is_none() {
        tracing::warn!("ADMIN_PASSWORD not set, every visitor has admin rights");
    }

    let pool = PgPool::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let addr = format!("0.0.0.0:{}", config.port);
    let state = Arc::new(AppState { db: pool, config });

    let router = Router::new()
        // Pages
        .route("/", get(views::rankings::page))
        .route("/players", get(views::players::page))
        .route("/players/{id}", get(views::player_details::page))
        .route("/matches", get(views::matches::page))
        // API - Auth
        .route("/api/login", post(auth::login))
        .route("/api/logout", post(auth::logout))
        // API - Players
        .route("/api/players", post(views::players::create_player))
        .route("/api/players/{id}", delete(views::players::delete_player))
        // API - Matches
        .route(
            "/api/matches",
            post(views::matches::submit_match).delete(views::matches::delete_all_matches),
        )
        .route("/api/matches/{id}", delete(views::matches::delete_match))
        .route("/api/reset", post(views::matches::reset_data))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, router).await.expect("Server error");
}
