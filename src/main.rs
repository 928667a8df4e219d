// src/main.rs
mod routes;
mod handlers;
mod models;
mod database;
mod state;
mod dtos;
mod error;
mod config;
mod calculator;
mod storage;
mod validation;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::fmt::init as tracing_init;

use crate::config::Config;
use crate::storage::{MemoryWaitlistStore, PgWaitlistStore, WaitlistStore};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_init();

    // Load environment variables
    dotenv().ok();

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return;
        }
    };

    // Pick the waitlist store
    let waitlist: Arc<dyn WaitlistStore> = match &config.database_url {
        Some(url) => {
            let pool = match database::create_pool(url).await {
                Ok(p) => p,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to create database pool");
                    return;
                }
            };
            if let Err(e) = database::init_schema(&pool).await {
                tracing::error!(error = %e, "Failed to prepare waitlist table");
                return;
            }
            tracing::info!("Using PostgreSQL waitlist store");
            Arc::new(PgWaitlistStore::new(pool))
        }
        None => {
            tracing::info!("DATABASE_URL not set, using in-memory waitlist store");
            Arc::new(MemoryWaitlistStore::new())
        }
    };

    let cors_origin = match config.cors_allow_origin.as_deref().map(HeaderValue::from_str).transpose() {
        Ok(o) => o,
        Err(e) => {
            tracing::error!(error = %e, "Invalid CORS_ALLOW_ORIGIN");
            return;
        }
    };

    // Create application state
    let app_state = state::AppState::new(waitlist);

    let app = routes::create_app(app_state).layer(routes::cors_layer(cors_origin));

    // Try base_port..base_port+20 to avoid crash when address is in use
    let (host, base_port) = (config.host, config.port);
    let listener = {
        let mut bound = None;
        for offset in 0u16..=20 {
            let port = base_port.saturating_add(offset);
            let addr = SocketAddr::from((host, port));
            match TcpListener::bind(addr).await {
                Ok(l) => { bound = Some((l, addr)); break; }
                Err(e) => {
                    if offset == 0 { tracing::warn!(%addr, error=%e, "Port in use, trying next"); }
                }
            }
        }
        match bound {
            Some((l, addr)) => {
                tracing::info!("Server running on {}", addr);
                l
            }
            None => {
                tracing::error!("Failed to bind to any port starting at {} on {}", base_port, host);
                return;
            }
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error=%e, "Server error");
    }
}
