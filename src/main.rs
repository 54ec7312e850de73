//! Courtbook REST backend.
//!
//! A session-authenticated HTTP API for managing users, courts, and court
//! bookings. The backend uses Axum as the web framework, SeaORM for database
//! operations, and tokio-cron-scheduler for the booking status sweep.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, operation parameters, and API DTOs
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrappers and authentication guards
//!
//! Supporting modules provide application infrastructure: `config`, `state`,
//! `startup`, `router`, and `scheduler`.

mod config;
mod controller;
mod data;
mod error;
mod middleware;
mod model;
mod router;
mod scheduler;
mod service;
mod startup;
mod state;

use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session_layer = startup::session_layer(&db).await?;
    let cors_layer = startup::cors_layer(&config)?;

    // Create the bootstrap admin account if the database has none
    startup::ensure_admin_account(&db, &config).await?;

    // Sweep immediately so statuses are current after downtime, then start
    // the recurring job
    scheduler::booking_status::run_startup_sweep(&db).await;

    let scheduler_db = db.clone();
    tokio::spawn(async move {
        if let Err(e) = scheduler::booking_status::start_scheduler(scheduler_db).await {
            tracing::error!("Booking status scheduler error: {}", e);
        }
    });

    let state = AppState::new(db, config.booking_policy());
    let app = router::router()
        .with_state(state)
        .layer(session_layer)
        .layer(cors_layer);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
