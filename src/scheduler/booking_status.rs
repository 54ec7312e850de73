//! Periodic booking status sweep.
//!
//! Every 30 minutes (and once at startup) bookings are moved along their
//! lifecycle based on wall-clock time:
//!
//! - `CONFIRMED` bookings past their end time become `COMPLETED`
//! - `PENDING` bookings past their start time become `CANCELLED`
//!
//! Both updates are single batch statements; a failing sweep is logged and
//! the next tick tries again.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, service::booking};

/// Every 30 minutes, on the half hour (UTC).
const SWEEP_SCHEDULE: &str = "0 */30 * * * *";

/// Starts the recurring booking status sweep.
///
/// # Arguments
/// - `db`: Database connection shared with the job closure
pub async fn start_scheduler(db: DatabaseConnection) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();
    let job = Job::new_async(SWEEP_SCHEDULE, move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            if let Err(e) = sweep(&db).await {
                tracing::error!("Error sweeping booking statuses: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Booking status sweep scheduled (every 30 minutes)");

    Ok(())
}

/// Runs one sweep immediately. Called during startup so statuses are
/// current even after the server was down across slot boundaries. Errors
/// are logged, not propagated; a broken sweep should not prevent startup.
pub async fn run_startup_sweep(db: &DatabaseConnection) {
    tracing::info!("Running booking status sweep on startup");

    if let Err(e) = sweep(db).await {
        tracing::error!("Startup booking status sweep failed: {}", e);
    }
}

async fn sweep(db: &DatabaseConnection) -> Result<(), AppError> {
    let now = Utc::now();

    let outcome = booking::sweep(db, now).await?;

    tracing::info!(
        completed = outcome.completed,
        cancelled = outcome.cancelled,
        "Booking status sweep finished"
    );

    Ok(())
}
