//! Background job scheduler.
//!
//! Initialises a [`JobScheduler`] at server startup and, when
//! `DRHUB_REFRESH_CRON` is set, registers a recurring scraper refresh.

use std::sync::Arc;

use drhub_upstream::RefreshRunner;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

/// Builds and starts the background job scheduler.
///
/// Returns the running [`JobScheduler`] handle, which must be kept alive for
/// the lifetime of the process. Dropping it shuts down all scheduled jobs.
///
/// # Errors
///
/// Returns [`JobSchedulerError`] if the scheduler cannot be initialised,
/// the cron expression is rejected, or the scheduler fails to start.
pub async fn build_scheduler(
    refresh: RefreshRunner,
    cron: Option<&str>,
) -> Result<JobScheduler, JobSchedulerError> {
    let scheduler = JobScheduler::new().await?;

    match cron {
        Some(expr) => register_refresh_job(&scheduler, refresh, expr).await?,
        None => tracing::info!("DRHUB_REFRESH_CRON not set; scheduled refresh disabled"),
    }

    scheduler.start().await?;
    Ok(scheduler)
}

/// Register the recurring scraper run on `expr` (six-field cron, UTC).
async fn register_refresh_job(
    scheduler: &JobScheduler,
    refresh: RefreshRunner,
    expr: &str,
) -> Result<(), JobSchedulerError> {
    let refresh = Arc::new(refresh);

    let job = Job::new_async(expr, move |_uuid, _lock| {
        let refresh = Arc::clone(&refresh);

        Box::pin(async move {
            tracing::info!("scheduler: starting resource refresh");
            match refresh.run().await {
                Ok(()) => tracing::info!("scheduler: resource refresh complete"),
                Err(e) => tracing::error!(error = %e, "scheduler: resource refresh failed"),
            }
        })
    })?;

    scheduler.add(job).await?;
    tracing::info!(cron = expr, "scheduler: registered resource refresh job");
    Ok(())
}
