use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, service::TokenService};

/// Starts the expired token cleanup scheduler
///
/// Deletes tokens whose expiry has passed so `/token list` only shows usable codes.
///
/// # Arguments
/// - `db`: Database connection
/// - `schedule`: Cron expression (with seconds) for the job
pub async fn start_scheduler(db: DatabaseConnection, schedule: &str) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();

    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            if let Err(e) = purge_expired_tokens(&db).await {
                tracing::error!("Error purging expired tokens: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Token cleanup scheduler started ({})", schedule);

    Ok(())
}

/// Deletes expired tokens across all guilds
async fn purge_expired_tokens(db: &DatabaseConnection) -> Result<u64, AppError> {
    let purged = TokenService::new(db).purge_expired().await?;

    if purged > 0 {
        tracing::info!("Purged {} expired tokens", purged);
    }

    Ok(purged)
}
