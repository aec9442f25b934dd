mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;

use crate::{config::Config, error::AppError, scheduler::token_cleanup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    tracing::info!("Starting warden");

    // Start expired token cleanup scheduler
    let scheduler_db = db.clone();
    let cleanup_schedule = config.token_cleanup_schedule.clone();
    tokio::spawn(async move {
        if let Err(e) = token_cleanup::start_scheduler(scheduler_db, &cleanup_schedule).await {
            tracing::error!("Token cleanup scheduler error: {}", e);
        }
    });

    let client = bot::start::init_bot(&config, db).await?;

    bot::start::start_bot(client).await
}
