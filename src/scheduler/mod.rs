//! Background jobs run on cron schedules.

pub mod token_cleanup;
