//! Cron jobs for automated tasks.

pub mod booking_status;
