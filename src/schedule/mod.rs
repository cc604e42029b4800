/// Schedule management modules
mod daily_job;
mod manager;
mod types;

// Re-export public types and functions
pub use manager::run_schedule_manager;
pub use types::{ScheduleEntry, ScheduleError};
