pub mod list_progress;
pub mod record_progress;
