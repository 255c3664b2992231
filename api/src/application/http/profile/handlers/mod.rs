pub mod get_profile;
pub mod record_activity;
pub mod update_profile;
