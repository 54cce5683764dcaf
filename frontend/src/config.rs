//! Build-time configuration of the frontend.

use log::LevelFilter;

/// Backend used when `RECORDS_API_BASE` is not set at compile time.
pub const DEFAULT_API_BASE: &str = "http://localhost:3001";

/// Base URL of the REST backend, without the collection path.
pub fn api_base() -> &'static str {
    option_env!("RECORDS_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

pub fn log_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}
