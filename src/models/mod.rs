pub mod assignments;
pub mod common;
pub mod courses;
pub mod users;

pub use common::response::ErrorResponse;

/// Recorded once at process start, used for startup timing logs.
#[derive(Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
