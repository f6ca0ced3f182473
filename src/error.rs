use thiserror::Error;

/// Errors surfaced while loading schedule payloads.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload was neither an array of records nor an object carrying
    /// a `tasks` array.
    #[error("payload has no tasks array")]
    MissingTasksArray,
}

pub type Result<T, E = ScheduleError> = std::result::Result<T, E>;
