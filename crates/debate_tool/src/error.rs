//! Tool error types.

use debate_core::ScheduleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    /// Every problem found with a request, in form order
    #[error("invalid request: {}", .0.join(" "))]
    Request(Vec<String>),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("csv export is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("json output failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ToolResult<T> = Result<T, ToolError>;
