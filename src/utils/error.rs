//! Error handling for tubemeta

use thiserror::Error;

/// Main error type for tubemeta
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Extraction(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Failed to parse size: {0}")]
    Parse(String),

    #[error("yt-dlp not found. Please install yt-dlp")]
    YtDlpNotFound,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Short machine-friendly name of the error kind, used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation",
            AppError::Extraction(_) => "extraction",
            AppError::NotFound(_) => "not_found",
            AppError::Parse(_) => "parse",
            AppError::YtDlpNotFound => "ytdlp_missing",
            AppError::Io(_) => "io",
            AppError::Serialization(_) => "serialization",
        }
    }
}
