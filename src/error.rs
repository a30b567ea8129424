//! Error types for yt-grab

use thiserror::Error;

/// Coarse classification of failures, used for process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // User errors
    EmptyUrl,
    InvalidConfig,

    // Downloader errors
    DownloadFailed,
    MissingDependency,

    // System errors
    FileError,
    SpawnError,
}

impl ErrorCode {
    /// Process exit status reported for this class of failure
    pub fn exit_status(self) -> i32 {
        match self {
            Self::EmptyUrl | Self::InvalidConfig => 2,
            Self::DownloadFailed => 1,
            Self::MissingDependency => 127,
            Self::FileError | Self::SpawnError => 3,
        }
    }
}

/// Main error type for yt-grab
#[derive(Error, Debug)]
pub enum YtGrabError {
    #[error("Please enter a valid URL.")]
    EmptyUrl,

    #[error("yt-dlp exited with code {exit_code}")]
    InvocationFailure { exit_code: i32, log: String },

    #[error("Missing dependency: {0}. Please install it.")]
    MissingDependency(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("File error: {0}")]
    File(#[from] std::io::Error),

    #[error("Failed to spawn process: {0}")]
    Spawn(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl YtGrabError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::EmptyUrl => ErrorCode::EmptyUrl,
            Self::InvocationFailure { .. } => ErrorCode::DownloadFailed,
            Self::MissingDependency(_) => ErrorCode::MissingDependency,
            Self::InvalidConfig(_) => ErrorCode::InvalidConfig,
            Self::File(_) => ErrorCode::FileError,
            Self::Spawn(_) => ErrorCode::SpawnError,
            Self::Json(_) => ErrorCode::InvalidConfig,
        }
    }

    /// Exit status the binary terminates with for this error
    pub fn exit_status(&self) -> i32 {
        self.code().exit_status()
    }
}

/// Metadata lookup failed. Never fatal; the shell shows a warning and carries on.
#[derive(Error, Debug)]
#[error("unable to fetch video info: {reason}")]
pub struct ProbeError {
    reason: String,
}

impl ProbeError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, YtGrabError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invocation_failure_maps_to_download_failed() {
        let err = YtGrabError::InvocationFailure {
            exit_code: 2,
            log: "ERROR: Unsupported URL".into(),
        };
        assert_eq!(err.code(), ErrorCode::DownloadFailed);
        assert_eq!(err.code().exit_status(), 1);
        assert_eq!(err.to_string(), "yt-dlp exited with code 2");
    }

    #[test]
    fn test_missing_dependency_exit_status() {
        let err = YtGrabError::MissingDependency("yt-dlp".into());
        assert_eq!(err.code().exit_status(), 127);
        assert!(err.to_string().contains("yt-dlp"));
    }
}
