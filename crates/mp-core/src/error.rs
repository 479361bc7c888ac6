//! Error types for mp-core

use thiserror::Error;

/// Core error type for Milepost
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Configuration file not found
    #[error("[E001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E002: Failed to parse configuration file
    #[error("[E002] Failed to parse config: {message}")]
    ConfigParseError { message: String },

    /// E003: Version identifier does not follow the `NNN_slug` convention
    #[error("[E003] Invalid migration version '{raw}': {reason}")]
    InvalidVersion { raw: String, reason: String },

    /// E004: Unknown migration status read from storage
    #[error("[E004] Unknown migration status '{raw}'")]
    InvalidStatus { raw: String },

    /// E005: IO error
    #[error("[E005] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
