//! Error types for fleetbook

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Table storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode table {table}: {source}")]
    Encode {
        table: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid table name: {0:?}")]
    InvalidTableName(String),
}

/// Bulk text parsing errors
///
/// Per-line anomalies are never errors; only the batch metadata can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Missing livery or operator")]
    MissingMetadata,
}

/// Change request notification errors
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Webhook URL is missing!")]
    NotConfigured,

    #[error("Failed to send to Discord: {0}")]
    Transport(String),

    #[error("Failed to send to Discord: webhook answered with status {0}")]
    Status(u16),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Notify(#[from] NotifyError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Missing fields")]
    MissingFields,

    #[error("Missing index or fleet data")]
    MissingFleetUpdate,

    #[error("Missing index")]
    MissingIndex,

    #[error("Missing data")]
    MissingTableUpdate,

    #[error("Fleet not found")]
    FleetNotFound,

    #[error("Invalid index")]
    InvalidIndex,

    #[error("No data")]
    NoData,

    #[error("Fleet Number and Registration are required!")]
    MissingChangeFields,

    #[error("File not found: {0}")]
    FileNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
