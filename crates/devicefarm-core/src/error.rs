//! Error metadata shared by the workspace's error enums
//!
//! Each crate keeps its own `thiserror` enum (`ArnError`, `ApiError`,
//! `ResourceError`). This module provides the trait they implement so callers
//! can decide how loudly to log a failure and whether it is worth retrying.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues like throttling
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Describes how an error should be reported
pub trait ErrorMetadata {
    /// Machine-readable error code (e.g., "UPLOAD_NOT_FOUND")
    fn error_code(&self) -> &'static str;

    /// Whether this error is recoverable (can be retried)
    fn is_recoverable(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}
