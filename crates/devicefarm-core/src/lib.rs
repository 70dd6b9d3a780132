//! Device Farm Core Library
//!
//! This crate provides the domain models, ARN handling, configuration, and
//! validation shared by the client, resource, and CLI crates.

pub mod arn;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod upload_types;
pub mod validation;

// Re-export commonly used types
pub use arn::{AccountContext, Arn, ArnError};
pub use config::{BackendKind, Config};
pub use error::{ErrorMetadata, LogLevel};
pub use models::{Upload, UploadConfig, UploadCreateOnly, UploadMutable, UploadState};
pub use upload_types::UploadType;
