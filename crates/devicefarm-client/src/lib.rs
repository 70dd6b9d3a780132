//! Device Farm Client Library
//!
//! This crate provides the `UploadApi` abstraction over the four Device Farm
//! upload operations and two implementations of it: the AWS SDK backend and
//! an in-memory emulation used by tests and offline runs.
//!
//! # Upload ARN format
//!
//! Uploads are addressed by ARN. The resource component always embeds the
//! owning project:
//!
//! - `arn:{partition}:devicefarm:{region}:{account}:upload:{project_id}/{upload_id}`

#[cfg(feature = "devicefarm-aws")]
pub mod aws;
pub mod factory;
#[cfg(feature = "devicefarm-memory")]
pub mod memory;
pub mod traits;

// Re-export commonly used types
#[cfg(feature = "devicefarm-aws")]
pub use aws::AwsDeviceFarm;
pub use devicefarm_core::BackendKind;
pub use factory::create_client;
#[cfg(feature = "devicefarm-memory")]
pub use memory::{InMemoryDeviceFarm, RecordedRequest};
pub use traits::{ApiError, ApiResult, UploadApi};
