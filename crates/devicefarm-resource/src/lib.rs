//! Device Farm upload resource
//!
//! Binds a declared [`UploadConfig`](devicefarm_core::UploadConfig) to a
//! remote upload through any [`UploadApi`](devicefarm_client::UploadApi)
//! backend: create, read, update, delete and import, plus recovery of the
//! owning project's ARN from the upload ARN.

pub mod error;
pub mod plan;
pub mod project_arn;
pub mod upload;

pub use error::{DecodeError, ResourceError, ResourceResult};
pub use plan::{plan, Plan, UploadChanges};
pub use project_arn::decode_project_arn;
pub use upload::{ReadOutcome, UploadResource};
