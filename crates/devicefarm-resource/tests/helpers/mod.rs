//! Test helpers: build an upload resource over the in-memory backend.
//!
//! Run from workspace root: `cargo test -p devicefarm-resource`.

#![allow(dead_code)]

use devicefarm_client::InMemoryDeviceFarm;
use devicefarm_core::{AccountContext, UploadConfig, UploadType};
use devicefarm_resource::UploadResource;
use std::sync::Arc;

pub const ACCOUNT_ID: &str = "123456789012";
pub const PARTITION: &str = "aws";
pub const REGION: &str = "us-west-2";
pub const PROJECT_ID: &str = "5e01a8c7-c861-4c0a-b1d5-12345EXAMPLE";

/// Resource under test plus a handle on the backend for assertions.
pub struct TestResource {
    pub resource: UploadResource,
    pub api: Arc<InMemoryDeviceFarm>,
}

pub fn context() -> AccountContext {
    AccountContext::new(ACCOUNT_ID, PARTITION, REGION)
}

pub fn project_arn() -> String {
    context().project_arn(PROJECT_ID).to_string()
}

pub fn setup() -> TestResource {
    let api = Arc::new(InMemoryDeviceFarm::new());
    let resource = UploadResource::new(api.clone(), context());
    TestResource { resource, api }
}

pub fn config(upload_type: UploadType, name: &str) -> UploadConfig {
    UploadConfig::new(project_arn(), upload_type, name)
}
