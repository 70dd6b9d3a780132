//! Change detection between a stored upload and its declared configuration

use devicefarm_core::models::UpdateUploadRequest;
use devicefarm_core::{UploadConfig, UploadState};

pub const PROJECT_ARN_FIELD: &str = "project_arn";
pub const TYPE_FIELD: &str = "type";

/// Fields to send in an in-place update. `None` means unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadChanges {
    pub name: Option<String>,
    pub content_type: Option<String>,
}

impl UploadChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.content_type.is_none()
    }

    pub fn into_request(self, arn: impl Into<String>) -> UpdateUploadRequest {
        let mut request = UpdateUploadRequest::new(arn);
        request.name = self.name;
        request.content_type = self.content_type;
        request
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    NoChange,
    Update(UploadChanges),
    /// Create-only fields differ; carries their names.
    Replace(Vec<&'static str>),
}

/// Compare the stored record against the declared configuration.
///
/// An unset `content_type` leaves the remote value alone rather than
/// clearing it.
pub fn plan(prior: &UploadState, desired: &UploadConfig) -> Plan {
    let mut replaced = Vec::new();
    if prior.project_arn != desired.create_only.project_arn {
        replaced.push(PROJECT_ARN_FIELD);
    }
    if prior.upload_type != Some(desired.create_only.upload_type) {
        replaced.push(TYPE_FIELD);
    }
    if !replaced.is_empty() {
        return Plan::Replace(replaced);
    }

    let mut changes = UploadChanges::default();
    if prior.name != desired.mutable.name {
        changes.name = Some(desired.mutable.name.clone());
    }
    if let Some(content_type) = &desired.mutable.content_type {
        if prior.content_type.as_ref() != Some(content_type) {
            changes.content_type = Some(content_type.clone());
        }
    }

    if changes.is_empty() {
        Plan::NoChange
    } else {
        Plan::Update(changes)
    }
}
