use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::upload_types::UploadType;
use crate::validation::validate_project_arn;

/// Upload as returned by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Upload {
    pub arn: String,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub upload_type: Option<UploadType>,
    pub content_type: Option<String>,
    pub url: Option<String>,
    pub category: Option<String>,
    pub metadata: Option<String>,
}

/// Fields fixed at creation; changing either one means a new upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UploadCreateOnly {
    #[validate(custom(function = "validate_project_arn"))]
    pub project_arn: String,
    #[serde(rename = "type")]
    pub upload_type: UploadType,
}

/// Fields that can be changed in place
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UploadMutable {
    #[validate(length(
        min = 1,
        max = 256,
        message = "Upload name must be between 1 and 256 characters"
    ))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 64, message = "Content type must be at most 64 characters"))]
    pub content_type: Option<String>,
}

/// Declared configuration of an upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UploadConfig {
    #[serde(flatten)]
    #[validate(nested)]
    pub create_only: UploadCreateOnly,
    #[serde(flatten)]
    #[validate(nested)]
    pub mutable: UploadMutable,
}

impl UploadConfig {
    pub fn new(
        project_arn: impl Into<String>,
        upload_type: UploadType,
        name: impl Into<String>,
    ) -> Self {
        Self {
            create_only: UploadCreateOnly {
                project_arn: project_arn.into(),
                upload_type,
            },
            mutable: UploadMutable {
                name: name.into(),
                content_type: None,
            },
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.mutable.content_type = Some(content_type.into());
        self
    }
}

/// Local record of an upload, as kept between operations.
///
/// An empty `id` means the upload no longer exists remotely and the record
/// should be dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadState {
    pub id: String,
    pub arn: String,
    pub project_arn: String,
    pub name: String,
    #[serde(rename = "type")]
    pub upload_type: Option<UploadType>,
    pub content_type: Option<String>,
    pub url: Option<String>,
    pub category: Option<String>,
    pub metadata: Option<String>,
}

impl UploadState {
    /// Build a record from the service's view plus the derived project ARN.
    pub fn from_remote(upload: Upload, project_arn: String) -> Self {
        Self {
            id: upload.arn.clone(),
            arn: upload.arn,
            project_arn,
            name: upload.name.unwrap_or_default(),
            upload_type: upload.upload_type,
            content_type: upload.content_type,
            url: upload.url,
            category: upload.category,
            metadata: upload.metadata,
        }
    }

    /// A record that only knows its key, as produced by import.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn is_removed(&self) -> bool {
        self.id.is_empty()
    }

    /// Forget the remote object.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Request for `CreateUpload`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUploadRequest {
    pub name: String,
    pub project_arn: String,
    #[serde(rename = "type")]
    pub upload_type: UploadType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl From<&UploadConfig> for CreateUploadRequest {
    /// An empty content type is left out so the service applies its default.
    fn from(config: &UploadConfig) -> Self {
        CreateUploadRequest {
            name: config.mutable.name.clone(),
            project_arn: config.create_only.project_arn.clone(),
            upload_type: config.create_only.upload_type,
            content_type: config
                .mutable
                .content_type
                .clone()
                .filter(|c| !c.is_empty()),
        }
    }
}

/// Request for `UpdateUpload`; `None` fields are left untouched by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUploadRequest {
    pub arn: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl UpdateUploadRequest {
    pub fn new(arn: impl Into<String>) -> Self {
        Self {
            arn: arn.into(),
            name: None,
            content_type: None,
        }
    }
}
