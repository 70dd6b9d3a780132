use crate::traits::{ApiError, ApiResult, UploadApi};
use async_trait::async_trait;
use devicefarm_core::constants::{PROJECT_RESOURCE_PREFIX, SERVICE_NAME, UPLOAD_RESOURCE_PREFIX};
use devicefarm_core::models::{CreateUploadRequest, UpdateUploadRequest};
use devicefarm_core::{Arn, BackendKind, Upload};
use std::collections::HashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

const PRIVATE_CATEGORY: &str = "PRIVATE";
const UPLOAD_URL_BASE: &str = "https://devicefarm-uploads.invalid";

/// A call received by [`InMemoryDeviceFarm`], kept for assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedRequest {
    Create(CreateUploadRequest),
    Get(String),
    Update(UpdateUploadRequest),
    Delete(String),
}

#[derive(Default)]
struct Inner {
    uploads: HashMap<String, Upload>,
    requests: Vec<RecordedRequest>,
    reject_next: Option<String>,
}

/// In-process emulation of the Device Farm upload API
///
/// Upload ARNs are minted in the same account, partition and region as the
/// project they belong to. Every call is recorded, in order.
#[derive(Default)]
pub struct InMemoryDeviceFarm {
    inner: Mutex<Inner>,
}

impl InMemoryDeviceFarm {
    pub fn new() -> Self {
        Self::default()
    }

    /// All requests received so far.
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.inner.lock().await.requests.clone()
    }

    /// Make the next create, update or delete fail with a service rejection.
    pub async fn reject_next(&self, message: impl Into<String>) {
        self.inner.lock().await.reject_next = Some(message.into());
    }

    /// Drop an upload without going through `DeleteUpload`, as if it was
    /// removed by someone else.
    pub async fn forget(&self, arn: &str) -> bool {
        self.inner.lock().await.uploads.remove(arn).is_some()
    }

    /// Store an upload as-is under its own ARN, bypassing `CreateUpload`.
    pub async fn insert(&self, upload: Upload) {
        self.inner
            .lock()
            .await
            .uploads
            .insert(upload.arn.clone(), upload);
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.uploads.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.uploads.is_empty()
    }

    fn mint_arn(project_arn: &str) -> ApiResult<(String, String)> {
        let rejected = |message: String| ApiError::Rejected {
            operation: "CreateUpload",
            message,
        };

        let project: Arn = project_arn
            .parse()
            .map_err(|e| rejected(format!("Invalid project ARN {}: {}", project_arn, e)))?;

        let project_id = project
            .resource
            .strip_prefix(PROJECT_RESOURCE_PREFIX)
            .filter(|id| !id.is_empty() && !id.contains('/'))
            .ok_or_else(|| rejected(format!("Not a project ARN: {}", project_arn)))?;

        let upload_id = Uuid::new_v4().to_string();
        let arn = Arn {
            partition: project.partition.clone(),
            service: SERVICE_NAME.to_string(),
            region: project.region.clone(),
            account_id: project.account_id.clone(),
            resource: format!("{}{}/{}", UPLOAD_RESOURCE_PREFIX, project_id, upload_id),
        };

        let url = format!("{}/{}/{}", UPLOAD_URL_BASE, project_id, upload_id);
        Ok((arn.to_string(), url))
    }
}

impl Inner {
    fn take_rejection(&mut self, operation: &'static str) -> ApiResult<()> {
        match self.reject_next.take() {
            Some(message) => Err(ApiError::Rejected { operation, message }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl UploadApi for InMemoryDeviceFarm {
    async fn create_upload(&self, request: CreateUploadRequest) -> ApiResult<Upload> {
        let mut inner = self.inner.lock().await;
        inner.requests.push(RecordedRequest::Create(request.clone()));
        inner.take_rejection("CreateUpload")?;

        let (arn, url) = Self::mint_arn(&request.project_arn)?;
        let upload = Upload {
            arn: arn.clone(),
            name: Some(request.name),
            upload_type: Some(request.upload_type),
            content_type: request.content_type,
            url: Some(url),
            category: Some(PRIVATE_CATEGORY.to_string()),
            metadata: None,
        };
        inner.uploads.insert(arn.clone(), upload.clone());

        tracing::info!(arn = %arn, "In-memory CreateUpload successful");
        Ok(upload)
    }

    async fn get_upload(&self, arn: &str) -> ApiResult<Upload> {
        let mut inner = self.inner.lock().await;
        inner.requests.push(RecordedRequest::Get(arn.to_string()));

        inner
            .uploads
            .get(arn)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(arn.to_string()))
    }

    async fn update_upload(&self, request: UpdateUploadRequest) -> ApiResult<Upload> {
        let mut inner = self.inner.lock().await;
        inner.requests.push(RecordedRequest::Update(request.clone()));
        inner.take_rejection("UpdateUpload")?;

        let upload = inner
            .uploads
            .get_mut(&request.arn)
            .ok_or_else(|| ApiError::NotFound(request.arn.clone()))?;

        if let Some(name) = request.name {
            upload.name = Some(name);
        }
        if let Some(content_type) = request.content_type {
            upload.content_type = Some(content_type);
        }

        tracing::info!(arn = %request.arn, "In-memory UpdateUpload successful");
        Ok(upload.clone())
    }

    async fn delete_upload(&self, arn: &str) -> ApiResult<()> {
        let mut inner = self.inner.lock().await;
        inner.requests.push(RecordedRequest::Delete(arn.to_string()));
        inner.take_rejection("DeleteUpload")?;

        inner
            .uploads
            .remove(arn)
            .map(|_| ())
            .ok_or_else(|| ApiError::NotFound(arn.to_string()))
    }

    fn backend_type(&self) -> BackendKind {
        BackendKind::Memory
    }
}
