use std::sync::Arc;

use devicefarm_client::UploadApi;
use devicefarm_core::models::CreateUploadRequest;
use devicefarm_core::{AccountContext, UploadConfig, UploadState};
use validator::Validate;

use crate::error::{ResourceError, ResourceResult};
use crate::plan::{plan, Plan};
use crate::project_arn::decode_project_arn;

/// Result of reading an upload back from the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Found(UploadState),
    /// The upload is gone remotely; the local record should be dropped.
    Removed,
}

/// Lifecycle operations for a Device Farm upload
///
/// Every operation that changes the remote object ends with a read, so the
/// returned state is always the service's view.
#[derive(Clone)]
pub struct UploadResource {
    api: Arc<dyn UploadApi>,
    context: AccountContext,
}

impl UploadResource {
    pub fn new(api: Arc<dyn UploadApi>, context: AccountContext) -> Self {
        Self { api, context }
    }

    /// Create the upload, then read it back.
    #[tracing::instrument(
        skip(self, config),
        fields(project_arn = %config.create_only.project_arn)
    )]
    pub async fn create(&self, config: &UploadConfig) -> ResourceResult<UploadState> {
        config.validate()?;

        let request = CreateUploadRequest::from(config);
        tracing::debug!(request = ?request, "Creating Device Farm upload");

        let upload = self
            .api
            .create_upload(request)
            .await
            .map_err(|source| ResourceError::Create { source })?;

        match self.read(&upload.arn, true).await? {
            ReadOutcome::Found(state) => Ok(state),
            // read() surfaces not-found as an error for new records
            ReadOutcome::Removed => Err(ResourceError::Read {
                id: upload.arn.clone(),
                source: devicefarm_client::ApiError::NotFound(upload.arn),
            }),
        }
    }

    /// Fetch the upload and rebuild the local record.
    ///
    /// A missing upload is reported as [`ReadOutcome::Removed`] unless it was
    /// created by the current operation, in which case it is an error.
    #[tracing::instrument(skip(self))]
    pub async fn read(&self, id: &str, is_new: bool) -> ResourceResult<ReadOutcome> {
        let upload = match self.api.get_upload(id).await {
            Ok(upload) => upload,
            Err(err) if err.is_not_found() && !is_new => {
                tracing::warn!(id = %id, "Device Farm upload not found, removing from state");
                return Ok(ReadOutcome::Removed);
            }
            Err(source) => {
                return Err(ResourceError::Read {
                    id: id.to_string(),
                    source,
                })
            }
        };

        let project_arn = decode_project_arn(&upload.arn, &self.context).map_err(|source| {
            ResourceError::DecodeProjectArn {
                arn: upload.arn.clone(),
                source,
            }
        })?;

        Ok(ReadOutcome::Found(UploadState::from_remote(upload, project_arn)))
    }

    /// Re-read an existing record in place, clearing it if the upload is gone.
    pub async fn refresh(&self, state: &mut UploadState) -> ResourceResult<()> {
        if state.is_removed() {
            return Err(ResourceError::MissingId);
        }

        match self.read(&state.id, false).await? {
            ReadOutcome::Found(current) => *state = current,
            ReadOutcome::Removed => state.clear(),
        }
        Ok(())
    }

    /// Apply changed name and content type in place, then read back.
    ///
    /// Changes to `project_arn` or `type` cannot be applied in place and are
    /// rejected with [`ResourceError::RequiresReplacement`].
    #[tracing::instrument(skip(self, prior, desired), fields(id = %prior.id))]
    pub async fn update(
        &self,
        prior: &UploadState,
        desired: &UploadConfig,
    ) -> ResourceResult<ReadOutcome> {
        desired.validate()?;
        if prior.is_removed() {
            return Err(ResourceError::MissingId);
        }

        match plan(prior, desired) {
            Plan::Replace(fields) => {
                return Err(ResourceError::RequiresReplacement {
                    id: prior.id.clone(),
                    fields,
                })
            }
            Plan::NoChange => {
                tracing::debug!("No in-place changes for Device Farm upload");
            }
            Plan::Update(changes) => {
                let request = changes.into_request(prior.id.clone());
                tracing::debug!(request = ?request, "Updating Device Farm upload");

                self.api
                    .update_upload(request)
                    .await
                    .map_err(|source| ResourceError::Update {
                        id: prior.id.clone(),
                        source,
                    })?;
            }
        }

        self.read(&prior.id, false).await
    }

    /// Delete the upload. Deleting an upload that no longer exists succeeds.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> ResourceResult<()> {
        tracing::debug!("Deleting Device Farm upload");

        match self.api.delete_upload(id).await {
            Ok(()) => Ok(()),
            Err(err) if err.is_not_found() => {
                tracing::debug!(id = %id, "Device Farm upload already deleted");
                Ok(())
            }
            Err(source) => Err(ResourceError::Delete {
                id: id.to_string(),
                source,
            }),
        }
    }

    /// Adopt an existing upload, keyed by its ARN.
    #[tracing::instrument(skip(self))]
    pub async fn import(&self, id: &str) -> ResourceResult<UploadState> {
        match self.read(id, false).await? {
            ReadOutcome::Found(state) => Ok(state),
            ReadOutcome::Removed => Err(ResourceError::ImportNotFound(id.to_string())),
        }
    }
}
