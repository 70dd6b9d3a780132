use crate::traits::{ApiError, ApiResult, UploadApi};
use async_trait::async_trait;
use aws_config::meta::region::RegionProviderChain;
use aws_config::retry::RetryConfig;
use aws_config::BehaviorVersion;
use aws_sdk_devicefarm::error::{DisplayErrorContext, SdkError};
use aws_sdk_devicefarm::operation::delete_upload::DeleteUploadError;
use aws_sdk_devicefarm::operation::get_upload::GetUploadError;
use aws_sdk_devicefarm::operation::update_upload::UpdateUploadError;
use aws_sdk_devicefarm::types::{Upload as SdkUpload, UploadType as SdkUploadType};
use aws_sdk_devicefarm::Client;
use devicefarm_core::models::{CreateUploadRequest, UpdateUploadRequest};
use devicefarm_core::{BackendKind, Upload, UploadType};
use std::error::Error as StdError;
use std::fmt::Debug;
use std::time::Instant;

/// Device Farm implementation backed by the AWS SDK
#[derive(Clone)]
pub struct AwsDeviceFarm {
    client: Client,
}

impl AwsDeviceFarm {
    /// Create a new AwsDeviceFarm instance
    ///
    /// # Arguments
    /// * `region` - AWS region (Device Farm is served from `us-west-2`)
    /// * `endpoint_url` - Optional custom endpoint, e.g. a local emulator
    /// * `max_attempts` - Transport-level attempts per call, handled by the SDK
    pub async fn new(
        region: String,
        endpoint_url: Option<String>,
        max_attempts: u32,
    ) -> ApiResult<Self> {
        if max_attempts == 0 {
            return Err(ApiError::ConfigError(
                "max_attempts must be at least 1".to_string(),
            ));
        }

        let region_provider =
            RegionProviderChain::first_try(aws_config::Region::new(region.clone()));

        let retry_config = RetryConfig::standard().with_max_attempts(max_attempts);

        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(region_provider)
            .retry_config(retry_config)
            .load()
            .await;

        let client = if let Some(ref endpoint) = endpoint_url {
            let devicefarm_config = aws_sdk_devicefarm::config::Builder::from(&config)
                .endpoint_url(endpoint)
                .build();
            Client::from_conf(devicefarm_config)
        } else {
            Client::new(&config)
        };

        tracing::debug!(
            region = %region,
            endpoint = ?endpoint_url,
            max_attempts = max_attempts,
            "Device Farm client initialized"
        );

        Ok(AwsDeviceFarm { client })
    }
}

/// Map an SDK failure onto `ApiError`, singling out the operation's not-found case.
fn map_sdk_error<E, R>(
    operation: &'static str,
    arn: &str,
    err: SdkError<E, R>,
    is_not_found: fn(&E) -> bool,
) -> ApiError
where
    E: StdError + Send + Sync + 'static,
    R: Debug,
{
    let message = DisplayErrorContext(&err).to_string();
    match err.as_service_error() {
        Some(service_err) if is_not_found(service_err) => ApiError::NotFound(arn.to_string()),
        Some(_) => ApiError::Rejected { operation, message },
        None => ApiError::Transport { operation, message },
    }
}

fn never_not_found<E>(_: &E) -> bool {
    false
}

fn convert_upload(operation: &'static str, upload: Option<&SdkUpload>) -> ApiResult<Upload> {
    let upload = upload.ok_or_else(|| ApiError::InvalidResponse {
        operation,
        message: "response did not contain an upload".to_string(),
    })?;

    let arn = upload.arn().ok_or_else(|| ApiError::InvalidResponse {
        operation,
        message: "upload has no ARN".to_string(),
    })?;

    let upload_type = upload.r#type().and_then(|t| match t.as_str().parse::<UploadType>() {
        Ok(kind) => Some(kind),
        Err(e) => {
            tracing::warn!(
                arn = %arn,
                upload_type = %t.as_str(),
                error = %e,
                "Unrecognized Device Farm upload type"
            );
            None
        }
    });

    Ok(Upload {
        arn: arn.to_string(),
        name: upload.name().map(str::to_string),
        upload_type,
        content_type: upload.content_type().map(str::to_string),
        url: upload.url().map(str::to_string),
        category: upload.category().map(|c| c.as_str().to_string()),
        metadata: upload.metadata().map(str::to_string),
    })
}

#[async_trait]
impl UploadApi for AwsDeviceFarm {
    async fn create_upload(&self, request: CreateUploadRequest) -> ApiResult<Upload> {
        let start = Instant::now();

        let mut call = self
            .client
            .create_upload()
            .name(&request.name)
            .project_arn(&request.project_arn)
            .r#type(SdkUploadType::from(request.upload_type.as_str()));

        if let Some(ref content_type) = request.content_type {
            call = call.content_type(content_type);
        }

        let output = call.send().await.map_err(|e| {
            let err = map_sdk_error("CreateUpload", &request.project_arn, e, never_not_found);
            tracing::debug!(
                error = %err,
                project_arn = %request.project_arn,
                upload_type = %request.upload_type,
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "Device Farm CreateUpload failed"
            );
            err
        })?;

        let upload = convert_upload("CreateUpload", output.upload())?;

        tracing::info!(
            arn = %upload.arn,
            project_arn = %request.project_arn,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Device Farm CreateUpload successful"
        );

        Ok(upload)
    }

    async fn get_upload(&self, arn: &str) -> ApiResult<Upload> {
        let start = Instant::now();

        let output = self
            .client
            .get_upload()
            .arn(arn)
            .send()
            .await
            .map_err(|e| {
                let err =
                    map_sdk_error("GetUpload", arn, e, GetUploadError::is_not_found_exception);
                if !err.is_not_found() {
                    tracing::debug!(
                        error = %err,
                        arn = %arn,
                        duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                        "Device Farm GetUpload failed"
                    );
                }
                err
            })?;

        let upload = convert_upload("GetUpload", output.upload())?;

        tracing::debug!(
            arn = %arn,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Device Farm GetUpload successful"
        );

        Ok(upload)
    }

    async fn update_upload(&self, request: UpdateUploadRequest) -> ApiResult<Upload> {
        let start = Instant::now();

        let output = self
            .client
            .update_upload()
            .arn(&request.arn)
            .set_name(request.name.clone())
            .set_content_type(request.content_type.clone())
            .send()
            .await
            .map_err(|e| {
                let err = map_sdk_error(
                    "UpdateUpload",
                    &request.arn,
                    e,
                    UpdateUploadError::is_not_found_exception,
                );
                tracing::debug!(
                    error = %err,
                    arn = %request.arn,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "Device Farm UpdateUpload failed"
                );
                err
            })?;

        let upload = convert_upload("UpdateUpload", output.upload())?;

        tracing::info!(
            arn = %request.arn,
            name_changed = request.name.is_some(),
            content_type_changed = request.content_type.is_some(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Device Farm UpdateUpload successful"
        );

        Ok(upload)
    }

    async fn delete_upload(&self, arn: &str) -> ApiResult<()> {
        let start = Instant::now();

        self.client
            .delete_upload()
            .arn(arn)
            .send()
            .await
            .map_err(|e| {
                let err = map_sdk_error(
                    "DeleteUpload",
                    arn,
                    e,
                    DeleteUploadError::is_not_found_exception,
                );
                if !err.is_not_found() {
                    tracing::debug!(
                        error = %err,
                        arn = %arn,
                        duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                        "Device Farm DeleteUpload failed"
                    );
                }
                err
            })?;

        tracing::info!(
            arn = %arn,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Device Farm DeleteUpload successful"
        );

        Ok(())
    }

    fn backend_type(&self) -> BackendKind {
        BackendKind::Aws
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARN: &str = "arn:aws:devicefarm:us-west-2:123456789012:upload:p/u";

    #[test]
    fn convert_known_upload() {
        let sdk = SdkUpload::builder()
            .arn(ARN)
            .name("app.apk")
            .r#type(SdkUploadType::AndroidApp)
            .build();

        let upload = convert_upload("GetUpload", Some(&sdk)).unwrap();
        assert_eq!(upload.arn, ARN);
        assert_eq!(upload.name.as_deref(), Some("app.apk"));
        assert_eq!(upload.upload_type, Some(UploadType::AndroidApp));
    }

    #[test]
    fn unrecognized_upload_type_is_kept_readable() {
        let sdk = SdkUpload::builder()
            .arn(ARN)
            .name("future.bin")
            .r#type(SdkUploadType::from("SOME_FUTURE_TEST_PACKAGE"))
            .build();

        let upload = convert_upload("GetUpload", Some(&sdk)).unwrap();
        assert_eq!(upload.arn, ARN);
        assert_eq!(upload.upload_type, None);
    }

    #[test]
    fn missing_upload_is_invalid_response() {
        let err = convert_upload("GetUpload", None).unwrap_err();
        assert!(matches!(err, ApiError::InvalidResponse { .. }));
    }
}
