#[cfg(feature = "devicefarm-aws")]
use crate::AwsDeviceFarm;
#[cfg(feature = "devicefarm-memory")]
use crate::InMemoryDeviceFarm;
use crate::{ApiError, ApiResult, BackendKind, UploadApi};
use devicefarm_core::Config;
use std::sync::Arc;

/// Create an upload API client based on configuration
pub async fn create_client(config: &Config) -> ApiResult<Arc<dyn UploadApi>> {
    match config.backend {
        #[cfg(feature = "devicefarm-aws")]
        BackendKind::Aws => {
            let client = AwsDeviceFarm::new(
                config.region.clone(),
                config.endpoint.clone(),
                config.max_attempts,
            )
            .await?;
            Ok(Arc::new(client))
        }

        #[cfg(not(feature = "devicefarm-aws"))]
        BackendKind::Aws => Err(ApiError::ConfigError(
            "AWS backend not available (devicefarm-aws feature not enabled)".to_string(),
        )),

        #[cfg(feature = "devicefarm-memory")]
        BackendKind::Memory => {
            if config.endpoint.is_some() {
                return Err(ApiError::ConfigError(
                    "DEVICEFARM_ENDPOINT has no effect on the memory backend".to_string(),
                ));
            }
            Ok(Arc::new(InMemoryDeviceFarm::new()))
        }

        #[cfg(not(feature = "devicefarm-memory"))]
        BackendKind::Memory => Err(ApiError::ConfigError(
            "Memory backend not available (devicefarm-memory feature not enabled)".to_string(),
        )),
    }
}

#[cfg(all(test, feature = "devicefarm-memory"))]
mod tests {
    use super::*;

    fn memory_config() -> Config {
        Config {
            backend: BackendKind::Memory,
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn memory_backend_is_created() {
        let client = create_client(&memory_config()).await.unwrap();
        assert_eq!(client.backend_type(), BackendKind::Memory);
    }

    #[tokio::test]
    async fn memory_backend_rejects_endpoint() {
        let config = Config {
            endpoint: Some("http://localhost:4566".to_string()),
            ..memory_config()
        };
        let err = create_client(&config).await.err().unwrap();
        assert!(matches!(err, ApiError::ConfigError(_)));
    }
}
