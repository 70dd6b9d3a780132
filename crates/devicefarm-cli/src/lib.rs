use devicefarm_core::{ErrorMetadata, LogLevel};
use devicefarm_resource::ReadOutcome;
use serde_json::{json, Value};

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Log a failure at the level its metadata asks for.
pub fn log_error<E>(error: &E)
where
    E: ErrorMetadata + std::fmt::Display,
{
    let error_code = error.error_code();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_code = error_code, "Operation failed");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_code = error_code, "Operation failed");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_code = error_code, "Operation failed");
        }
    }
}

/// JSON shape printed for a read: the record, or a removal marker.
pub fn outcome_json(id: &str, outcome: &ReadOutcome) -> serde_json::Result<Value> {
    match outcome {
        ReadOutcome::Found(state) => serde_json::to_value(state),
        ReadOutcome::Removed => Ok(json!({ "id": id, "removed": true })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devicefarm_core::{UploadState, UploadType};

    #[test]
    fn removed_outcome_is_marked() {
        let value = outcome_json("arn:x", &ReadOutcome::Removed).unwrap();
        assert_eq!(value, json!({ "id": "arn:x", "removed": true }));
    }

    #[test]
    fn found_outcome_serializes_state() {
        let state = UploadState {
            id: "arn:x".to_string(),
            arn: "arn:x".to_string(),
            name: "app.apk".to_string(),
            upload_type: Some(UploadType::AndroidApp),
            ..UploadState::default()
        };
        let value = outcome_json("arn:x", &ReadOutcome::Found(state)).unwrap();
        assert_eq!(value["name"], "app.apk");
        assert_eq!(value["type"], "ANDROID_APP");
        assert!(value.get("removed").is_none());
    }
}
