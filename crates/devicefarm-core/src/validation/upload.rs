//! Upload field validation
//!
//! Length limits for the declared fields and the ARN check applied to
//! `project_arn`:
//! - partition: `aws` optionally followed by `-suffix` groups
//! - region: empty, or shaped like `us-west-2`
//! - account: empty, 12 digits, or one of the service-owned aliases
//! - resource: non-empty

use std::borrow::Cow;

use regex::Regex;
use validator::ValidationError;

use crate::arn::{Arn, ArnError};

/// Minimum length of an upload name
pub const MIN_NAME_LENGTH: u64 = 1;

/// Maximum length of an upload name (256 characters)
pub const MAX_NAME_LENGTH: u64 = 256;

/// Maximum length of an upload content type (64 characters)
pub const MAX_CONTENT_TYPE_LENGTH: u64 = 64;

const PARTITION_PATTERN: &str = r"^aws(-[a-z]+)*$";
const REGION_PATTERN: &str = r"^[a-z]{2}(-[a-z]+)+-\d$";
const ACCOUNT_ID_PATTERN: &str = r"^(aws|aws-managed|third-party|\d{12}|cw.{10})$";

fn compile(pattern: &str, value: &str) -> Result<Regex, ArnError> {
    Regex::new(pattern).map_err(|e| ArnError::Invalid {
        value: value.to_string(),
        reason: format!("failed to compile validation pattern: {}", e),
    })
}

fn invalid(value: &str, reason: &str) -> ArnError {
    ArnError::Invalid {
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Validate that `value` is a well-formed ARN.
///
/// An empty string is accepted; required-ness is checked by the caller.
pub fn validate_arn(value: &str) -> Result<(), ArnError> {
    if value.is_empty() {
        return Ok(());
    }

    let arn: Arn = value.parse().map_err(|e: ArnError| invalid(value, &e.to_string()))?;

    if arn.partition.is_empty() || !compile(PARTITION_PATTERN, value)?.is_match(&arn.partition) {
        return Err(invalid(value, "invalid partition value"));
    }

    if !arn.region.is_empty() && !compile(REGION_PATTERN, value)?.is_match(&arn.region) {
        return Err(invalid(value, "invalid region value"));
    }

    if !arn.account_id.is_empty()
        && !compile(ACCOUNT_ID_PATTERN, value)?.is_match(&arn.account_id)
    {
        return Err(invalid(value, "invalid account ID value"));
    }

    if arn.resource.is_empty() {
        return Err(invalid(value, "invalid resource value"));
    }

    Ok(())
}

/// `validator` adapter for [`validate_arn`] that also rejects empty values.
pub fn validate_project_arn(value: &str) -> Result<(), ValidationError> {
    let result = if value.is_empty() {
        Err(invalid(value, "value is required"))
    } else {
        validate_arn(value)
    };

    result.map_err(|e| {
        let mut error = ValidationError::new("arn");
        error.message = Some(Cow::Owned(e.to_string()));
        error
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_arn_valid() {
        assert!(validate_arn("arn:aws:devicefarm:us-west-2:123456789012:project:abc").is_ok());
        assert!(validate_arn("arn:aws-us-gov:iam::123456789012:role/x").is_ok());
        assert!(validate_arn("arn:aws:s3:::bucket").is_ok());
        assert!(validate_arn("").is_ok());
    }

    #[test]
    fn test_validate_arn_invalid_partition() {
        assert!(validate_arn("arn:gcp:devicefarm:us-west-2:123456789012:project:a").is_err());
        assert!(validate_arn("arn::devicefarm:us-west-2:123456789012:project:a").is_err());
    }

    #[test]
    fn test_validate_arn_invalid_region() {
        assert!(validate_arn("arn:aws:devicefarm:uswest2:123456789012:project:a").is_err());
    }

    #[test]
    fn test_validate_arn_invalid_account() {
        assert!(validate_arn("arn:aws:devicefarm:us-west-2:1234:project:a").is_err());
    }

    #[test]
    fn test_validate_arn_missing_resource() {
        assert!(validate_arn("arn:aws:devicefarm:us-west-2:123456789012:").is_err());
    }

    #[test]
    fn test_validate_arn_not_an_arn() {
        let err = validate_arn("project-123").unwrap_err();
        assert!(err.to_string().contains("project-123"));
    }

    #[test]
    fn test_validate_project_arn_requires_value() {
        assert!(validate_project_arn("").is_err());
        assert!(validate_project_arn("arn:aws:devicefarm:us-west-2:123456789012:project:a").is_ok());
    }
}
