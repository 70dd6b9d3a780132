//! Project ARN recovery
//!
//! `GetUpload` does not report which project an upload belongs to. The
//! project id is the first segment of the upload ARN's resource path
//! (`upload:<project-id>/<upload-id>`), so the project ARN is rebuilt from it
//! in the caller's account, partition and region.

use devicefarm_core::constants::{UPLOAD_ID_SEPARATOR, UPLOAD_RESOURCE_PREFIX};
use devicefarm_core::{AccountContext, Arn};

use crate::error::DecodeError;

/// Derive the owning project's ARN from an upload ARN.
pub fn decode_project_arn(
    upload_arn: &str,
    context: &AccountContext,
) -> Result<String, DecodeError> {
    let arn: Arn = upload_arn.parse().map_err(|source| DecodeError::Parse {
        value: upload_arn.to_string(),
        source,
    })?;

    // A resource without the prefix is split as-is.
    let resource = arn
        .resource
        .strip_prefix(UPLOAD_RESOURCE_PREFIX)
        .unwrap_or(&arn.resource);

    let parts: Vec<&str> = resource.split(UPLOAD_ID_SEPARATOR).collect();
    match parts.as_slice() {
        [project_id, _upload_id] => Ok(context.project_arn(project_id).to_string()),
        _ => Err(DecodeError::UnexpectedFormat {
            resource: resource.to_string(),
        }),
    }
}
