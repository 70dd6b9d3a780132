/// Service name used in Device Farm ARNs.
pub const SERVICE_NAME: &str = "devicefarm";

/// Device Farm is only offered in this region.
pub const DEFAULT_REGION: &str = "us-west-2";

pub const DEFAULT_PARTITION: &str = "aws";

/// Resource prefix of an upload ARN (`upload:{project_id}/{upload_id}`).
pub const UPLOAD_RESOURCE_PREFIX: &str = "upload:";

/// Resource prefix of a project ARN (`project:{project_id}`).
pub const PROJECT_RESOURCE_PREFIX: &str = "project:";

/// Separator between the project id and the upload id in an upload ARN.
pub const UPLOAD_ID_SEPARATOR: char = '/';

/// Transport-level retry attempts handed to the SDK.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Account used by the in-memory backend when none is configured.
pub const MEMORY_ACCOUNT_ID: &str = "000000000000";
