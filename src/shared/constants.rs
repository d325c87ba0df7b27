// =============================================================================
// ENVIRONMENT VARIABLES
// =============================================================================

/// Access key id used to sign requests
pub const ENV_ACCESS_KEY_ID: &str = "S3_ACCESS_KEY_ID";

/// Secret access key used to sign requests
pub const ENV_ACCESS_KEY_SECRET: &str = "S3_ACCESS_KEY_SECRET";

/// Default bucket when none is passed explicitly
pub const ENV_BUCKET_NAME: &str = "S3_BUCKET_NAME";

pub const ENV_REGION: &str = "S3_REGION";

/// Custom S3-compatible endpoint (MinIO, R2, ...)
pub const ENV_ENDPOINT: &str = "S3_ENDPOINT";

pub const ENV_PATH_STYLE: &str = "S3_PATH_STYLE";

// =============================================================================
// DEFAULTS
// =============================================================================

pub const DEFAULT_REGION: &str = "us-east-1";

/// Content type used when the file extension is not recognized
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Presigned URL lifetime in seconds (1 hour)
pub const DEFAULT_PRESIGNED_URL_EXPIRY_SECS: u32 = 3600;

/// Keys returned per listing request, matching the S3 server default
pub const DEFAULT_LIST_PAGE_SIZE: usize = 1000;

/// Separator used to emulate directories in object keys
pub const KEY_SEPARATOR: char = '/';
