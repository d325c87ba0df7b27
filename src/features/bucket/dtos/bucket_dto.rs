use std::path::PathBuf;

/// Result of a successful upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedObject {
    /// Key the file was stored under
    pub key: String,
    /// Content type sent with the object
    pub content_type: String,
    pub size: u64,
}

/// Result of a successful download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedObject {
    pub key: String,
    /// Local file that was written
    pub path: PathBuf,
    /// Content type reported by the storage service, if any
    pub content_type: Option<String>,
    pub size: u64,
}
