//! Object key helpers
//!
//! Buckets have no directories. Keys that share a `/`-separated prefix are
//! presented as folders by convention only.

use std::path::Path;

use crate::shared::constants::KEY_SEPARATOR;

/// Key used when an upload does not name its destination: the file's base name.
pub fn default_key_for_path(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

/// Normalize a folder path to a marker key ending in exactly one separator.
///
/// `"a/b"` and `"a/b///"` both become `"a/b/"`.
pub fn folder_key(folder_path: &str) -> String {
    let mut key = folder_path.trim_end_matches(KEY_SEPARATOR).to_string();
    key.push(KEY_SEPARATOR);
    key
}
