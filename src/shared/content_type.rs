use std::path::Path;

use crate::shared::constants::DEFAULT_CONTENT_TYPE;

/// Guess the MIME type of a local file from its extension.
///
/// Falls back to `application/octet-stream` when the extension is missing
/// or unknown. The file contents are never inspected.
pub fn content_type_for_path(path: &Path) -> String {
    mime_guess::from_path(path)
        .first()
        .map(|mime| mime.essence_str().to_string())
        .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(
            content_type_for_path(Path::new("report.pdf")),
            "application/pdf"
        );
        assert_eq!(content_type_for_path(Path::new("photo.png")), "image/png");
        assert_eq!(
            content_type_for_path(Path::new("/data/nested/photo.JPG")),
            "image/jpeg"
        );
        assert_eq!(content_type_for_path(Path::new("notes.txt")), "text/plain");
    }

    #[test]
    fn test_unknown_extension_defaults_to_binary() {
        assert_eq!(
            content_type_for_path(Path::new("blob.zzzunknown")),
            DEFAULT_CONTENT_TYPE
        );
        assert_eq!(content_type_for_path(Path::new("Makefile")), DEFAULT_CONTENT_TYPE);
    }
}
