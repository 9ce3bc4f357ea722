//! Menu image storage.
//!
//! Uploaded files land in the shared upload directory under a unique,
//! sanitized name; only that file name is stored on the menu item row.
//! Both binaries serve the directory at `/uploads`.

use std::path::Path;

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur while storing an upload.
#[derive(Debug, Error)]
pub enum UploadError {
    /// Filesystem error while writing the file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reduce a client-supplied filename to a safe single path component.
///
/// Strips any directory parts, replaces everything outside
/// `[A-Za-z0-9._-]`, and falls back to `upload` for empty input.
fn sanitize_filename(name: &str) -> String {
    let base = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();

    let safe: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let trimmed = safe.trim_matches('.');
    if trimmed.is_empty() {
        "upload".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Write an uploaded menu image to the upload directory.
///
/// Returns the stored file name (unique per upload, so replacing an image
/// never clobbers another item's file).
///
/// # Errors
///
/// Returns `UploadError::Io` if the directory cannot be created or the
/// file cannot be written.
pub async fn save_menu_image(
    upload_dir: &Path,
    original_name: &str,
    bytes: &[u8],
) -> Result<String, UploadError> {
    let stored = format!("{}-{}", Uuid::new_v4(), sanitize_filename(original_name));

    tokio::fs::create_dir_all(upload_dir).await?;
    tokio::fs::write(upload_dir.join(&stored), bytes).await?;

    tracing::info!(file = %stored, size = bytes.len(), "menu image stored");
    Ok(stored)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn keeps_simple_names() {
        assert_eq!(sanitize_filename("latte.png"), "latte.png");
        assert_eq!(sanitize_filename("menu-photo_2.jpg"), "menu-photo_2.jpg");
    }

    #[test]
    fn strips_directories() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("C:\\photos\\cake.png"), "cake.png");
    }

    #[test]
    fn replaces_odd_characters() {
        assert_eq!(sanitize_filename("så kaka!.png"), "s__kaka_.png");
    }

    #[test]
    fn empty_and_dot_names_fall_back() {
        assert_eq!(sanitize_filename(""), "upload");
        assert_eq!(sanitize_filename("..."), "upload");
    }
}
