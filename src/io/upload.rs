//! Upload collaborator seams for captured snapshots
//!
//! The studio exports a rendered scene as an image and hands the bytes
//! to an uploader against a destination issued by a URL provider. The
//! network round trip lives outside this crate; [`DirectoryStore`]
//! gives the CLI and tests a filesystem-backed implementation of both
//! seams.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::io::error::StudioError;

/// Failure reported by an upload collaborator
///
/// Kept separate from [`StudioError`]: collaborator failures are
/// transient, user-visible conditions rather than caller logic errors.
#[derive(Debug, Clone)]
pub struct UploadError {
    /// Destination the transfer was addressed to
    pub destination: String,
    /// Human-readable failure description
    pub reason: String,
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Upload to '{}' failed: {}", self.destination, self.reason)
    }
}

impl std::error::Error for UploadError {}

impl From<UploadError> for StudioError {
    fn from(err: UploadError) -> Self {
        Self::Upload {
            destination: err.destination,
            reason: err.reason,
        }
    }
}

/// Issues destinations for snapshot uploads
pub trait UploadUrlProvider {
    /// Obtain a destination for a named file of the given content type
    ///
    /// # Errors
    ///
    /// Returns an [`UploadError`] when no destination can be issued
    /// for the request.
    fn request_upload_url(
        &self,
        file_name: &str,
        file_type: &str,
    ) -> std::result::Result<String, UploadError>;
}

/// Accepts snapshot bytes for delivery to an issued destination
pub trait SnapshotUploader {
    /// Deliver `bytes` to `destination`
    ///
    /// # Errors
    ///
    /// Returns an [`UploadError`] when the transfer fails.
    fn upload(&self, bytes: &[u8], destination: &str) -> std::result::Result<(), UploadError>;
}

/// Filesystem-backed store implementing both collaborator seams
///
/// Destinations are paths under the store's root directory.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// Create a store rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory destinations are issued under
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl UploadUrlProvider for DirectoryStore {
    fn request_upload_url(
        &self,
        file_name: &str,
        file_type: &str,
    ) -> std::result::Result<String, UploadError> {
        if file_name.is_empty() {
            return Err(UploadError {
                destination: self.root.display().to_string(),
                reason: "file name is empty".to_string(),
            });
        }

        if !file_type.starts_with("image/") {
            return Err(UploadError {
                destination: self.root.display().to_string(),
                reason: format!("unsupported content type '{file_type}'"),
            });
        }

        Ok(self.root.join(file_name).display().to_string())
    }
}

impl SnapshotUploader for DirectoryStore {
    fn upload(&self, bytes: &[u8], destination: &str) -> std::result::Result<(), UploadError> {
        let path = Path::new(destination);

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| UploadError {
                    destination: destination.to_string(),
                    reason: e.to_string(),
                })?;
            }
        }

        std::fs::write(path, bytes).map_err(|e| UploadError {
            destination: destination.to_string(),
            reason: e.to_string(),
        })
    }
}
