use crate::shared::Result;
use std::path::Path;

/// ManifestReader port for reading manifest and lock files
///
/// This port abstracts the file system operations needed to read
/// package.json, package-lock.json and go.mod from a project directory.
pub trait ManifestReader: Send + Sync {
    /// Whether `file_name` exists in the project directory
    fn manifest_exists(&self, project_path: &Path, file_name: &str) -> bool;

    /// Reads `file_name` from the project directory
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist
    /// - The file is a symbolic link, not a regular file, or too large
    /// - The file cannot be read due to permissions or I/O errors
    fn read_manifest(&self, project_path: &Path, file_name: &str) -> Result<String>;
}
