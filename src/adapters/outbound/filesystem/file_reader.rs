use crate::ports::outbound::ManifestReader;
use crate::shared::error::DeplisterError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading manifests from the file system
///
/// Every read goes through the symlink, file-type and size checks in
/// [`crate::shared::security`].
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn safe_read_file(&self, path: &Path, file_name: &str) -> Result<String> {
        validate_regular_file(path, file_name)?;

        fs::read_to_string(path).map_err(|e| {
            DeplisterError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestReader for FileSystemReader {
    fn manifest_exists(&self, project_path: &Path, file_name: &str) -> bool {
        project_path.join(file_name).exists()
    }

    fn read_manifest(&self, project_path: &Path, file_name: &str) -> Result<String> {
        let manifest_path = project_path.join(file_name);

        if !manifest_path.exists() {
            return Err(DeplisterError::ProjectNotFound {
                path: project_path.to_path_buf(),
                suggestion: format!(
                    "{} does not exist in project directory \"{}\".\n   \
                     Please run in the root directory of the project, or specify the correct path with the --path option.",
                    file_name,
                    project_path.display()
                ),
            }
            .into());
        }

        self.safe_read_file(&manifest_path, file_name)
    }
}
