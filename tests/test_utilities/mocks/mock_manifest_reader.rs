use deplister::prelude::*;
use std::collections::HashMap;
use std::path::Path;

/// Mock ManifestReader serving manifests from memory
#[derive(Default, Clone)]
pub struct MockManifestReader {
    pub files: HashMap<String, String>,
}

impl MockManifestReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, name: &str, content: &str) -> Self {
        self.files.insert(name.to_string(), content.to_string());
        self
    }
}

impl ManifestReader for MockManifestReader {
    fn manifest_exists(&self, _project_path: &Path, file_name: &str) -> bool {
        self.files.contains_key(file_name)
    }

    fn read_manifest(&self, project_path: &Path, file_name: &str) -> Result<String> {
        match self.files.get(file_name) {
            Some(content) => Ok(content.clone()),
            None => Err(DeplisterError::ProjectNotFound {
                path: project_path.to_path_buf(),
                suggestion: format!("Mock has no {}", file_name),
            }
            .into()),
        }
    }
}
