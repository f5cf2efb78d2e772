use std::path::PathBuf;

/// ScanRequest - Internal request DTO for the dependency scan use case
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// Path to the project directory holding the manifest
    pub project_path: PathBuf,
    /// Patterns for excluding dependencies from the report
    pub exclude_patterns: Vec<String>,
}

impl ScanRequest {
    pub fn new(project_path: PathBuf, exclude_patterns: Vec<String>) -> Self {
        Self {
            project_path,
            exclude_patterns,
        }
    }
}
