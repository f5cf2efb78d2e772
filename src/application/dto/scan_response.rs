use crate::dependency_resolution::domain::{DependencyGraph, Ecosystem, ResolvedDependency};

/// ScanResponse - Internal response DTO from the dependency scan use case
///
/// Carries the resolved records for formatters and the raw graph for
/// ad-hoc queries such as re-deriving edges for visualization.
#[derive(Debug, Clone)]
pub struct ScanResponse {
    /// Package manager the project was detected as
    pub project_type: Ecosystem,
    /// Report records sorted by name, after exclusion filters
    pub dependencies: Vec<ResolvedDependency>,
    /// The frozen graph the records were resolved from
    pub graph: DependencyGraph,
    /// Number of records dropped by exclusion patterns
    pub excluded_count: usize,
}

impl ScanResponse {
    pub fn new(
        project_type: Ecosystem,
        dependencies: Vec<ResolvedDependency>,
        graph: DependencyGraph,
        excluded_count: usize,
    ) -> Self {
        Self {
            project_type,
            dependencies,
            graph,
            excluded_count,
        }
    }

    pub fn direct_count(&self) -> usize {
        self.dependencies.iter().filter(|d| d.is_direct).count()
    }

    pub fn transitive_count(&self) -> usize {
        self.dependencies.len() - self.direct_count()
    }
}
