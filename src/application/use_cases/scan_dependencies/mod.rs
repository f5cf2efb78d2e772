use crate::application::dto::{ScanRequest, ScanResponse};
use crate::dependency_resolution::services::{DependencyResolver, ReportFilter};
use crate::dependency_resolution::domain::ResolvedDependency;
use crate::ports::outbound::{CollectedDependencies, DependencyCollector, ProgressReporter};
use crate::shared::error::DeplisterError;
use crate::shared::Result;

#[cfg(test)]
mod tests;

/// Number of stages reported through the progress bar
const TOTAL_STAGES: usize = 4;

/// ScanDependenciesUseCase - Core use case for listing project dependencies
///
/// Detects the package manager, collects the raw graph, resolves every node
/// and applies the exclusion filters.
///
/// # Type Parameters
/// * `PR` - ProgressReporter implementation
pub struct ScanDependenciesUseCase<PR> {
    collectors: Vec<Box<dyn DependencyCollector>>,
    progress_reporter: PR,
}

impl<PR> ScanDependenciesUseCase<PR>
where
    PR: ProgressReporter,
{
    /// Creates a new use case; `collectors` are tried in the given order
    pub fn new(collectors: Vec<Box<dyn DependencyCollector>>, progress_reporter: PR) -> Self {
        Self {
            collectors,
            progress_reporter,
        }
    }

    /// Executes the scan
    ///
    /// # Errors
    /// - `DeplisterError::ProjectNotFound` if no collector recognizes the directory
    /// - `DeplisterError::InvalidProject` if the project data is malformed or empty
    /// - `DeplisterError::ScanFailed` if ecosystem tooling fails
    /// - `DeplisterError::Validation` if an exclusion pattern is invalid
    pub fn execute(&self, request: ScanRequest) -> Result<ScanResponse> {
        // Patterns are validated before any expensive work
        let filter = ReportFilter::new(request.exclude_patterns.clone())?;

        // Step 1: Detect project type
        self.progress_reporter
            .report_progress(1, TOTAL_STAGES, Some("detecting project type"));
        let collector = self.detect_collector(&request)?;

        // Step 2: Collect raw graph
        self.progress_reporter
            .report_progress(2, TOTAL_STAGES, Some("collecting dependencies"));
        let collected = self.collect(collector, &request)?;
        let graph = collected.to_graph();

        let dangling = graph.dangling_targets();
        if !dangling.is_empty() {
            self.progress_reporter.report(&format!(
                "ℹ️  {} requirement(s) have no metadata and are treated as leaves",
                dangling.len()
            ));
        }

        // Step 3: Resolve classification, paths and depth
        self.progress_reporter
            .report_progress(3, TOTAL_STAGES, Some("resolving dependency paths"));
        let resolved = DependencyResolver::resolve(&graph, &collected.declared_direct)?;

        // Step 4: Apply exclusion filters
        self.progress_reporter
            .report_progress(4, TOTAL_STAGES, Some("applying filters"));
        let (dependencies, excluded_count) = self.apply_exclusion_filters(&filter, resolved)?;

        let response = ScanResponse::new(collected.ecosystem, dependencies, graph, excluded_count);
        self.progress_reporter.report_completion(&format!(
            "✅ Resolved {} {} dependencies ({} direct, {} transitive)",
            response.dependencies.len(),
            response.project_type,
            response.direct_count(),
            response.transitive_count()
        ));

        Ok(response)
    }

    fn detect_collector(&self, request: &ScanRequest) -> Result<&dyn DependencyCollector> {
        let path = &request.project_path;
        match self.collectors.iter().find(|c| c.detect(path)) {
            Some(collector) => {
                self.progress_reporter.report(&format!(
                    "🔍 Detected {} project at: {}",
                    collector.ecosystem(),
                    path.display()
                ));
                Ok(collector.as_ref())
            }
            None => {
                let supported = self
                    .collectors
                    .iter()
                    .map(|c| c.ecosystem().as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                Err(DeplisterError::ProjectNotFound {
                    path: path.clone(),
                    suggestion: format!(
                        "No package.json or go.mod was found. Supported project types: {}",
                        supported
                    ),
                }
                .into())
            }
        }
    }

    fn collect(
        &self,
        collector: &dyn DependencyCollector,
        request: &ScanRequest,
    ) -> Result<CollectedDependencies> {
        let collected = collector.collect(&request.project_path)?;
        self.progress_reporter.report(&format!(
            "📦 Collected {} node(s) and {} edge(s)",
            collected.nodes.len(),
            collected.edges.len()
        ));
        Ok(collected)
    }

    /// Drops excluded records and warns about patterns that matched nothing
    ///
    /// # Errors
    /// Returns an error if every dependency was excluded
    fn apply_exclusion_filters(
        &self,
        filter: &ReportFilter,
        resolved: Vec<ResolvedDependency>,
    ) -> Result<(Vec<ResolvedDependency>, usize)> {
        if filter.is_empty() {
            return Ok((resolved, 0));
        }

        let original_count = resolved.len();
        let kept = filter.filter(resolved);
        let excluded_count = original_count - kept.len();

        if excluded_count > 0 {
            self.progress_reporter.report(&format!(
                "🚫 Excluded {} dependency(ies) based on filters",
                excluded_count
            ));
        }

        if kept.is_empty() {
            return Err(DeplisterError::Validation {
                message: format!(
                    "All {} dependency(ies) were excluded by the provided filters. \
                     The report would be empty. Please adjust your exclusion patterns.",
                    original_count
                ),
            }
            .into());
        }

        for pattern in filter.unmatched_patterns() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Exclude pattern '{}' did not match any dependencies.",
                pattern
            ));
        }

        Ok((kept, excluded_count))
    }
}
