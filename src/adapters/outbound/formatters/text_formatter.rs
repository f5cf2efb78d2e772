use crate::application::dto::ScanResponse;
use crate::dependency_resolution::domain::ResolvedDependency;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// Type shown when a dependency carries no `dependencyType` property
const DEFAULT_DEPENDENCY_TYPE: &str = "Production";

/// Label for npm's unnamed project root on path lines
const ROOT_LABEL: &str = "(root)";

/// TextFormatter adapter producing the human-readable report
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    fn write_dependency(out: &mut String, dep: &ResolvedDependency) -> std::fmt::Result {
        let directness = if dep.is_direct { "Direct" } else { "Indirect" };
        writeln!(
            out,
            "{}@{} ({}, {})",
            dep.name,
            dep.version,
            dep.dependency_type().unwrap_or(DEFAULT_DEPENDENCY_TYPE),
            directness
        )?;

        if let Some(resolved) = dep.properties.get("resolved") {
            writeln!(out, "  Source: {}", resolved)?;
        }

        if let (false, Some(parent)) = (dep.is_direct, dep.parent.as_deref()) {
            writeln!(out, "  Required by: {}", parent)?;
        }

        if let Some(replaced_by) = dep.properties.get("replaced_by") {
            match dep.properties.get("replaced_version") {
                Some(version) => writeln!(out, "  Replaced by: {}@{}", replaced_by, version)?,
                None => writeln!(out, "  Replaced by: {}", replaced_by)?,
            }
        }

        match dep.depth {
            Some(depth) => writeln!(out, "  Depth: {}", depth)?,
            None => writeln!(out, "  Depth: unreachable")?,
        }
        for path in &dep.paths {
            writeln!(out, "  Path: {}", Self::render_path(path.nodes()))?;
        }

        writeln!(out)
    }

    fn render_path(nodes: &[String]) -> String {
        nodes
            .iter()
            .map(|id| if id.is_empty() { ROOT_LABEL } else { id.as_str() })
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, response: &ScanResponse) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "Project Type: {}", response.project_type)?;
        writeln!(out, "Dependencies:")?;
        writeln!(out, "-------------")?;

        for dep in &response.dependencies {
            Self::write_dependency(&mut out, dep)?;
        }
        Ok(out)
    }
}
