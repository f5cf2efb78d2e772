use crate::application::dto::ScanResponse;
use crate::dependency_resolution::domain::{DependencyPath, ResolvedDependency};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;
use std::collections::BTreeMap;

/// Depth written for dependencies the root cannot reach
const UNREACHABLE_DEPTH: i64 = -1;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportDocument<'a> {
    project_type: &'a str,
    dependencies: Vec<DependencyEntry<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DependencyEntry<'a> {
    name: &'a str,
    version: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
    is_direct_dependency: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent: Option<&'a str>,
    parents: &'a [String],
    depth: i64,
    paths: &'a [DependencyPath],
    properties: &'a BTreeMap<String, String>,
}

impl<'a> From<&'a ResolvedDependency> for DependencyEntry<'a> {
    fn from(dep: &'a ResolvedDependency) -> Self {
        Self {
            name: &dep.name,
            version: &dep.version,
            kind: dep.ecosystem.as_str(),
            is_direct_dependency: dep.is_direct,
            parent: dep.parent.as_deref(),
            parents: &dep.parents,
            depth: dep
                .depth
                .and_then(|d| i64::try_from(d).ok())
                .unwrap_or(UNREACHABLE_DEPTH),
            paths: &dep.paths,
            properties: &dep.properties,
        }
    }
}

/// JsonFormatter adapter producing the machine-readable report
///
/// Output is compact by default and indented with `pretty`.
/// A trailing newline is always written.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, response: &ScanResponse) -> Result<String> {
        let document = ReportDocument {
            project_type: response.project_type.as_str(),
            dependencies: response.dependencies.iter().map(DependencyEntry::from).collect(),
        };

        let mut json = if self.pretty {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_resolution::domain::{DependencyGraph, Ecosystem};
    use serde_json::Value;

    fn dependency(name: &str, is_direct: bool, depth: Option<usize>) -> ResolvedDependency {
        let mut properties = BTreeMap::new();
        properties.insert("manager".to_string(), "npm".to_string());
        ResolvedDependency {
            name: name.to_string(),
            version: "1.0.0".to_string(),
            ecosystem: Ecosystem::Npm,
            is_direct,
            parent: (!is_direct).then(|| "express".to_string()),
            parents: vec!["express".to_string()],
            paths: depth
                .map(|_| vec![DependencyPath::new(vec![
                    "".to_string(),
                    "express".to_string(),
                    name.to_string(),
                ])])
                .unwrap_or_default(),
            depth,
            properties,
        }
    }

    fn response(dependencies: Vec<ResolvedDependency>) -> ScanResponse {
        ScanResponse::new(
            Ecosystem::Npm,
            dependencies,
            DependencyGraph::new(Ecosystem::Npm, ""),
            0,
        )
    }

    #[test]
    fn test_document_shape() {
        let output = JsonFormatter::new(false)
            .format(&response(vec![dependency("accepts", false, Some(2))]))
            .unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["projectType"], "npm");
        let dep = &value["dependencies"][0];
        assert_eq!(dep["name"], "accepts");
        assert_eq!(dep["type"], "npm");
        assert_eq!(dep["isDirectDependency"], false);
        assert_eq!(dep["parent"], "express");
        assert_eq!(dep["depth"], 2);
        assert_eq!(dep["paths"][0]["path"][1], "express");
        assert_eq!(dep["paths"][0]["depth"], 2);
        assert_eq!(dep["properties"]["manager"], "npm");
    }

    #[test]
    fn test_direct_dependency_omits_parent() {
        let output = JsonFormatter::default()
            .format(&response(vec![dependency("express", true, Some(1))]))
            .unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert!(value["dependencies"][0].get("parent").is_none());
    }

    #[test]
    fn test_unreachable_depth_is_negative_one() {
        let output = JsonFormatter::new(false)
            .format(&response(vec![dependency("stray", false, None)]))
            .unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["dependencies"][0]["depth"], -1);
        assert_eq!(value["dependencies"][0]["paths"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_pretty_output_is_indented() {
        let compact = JsonFormatter::new(false).format(&response(vec![])).unwrap();
        let pretty = JsonFormatter::new(true).format(&response(vec![])).unwrap();

        assert_eq!(compact, "{\"projectType\":\"npm\",\"dependencies\":[]}\n");
        assert!(pretty.contains("\n  \"projectType\": \"npm\""));
        assert!(pretty.ends_with("}\n"));
    }
}
