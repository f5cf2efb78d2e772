use super::{DependencyPath, Ecosystem};
use std::collections::BTreeMap;

/// Final report record for a single dependency
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDependency {
    pub name: String,
    pub version: String,
    pub ecosystem: Ecosystem,
    pub is_direct: bool,
    /// Primary parent for display. Absent for direct dependencies.
    pub parent: Option<String>,
    /// Every node with an edge to this one, sorted
    pub parents: Vec<String>,
    pub paths: Vec<DependencyPath>,
    /// Minimum depth over `paths`; `None` when the root cannot reach the node
    pub depth: Option<usize>,
    pub properties: BTreeMap<String, String>,
}

impl ResolvedDependency {
    pub fn dependency_type(&self) -> Option<&str> {
        self.properties.get("dependencyType").map(String::as_str)
    }

    pub fn is_reachable(&self) -> bool {
        self.depth.is_some()
    }
}
