use crate::dependency_resolution::domain::{build_graph, DependencyGraph, Ecosystem, NodeRecord};
use crate::shared::Result;
use std::collections::HashSet;
use std::path::Path;

/// Raw collector output consumed by the graph engine
#[derive(Debug, Clone)]
pub struct CollectedDependencies {
    pub ecosystem: Ecosystem,
    /// Identity of the scanned project itself
    pub root: String,
    pub nodes: Vec<(String, NodeRecord)>,
    /// Direct requirement edges, including `root -> X` for every direct dependency
    pub edges: Vec<(String, String)>,
    /// Direct requirements as declared by the manifest
    pub declared_direct: HashSet<String>,
}

impl CollectedDependencies {
    pub fn new(ecosystem: Ecosystem, root: impl Into<String>) -> Self {
        Self {
            ecosystem,
            root: root.into(),
            nodes: Vec::new(),
            edges: Vec::new(),
            declared_direct: HashSet::new(),
        }
    }

    /// Freezes the collected records into a dependency graph
    pub fn to_graph(&self) -> DependencyGraph {
        build_graph(
            self.ecosystem,
            &self.root,
            self.nodes.iter().cloned(),
            self.edges.iter().cloned(),
        )
    }
}

/// DependencyCollector port - one implementation per package manager
///
/// Collectors only gather raw nodes, edges and metadata. Classification,
/// paths and depth are the graph engine's job.
pub trait DependencyCollector: Send + Sync {
    fn ecosystem(&self) -> Ecosystem;

    /// Whether the directory holds a project of this ecosystem
    fn detect(&self, project_path: &Path) -> bool;

    /// Collects the raw dependency data of the project
    ///
    /// # Errors
    /// - `DeplisterError::ProjectNotFound` if the manifest is missing
    /// - `DeplisterError::InvalidProject` if manifest or tool output is malformed
    /// - `DeplisterError::ScanFailed` if an external tool invocation fails
    fn collect(&self, project_path: &Path) -> Result<CollectedDependencies>;
}
