use super::{DepthResolver, PathEnumerator};
use crate::dependency_resolution::domain::{DependencyGraph, ResolvedDependency};
use crate::shared::error::DeplisterError;
use crate::shared::Result;
use rayon::prelude::*;
use std::collections::{BTreeSet, HashMap, HashSet};

/// DependencyResolver service turning a frozen graph into report records
///
/// This service contains pure business logic with no I/O. Each node is
/// resolved independently against the read-only graph, so the work fans
/// out over the rayon pool and joins back in name order.
pub struct DependencyResolver;

impl DependencyResolver {
    /// Resolves every node except the root
    ///
    /// # Arguments
    /// * `graph` - The frozen dependency graph
    /// * `declared_direct` - Direct requirements declared by the manifest itself
    ///
    /// # Returns
    /// One `ResolvedDependency` per node, sorted by name
    ///
    /// # Errors
    /// Returns `DeplisterError::InvalidProject` when the graph holds no
    /// dependency besides the root. An empty result is treated as a
    /// malformed or unsupported project, not as a dependency-free one.
    pub fn resolve(
        graph: &DependencyGraph,
        declared_direct: &HashSet<String>,
    ) -> Result<Vec<ResolvedDependency>> {
        let ids = graph.dependency_ids();
        if ids.is_empty() {
            return Err(DeplisterError::invalid_project(format!(
                "no {} dependencies were found for the project",
                graph.ecosystem()
            ))
            .into());
        }

        let enumerator = PathEnumerator::new(graph);
        let reverse = graph.reverse_edges();

        let resolved: Vec<ResolvedDependency> = ids
            .par_iter()
            .map(|id| Self::resolve_node(graph, &enumerator, &reverse, declared_direct, id))
            .collect();

        if cfg!(debug_assertions) {
            Self::check_depths(graph, &resolved);
        }

        Ok(resolved)
    }

    /// The breadth-first sweep must agree with the path-derived depth
    fn check_depths(graph: &DependencyGraph, resolved: &[ResolvedDependency]) {
        let bfs = DepthResolver::new(graph).bfs_depths();
        for dep in resolved {
            debug_assert_eq!(
                dep.depth,
                bfs.get(dep.name.as_str()).copied(),
                "depth mismatch for {}",
                dep.name
            );
        }
    }

    fn resolve_node(
        graph: &DependencyGraph,
        enumerator: &PathEnumerator<'_>,
        reverse: &HashMap<&str, BTreeSet<&str>>,
        declared_direct: &HashSet<String>,
        id: &str,
    ) -> ResolvedDependency {
        let root = graph.root();
        let ecosystem = graph.ecosystem();
        let (version, metadata) = match graph.node(id) {
            Some(record) => (record.version().to_string(), record.metadata().clone()),
            None => Default::default(),
        };

        // Both sources must agree: the root edge and manifest declaration say
        // "direct", and the ecosystem's own tooling does not say "indirect".
        let is_direct = graph.has_edge(root, id)
            && declared_direct.contains(id)
            && !metadata.marks_indirect();

        let parents: Vec<String> = reverse
            .get(id)
            .into_iter()
            .flatten()
            .filter(|parent| **parent != root || ecosystem.reports_root_parent())
            .map(|parent| parent.to_string())
            .collect();

        let parent = if is_direct {
            None
        } else {
            parents.iter().find(|p| p.as_str() != root).cloned()
        };

        let paths = enumerator.find_all_paths(root, id);
        let depth = DepthResolver::min_depth_of(&paths);

        let mut properties = metadata.properties();
        if let Some(dependency_type) = metadata.dependency_type(is_direct) {
            properties.insert("dependencyType".to_string(), dependency_type.to_string());
        }
        properties.insert("manager".to_string(), ecosystem.to_string());

        ResolvedDependency {
            name: id.to_string(),
            version,
            ecosystem,
            is_direct,
            parent,
            parents,
            paths,
            depth,
            properties,
        }
    }
}
