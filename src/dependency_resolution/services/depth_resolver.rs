use super::PathEnumerator;
use crate::dependency_resolution::domain::{DependencyGraph, DependencyPath};
use std::collections::{HashMap, VecDeque};

/// DepthResolver service deriving the minimum depth of nodes below the root
///
/// The authoritative value is the minimum `depth` over every enumerated
/// path. [`DepthResolver::bfs_depths`] computes the same numbers for the whole
/// graph in one sweep and must agree with it for every node.
pub struct DepthResolver<'g> {
    graph: &'g DependencyGraph,
    enumerator: PathEnumerator<'g>,
}

impl<'g> DepthResolver<'g> {
    pub fn new(graph: &'g DependencyGraph) -> Self {
        Self {
            graph,
            enumerator: PathEnumerator::new(graph),
        }
    }

    /// Minimum depth of `node` over all paths from the root; `None` if unreachable
    pub fn min_depth(&self, node: &str) -> Option<usize> {
        let paths = self.enumerator.find_all_paths(self.graph.root(), node);
        Self::min_depth_of(&paths)
    }

    /// Minimum depth over an already enumerated path set
    pub fn min_depth_of(paths: &[DependencyPath]) -> Option<usize> {
        paths.iter().map(DependencyPath::depth).min()
    }

    /// Shortest depth of every node reachable from the root, root included at 0
    pub fn bfs_depths(&self) -> HashMap<&'g str, usize> {
        let root = self.graph.root();
        let mut depths: HashMap<&str, usize> = HashMap::new();
        let mut queue = VecDeque::new();
        depths.insert(root, 0);
        queue.push_back(root);

        while let Some(node) = queue.pop_front() {
            let next_depth = depths[node] + 1;
            for child in self.graph.edges(node) {
                if !depths.contains_key(child.as_str()) {
                    depths.insert(child.as_str(), next_depth);
                    queue.push_back(child.as_str());
                }
            }
        }
        depths
    }
}
