use crate::dependency_resolution::domain::{DependencyGraph, DependencyPath};
use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

/// PathEnumerator service producing every simple path between two nodes
///
/// The search is a depth-first walk that keeps its visited set on the
/// current path only. A node may appear on many different paths but never
/// twice in the same one, so cycles terminate without hiding alternative
/// routes. Once the target is reached the walk does not continue past it.
///
/// The enumerator only borrows the graph, so one instance can be shared by
/// several threads enumerating different targets.
pub struct PathEnumerator<'g> {
    graph: &'g DependencyGraph,
    reverse: HashMap<&'g str, BTreeSet<&'g str>>,
}

impl<'g> PathEnumerator<'g> {
    pub fn new(graph: &'g DependencyGraph) -> Self {
        Self {
            graph,
            reverse: graph.reverse_edges(),
        }
    }

    /// Enumerates every simple path from `from` to `to`
    ///
    /// Returns an empty vector when `to` is unreachable. Paths are produced
    /// in lexicographic edge order, so the output is deterministic.
    pub fn find_all_paths(&self, from: &str, to: &str) -> Vec<DependencyPath> {
        let relevant = self.ancestors_of(to);
        if !relevant.contains(from) {
            return Vec::new();
        }

        let mut results = Vec::new();
        let mut path = Vec::new();
        let mut on_path = HashSet::new();
        self.walk(from, to, &relevant, &mut path, &mut on_path, &mut results);
        results
    }

    fn walk<'a>(
        &'a self,
        current: &'a str,
        target: &str,
        relevant: &HashSet<&str>,
        path: &mut Vec<&'a str>,
        on_path: &mut HashSet<&'a str>,
        results: &mut Vec<DependencyPath>,
    ) {
        path.push(current);

        if current == target {
            results.push(DependencyPath::new(
                path.iter().map(|id| id.to_string()).collect(),
            ));
        } else {
            on_path.insert(current);
            for next in self.graph.edges(current) {
                let next = next.as_str();
                if !on_path.contains(next) && relevant.contains(next) {
                    self.walk(next, target, relevant, path, on_path, results);
                }
            }
            on_path.remove(current);
        }

        path.pop();
    }

    /// Nodes that can reach `target`, including the target itself.
    ///
    /// Branches outside this set can never end at the target, so the walk
    /// skips them without changing the result.
    fn ancestors_of<'a>(&'a self, target: &'a str) -> HashSet<&'a str> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut queue = VecDeque::new();
        seen.insert(target);
        queue.push_back(target);

        while let Some(node) = queue.pop_front() {
            if let Some(parents) = self.reverse.get(node) {
                for &parent in parents {
                    if seen.insert(parent) {
                        queue.push_back(parent);
                    }
                }
            }
        }
        seen
    }
}
