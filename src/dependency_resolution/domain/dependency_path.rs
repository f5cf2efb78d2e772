use serde::Serialize;

/// Ordered chain of node identities from the root to a target
///
/// Every adjacent pair is a direct edge in the graph. The root is the first
/// element and does not count towards `depth`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyPath {
    path: Vec<String>,
    depth: usize,
}

impl DependencyPath {
    pub fn new(path: Vec<String>) -> Self {
        let depth = path.len().saturating_sub(1);
        Self { path, depth }
    }

    pub fn nodes(&self) -> &[String] {
        &self.path
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn target(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }

    /// The node immediately before the target
    pub fn parent(&self) -> Option<&str> {
        self.path
            .len()
            .checked_sub(2)
            .map(|idx| self.path[idx].as_str())
    }
}
