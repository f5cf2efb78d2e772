use super::{Ecosystem, NodeRecord};
use std::collections::{BTreeSet, HashMap};

static NO_EDGES: BTreeSet<String> = BTreeSet::new();

/// DependencyGraph aggregate representing the complete dependency structure
///
/// Nodes are keyed by identity (npm package name or Go module path) and edges
/// point from a node to everything it directly requires. The root identity
/// stands for the scanned project; its edge set lists the direct dependencies.
///
/// Edge targets without a node record are kept as dangling references and
/// behave like leaves. Cycles are allowed.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    ecosystem: Ecosystem,
    root: String,
    nodes: HashMap<String, NodeRecord>,
    edges: HashMap<String, BTreeSet<String>>,
}

impl DependencyGraph {
    pub fn new(ecosystem: Ecosystem, root: impl Into<String>) -> Self {
        Self {
            ecosystem,
            root: root.into(),
            nodes: HashMap::new(),
            edges: HashMap::new(),
        }
    }

    pub fn builder(ecosystem: Ecosystem, root: impl Into<String>) -> DependencyGraphBuilder {
        DependencyGraphBuilder {
            graph: Self::new(ecosystem, root),
        }
    }

    /// Adds or replaces a node record. Duplicate ids are not an error; last write wins.
    pub fn add_node(&mut self, id: impl Into<String>, record: NodeRecord) {
        self.nodes.insert(id.into(), record);
    }

    /// Adds a `from -> to` requirement. The target does not need a node record.
    pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.edges.entry(from.into()).or_default().insert(to.into());
    }

    /// Direct requirements of `id`, empty for unknown ids
    pub fn edges(&self, id: &str) -> &BTreeSet<String> {
        self.edges.get(id).unwrap_or(&NO_EDGES)
    }

    pub fn node(&self, id: &str) -> Option<&NodeRecord> {
        self.nodes.get(id)
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.edges(from).contains(to)
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn ecosystem(&self) -> Ecosystem {
        self.ecosystem
    }

    /// Sorted identities of every node except the root
    pub fn dependency_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .nodes
            .keys()
            .map(String::as_str)
            .filter(|id| *id != self.root)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Inverted adjacency: for each node, the nodes that require it
    pub fn reverse_edges(&self) -> HashMap<&str, BTreeSet<&str>> {
        let mut reverse: HashMap<&str, BTreeSet<&str>> = HashMap::new();
        for (from, targets) in &self.edges {
            for to in targets {
                reverse.entry(to.as_str()).or_default().insert(from.as_str());
            }
        }
        reverse
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum()
    }

    /// Edge targets that have no node record
    pub fn dangling_targets(&self) -> BTreeSet<&str> {
        self.edges
            .values()
            .flatten()
            .map(String::as_str)
            .filter(|id| *id != self.root && !self.nodes.contains_key(*id))
            .collect()
    }
}

/// Builder that freezes a [`DependencyGraph`] once collector output is loaded
#[derive(Debug)]
pub struct DependencyGraphBuilder {
    graph: DependencyGraph,
}

impl DependencyGraphBuilder {
    pub fn node(mut self, id: impl Into<String>, record: NodeRecord) -> Self {
        self.graph.add_node(id, record);
        self
    }

    pub fn edge(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.graph.add_edge(from, to);
        self
    }

    pub fn build(self) -> DependencyGraph {
        self.graph
    }
}

/// Builds a graph from raw collector output
pub fn build_graph<N, E>(ecosystem: Ecosystem, root: &str, nodes: N, edges: E) -> DependencyGraph
where
    N: IntoIterator<Item = (String, NodeRecord)>,
    E: IntoIterator<Item = (String, String)>,
{
    let mut graph = DependencyGraph::new(ecosystem, root);
    for (id, record) in nodes {
        graph.add_node(id, record);
    }
    for (from, to) in edges {
        graph.add_edge(from, to);
    }
    graph
}
