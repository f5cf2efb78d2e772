pub mod dependency_graph;
pub mod dependency_path;
pub mod ecosystem;
pub mod node_record;
pub mod resolved_dependency;

pub use dependency_graph::{build_graph, DependencyGraph, DependencyGraphBuilder};
pub use dependency_path::DependencyPath;
pub use ecosystem::Ecosystem;
pub use node_record::{
    GoMetadata, ModuleReplacement, NodeMetadata, NodeRecord, NpmDependencyKind, NpmMetadata,
};
pub use resolved_dependency::ResolvedDependency;
