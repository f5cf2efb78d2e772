/// Domain layer - the dependency graph engine
///
/// Pure data structures and algorithms with no I/O: the graph model,
/// path enumeration, depth resolution and dependency classification.
pub mod domain;
pub mod services;
