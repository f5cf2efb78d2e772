//! deplister - dependency lister for npm and Go projects
//!
//! Builds a dependency graph from a project's manifests and tooling, then
//! reports every dependency with its classification (direct or transitive),
//! all simple paths from the project root and its minimum depth.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_resolution`): Graph model, path enumeration and resolution
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Collectors, filesystem, process and console implementations
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use deplister::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = ScanDependenciesUseCase::new(
//!     CollectorFactory::create_all(CollectorFactory::DEFAULT_COMMAND_RETRIES),
//!     StderrProgressReporter::new(),
//! );
//!
//! let response = use_case.execute(ScanRequest::new(PathBuf::from("."), vec![]))?;
//!
//! let output = JsonFormatter::new(true).format(&response)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```
//!
//! The graph engine can also be used on its own:
//!
//! ```
//! use deplister::prelude::*;
//! use std::collections::HashSet;
//!
//! let graph = DependencyGraph::builder(Ecosystem::Npm, "")
//!     .node("a", NodeRecord::new("1.0.0", NodeMetadata::default()))
//!     .node("c", NodeRecord::new("2.0.0", NodeMetadata::default()))
//!     .edge("", "a")
//!     .edge("a", "c")
//!     .build();
//!
//! let direct: HashSet<String> = ["a".to_string()].into_iter().collect();
//! let deps = DependencyResolver::resolve(&graph, &direct).unwrap();
//! assert_eq!(deps[1].depth, Some(2));
//! ```

pub mod adapters;
pub mod application;
pub mod dependency_resolution;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::collectors::{GoCollector, NpmCollector};
    pub use crate::adapters::outbound::console::{SilentProgressReporter, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::adapters::outbound::process::SystemCommandRunner;
    pub use crate::application::dto::{OutputFormat, ScanRequest, ScanResponse};
    pub use crate::application::factories::{CollectorFactory, FormatterFactory};
    pub use crate::application::use_cases::ScanDependenciesUseCase;
    pub use crate::dependency_resolution::domain::{
        build_graph, DependencyGraph, DependencyPath, Ecosystem, GoMetadata, ModuleReplacement,
        NodeMetadata, NodeRecord, NpmDependencyKind, NpmMetadata, ResolvedDependency,
    };
    pub use crate::dependency_resolution::services::{
        DependencyResolver, DepthResolver, PathEnumerator, ReportFilter,
    };
    pub use crate::ports::outbound::{
        CollectedDependencies, CommandOutput, CommandRunner, DependencyCollector, ManifestReader,
        OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::error::{DeplisterError, ExitCode};
    pub use crate::shared::Result;
}
