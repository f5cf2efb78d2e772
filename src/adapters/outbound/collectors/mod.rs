/// Dependency collectors, one per supported package manager
mod go;
mod npm;

pub use go::GoCollector;
pub use npm::NpmCollector;
