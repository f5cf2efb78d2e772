mod dependency_resolver;
mod depth_resolver;
mod path_enumerator;
mod report_filter;

pub use dependency_resolver::DependencyResolver;
pub use depth_resolver::DepthResolver;
pub use path_enumerator::PathEnumerator;
pub use report_filter::ReportFilter;
