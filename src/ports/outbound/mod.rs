/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, processes, console, etc.).
pub mod command_runner;
pub mod dependency_collector;
pub mod formatter;
pub mod manifest_reader;
pub mod output_presenter;
pub mod progress_reporter;

pub use command_runner::{CommandOutput, CommandRunner};
pub use dependency_collector::{CollectedDependencies, DependencyCollector};
pub use formatter::ReportFormatter;
pub use manifest_reader::ManifestReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
