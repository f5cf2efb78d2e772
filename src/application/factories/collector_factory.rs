use crate::adapters::outbound::collectors::{GoCollector, NpmCollector};
use crate::adapters::outbound::filesystem::FileSystemReader;
use crate::adapters::outbound::process::SystemCommandRunner;
use crate::ports::outbound::DependencyCollector;

/// Factory for the registry of supported package managers
///
/// The order of the returned list is the detection order: the first
/// collector that recognizes a project directory wins.
pub struct CollectorFactory;

impl CollectorFactory {
    /// Default number of attempts for each external tool invocation
    pub const DEFAULT_COMMAND_RETRIES: u32 = 3;

    /// Creates the collectors backed by the real filesystem and toolchain
    pub fn create_all(command_retries: u32) -> Vec<Box<dyn DependencyCollector>> {
        vec![
            Box::new(NpmCollector::new(FileSystemReader::new())),
            Box::new(GoCollector::new(
                FileSystemReader::new(),
                SystemCommandRunner::new(),
                command_retries,
            )),
        ]
    }
}
