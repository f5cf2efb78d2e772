/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports are the interfaces the application core uses to reach
/// the file system, external tooling, the console and output sinks.
pub mod outbound;
