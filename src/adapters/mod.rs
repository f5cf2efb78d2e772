/// Adapters layer - Infrastructure implementations
///
/// Manifest parsers, the Go toolchain runner, filesystem access, console
/// progress and report formatters, each behind an outbound port.
pub mod outbound;
