/// Application layer - Use cases and DTOs
///
/// This layer orchestrates collectors, the graph engine and the report
/// filter through ports.
pub mod dto;
pub mod factories;
pub mod use_cases;
