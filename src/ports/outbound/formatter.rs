use crate::application::dto::ScanResponse;
use crate::shared::Result;

/// ReportFormatter port for rendering the dependency report
///
/// This port abstracts the output format (JSON, plain text, etc.).
pub trait ReportFormatter {
    /// Formats the scan response
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &ScanResponse) -> Result<String>;
}
