/// ProgressReporter port for reporting progress during a scan
///
/// This port abstracts progress reporting (e.g., to stderr) so the report
/// on stdout stays clean.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through the scan stages
    ///
    /// # Arguments
    /// * `current` - Current stage number
    /// * `total` - Total number of stages
    /// * `message` - Optional stage description
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of the scan
    fn report_completion(&self, message: &str);
}
