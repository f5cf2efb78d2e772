use crate::shared::Result;

/// OutputPresenter port for delivering the rendered report
///
/// Implemented for stdout and for a file given with `--out`.
pub trait OutputPresenter {
    /// Writes the rendered report to its destination
    ///
    /// # Errors
    /// Returns an error if the destination cannot be written, e.g. a
    /// missing parent directory or a symlinked output path
    fn present(&self, content: &str) -> Result<()>;
}
