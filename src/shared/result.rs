/// Type alias for Result with anyhow::Error as the error type.
/// Domain errors are `DeplisterError` values wrapped in `anyhow::Error`
/// and can be recovered with `downcast_ref`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
