use thiserror::Error;

/// Errors raised while assembling a request document.
///
/// There is exactly one condition: a required argument was empty. It signals
/// a mistake at the call site, never a transient failure, so callers should
/// fix the call rather than retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// An operation name or object type name was empty.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}
