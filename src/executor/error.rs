//! Processing error types.

/// Errors that can occur when processing user input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// Input was empty or contained only whitespace.
    ///
    /// Surfaced inline; no history is recorded.
    #[error("Please enter some text to process")]
    EmptyInput,
}
