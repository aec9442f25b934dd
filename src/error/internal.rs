use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to generate a unique token code after several attempts
    #[error("Failed to generate a unique token code after {attempts} attempts")]
    TokenCodeExhausted {
        /// Number of codes tried
        attempts: usize,
    },
}
