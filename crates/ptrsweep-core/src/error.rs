use thiserror::Error;

/// Result type alias for sweep operations
pub type Result<T> = std::result::Result<T, SweepError>;

/// Errors that can occur while classifying sweep input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SweepError {
    /// Input line contained a `/` but was not a valid IPv4 CIDR block
    #[error("invalid CIDR block {input:?}: {reason}")]
    InvalidCidr {
        /// The offending input line
        input: String,
        /// Why it was rejected
        reason: String,
    },
}
