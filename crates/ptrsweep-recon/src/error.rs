use thiserror::Error;

/// Result type alias for sweep pipeline operations
pub type ReconResult<T> = std::result::Result<T, ReconError>;

/// Errors from the sweep pipeline
#[derive(Error, Debug)]
pub enum ReconError {
    /// Reverse lookup failed (NXDOMAIN, SERVFAIL, timeout, bad response)
    #[error("DNS error: {0}")]
    Dns(String),

    /// Queued address text is not an IPv4 address
    #[error("invalid IP address: {0}")]
    InvalidIp(String),

    /// Network I/O error
    #[error("network error: {0}")]
    Network(#[from] std::io::Error),

    /// A pipeline task panicked or was cancelled
    #[error("worker error: {0}")]
    Worker(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_become_network_errors() {
        let err: ReconError = std::io::Error::from(std::io::ErrorKind::ConnectionRefused).into();
        assert!(matches!(err, ReconError::Network(_)));
        assert!(err.to_string().starts_with("network error"));
    }
}
