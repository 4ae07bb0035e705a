//! Resolver and sweep configuration types.

use ptrsweep_core::OutputMode;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::NonZeroUsize;
use std::time::Duration;

/// Default number of concurrent lookup workers
pub const DEFAULT_WORKERS: NonZeroUsize = match NonZeroUsize::new(20) {
    Some(n) => n,
    None => panic!("default worker count must be non-zero"),
};

/// Nameserver all PTR queries are sent to.
///
/// Built once at startup and shared read-only by every worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Nameserver address
    pub server: IpAddr,

    /// Nameserver UDP port
    pub port: u16,

    /// Per-query timeout applied by the resolver library
    pub timeout: Duration,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolverConfig {
    /// Google public DNS on port 53 with a 5 second timeout
    #[must_use]
    pub const fn new() -> Self {
        Self {
            server: IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)),
            port: 53,
            timeout: Duration::from_secs(5),
        }
    }

    /// Set the nameserver address
    #[must_use]
    pub const fn server(mut self, server: IpAddr) -> Self {
        self.server = server;
        self
    }

    /// Set the nameserver port
    #[must_use]
    pub const fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the per-query timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The nameserver endpoint
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server, self.port)
    }
}

/// Everything a [`Sweep`](crate::Sweep) needs to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepConfig {
    /// Nameserver endpoint
    pub resolver: ResolverConfig,

    /// Number of lookup workers, also the capacity of both queues
    pub workers: NonZeroUsize,

    /// How resolved hostnames are rendered
    pub mode: OutputMode,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            resolver: ResolverConfig::new(),
            workers: DEFAULT_WORKERS,
            mode: OutputMode::Bare,
        }
    }
}
