//! PTR lookups against a single configured nameserver.

use async_trait::async_trait;
use hickory_resolver::config::{NameServerConfig, ResolverConfig as DnsConfig};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::proto::xfer::Protocol;
use hickory_resolver::{Resolver, TokioResolver};
use ptrsweep_core::Address;
use std::net::IpAddr;
use tracing::debug;

use crate::config::ResolverConfig;
use crate::error::{ReconError, ReconResult};

/// Reverse lookup of one address.
///
/// Implementations return every hostname in the order the answer listed them.
/// Hostnames may still carry their trailing root-label dot.
#[async_trait]
pub trait PtrLookup: Send + Sync {
    /// Look up the PTR records for `address`
    async fn reverse(&self, address: &Address) -> ReconResult<Vec<String>>;
}

/// [`PtrLookup`] backed by hickory, talking UDP to one nameserver.
///
/// No system configuration is consulted and there is no TCP fallback.
pub struct HickoryLookup {
    resolver: TokioResolver,
}

impl HickoryLookup {
    /// Build a resolver that sends every query to `config`'s endpoint
    #[must_use]
    pub fn new(config: &ResolverConfig) -> Self {
        let mut dns = DnsConfig::new();
        dns.add_name_server(NameServerConfig::new(config.socket_addr(), Protocol::Udp));

        let mut builder = Resolver::builder_with_config(dns, TokioConnectionProvider::default());
        let opts = builder.options_mut();
        opts.timeout = config.timeout;
        // hickory counts retries after the first send
        opts.attempts = 0;

        debug!(
            server = %config.socket_addr(),
            timeout_ms = config.timeout.as_millis(),
            "configured PTR resolver"
        );

        Self {
            resolver: builder.build(),
        }
    }
}

#[async_trait]
impl PtrLookup for HickoryLookup {
    async fn reverse(&self, address: &Address) -> ReconResult<Vec<String>> {
        let ip = address
            .to_ipv4()
            .ok_or_else(|| ReconError::InvalidIp(address.to_string()))?;

        let response = self
            .resolver
            .reverse_lookup(IpAddr::V4(ip))
            .await
            .map_err(|e| ReconError::Dns(e.to_string()))?;

        Ok(response.iter().map(ToString::to_string).collect())
    }
}
