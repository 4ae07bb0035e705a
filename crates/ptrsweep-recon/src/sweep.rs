//! Pipeline wiring: expander, pool and collector over two bounded queues.

use ptrsweep_core::OutputMode;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{debug, info};

use crate::collector::collect;
use crate::config::SweepConfig;
use crate::error::{ReconError, ReconResult};
use crate::expander::{expand, ExpandStats};
use crate::lookup::{HickoryLookup, PtrLookup};
use crate::pool::{PoolStats, ResolverPool};
use crate::queue::bounded;

/// Counters from a finished sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Address Expander counters
    pub expand: ExpandStats,
    /// Resolver Pool counters
    pub pool: PoolStats,
    /// Lines written by the collector
    pub written: u64,
}

/// A configured reverse-DNS sweep
pub struct Sweep {
    lookup: Arc<dyn PtrLookup>,
    workers: NonZeroUsize,
    mode: OutputMode,
}

impl Sweep {
    /// Sweep against the nameserver in `config`
    #[must_use]
    pub fn new(config: &SweepConfig) -> Self {
        Self::with_lookup(
            Arc::new(HickoryLookup::new(&config.resolver)),
            config.workers,
            config.mode,
        )
    }

    /// Sweep with a custom lookup implementation
    #[must_use]
    pub fn with_lookup(
        lookup: Arc<dyn PtrLookup>,
        workers: NonZeroUsize,
        mode: OutputMode,
    ) -> Self {
        Self {
            lookup,
            workers,
            mode,
        }
    }

    /// Run the pipeline until `input` is exhausted and every lookup has finished.
    ///
    /// The Resolver Pool and the Address Expander run as spawned tasks; the
    /// collector drains results into `output` on the calling task. Both queues
    /// hold at most `workers` items.
    pub async fn run<R, O, D>(
        &self,
        input: R,
        output: O,
        mut diagnostics: D,
    ) -> ReconResult<SweepReport>
    where
        R: AsyncBufRead + Unpin + Send + 'static,
        O: AsyncWrite + Unpin,
        D: AsyncWrite + Unpin + Send + 'static,
    {
        let (addr_tx, addr_rx) = bounded(self.workers);
        let (result_tx, result_rx) = bounded(self.workers);

        let pool = ResolverPool::new(Arc::clone(&self.lookup), self.workers, self.mode)
            .spawn(addr_rx, result_tx);

        let expander =
            tokio::spawn(async move { expand(input, &mut diagnostics, addr_tx).await });

        let collected = collect(result_rx, output).await;

        let expanded = expander
            .await
            .map_err(|e| ReconError::Worker(format!("address expander: {e}")))?;
        let pool = pool
            .await
            .map_err(|e| ReconError::Worker(format!("resolver pool: {e}")))?;
        let written = collected?;

        debug!(
            lines = expanded.lines,
            addresses = expanded.addresses,
            rejected = expanded.rejected,
            "sweep input summary"
        );
        info!(
            addresses = pool.looked_up,
            failed = pool.failed,
            written,
            "sweep complete"
        );

        Ok(SweepReport {
            expand: expanded,
            pool,
            written,
        })
    }
}
