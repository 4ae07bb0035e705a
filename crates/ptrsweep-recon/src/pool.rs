//! Resolver Pool: a fixed set of workers performing PTR lookups.

use ptrsweep_core::{Address, OutputMode};
use std::num::NonZeroUsize;
use std::ops::AddAssign;
use std::sync::Arc;
use tokio::task::{JoinHandle, JoinSet};
use tracing::{debug, error, info};

use crate::lookup::PtrLookup;
use crate::queue::{QueueReader, QueueWriter};

/// Aggregate counters across all workers.
///
/// Individual lookup failures are never logged; they only show up here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Addresses taken off the address queue
    pub looked_up: u64,
    /// Lookups that returned an error (dropped silently)
    pub failed: u64,
    /// Output lines pushed onto the result queue
    pub hostnames: u64,
}

impl AddAssign for PoolStats {
    fn add_assign(&mut self, rhs: Self) {
        self.looked_up += rhs.looked_up;
        self.failed += rhs.failed;
        self.hostnames += rhs.hostnames;
    }
}

/// Fixed-width pool of lookup workers sharing one resolver
pub struct ResolverPool {
    lookup: Arc<dyn PtrLookup>,
    workers: NonZeroUsize,
    mode: OutputMode,
}

impl ResolverPool {
    /// Create a pool of `workers` workers rendering results with `mode`
    #[must_use]
    pub fn new(lookup: Arc<dyn PtrLookup>, workers: NonZeroUsize, mode: OutputMode) -> Self {
        Self {
            lookup,
            workers,
            mode,
        }
    }

    /// Start every worker, then a supervisor that waits for them.
    ///
    /// Workers pull from `addresses` until it is closed and drained. Once all
    /// of them have returned, the supervisor closes `results` and resolves the
    /// returned handle with the combined counters.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(
        self,
        addresses: QueueReader<Address>,
        results: QueueWriter<String>,
    ) -> JoinHandle<PoolStats> {
        let mut workers = JoinSet::new();
        for id in 0..self.workers.get() {
            workers.spawn(worker(
                id,
                Arc::clone(&self.lookup),
                addresses.clone(),
                results.clone(),
                self.mode,
            ));
        }
        drop(addresses);
        debug!(workers = self.workers.get(), "resolver pool started");

        tokio::spawn(supervise(workers, results))
    }
}

async fn supervise(mut workers: JoinSet<PoolStats>, results: QueueWriter<String>) -> PoolStats {
    let mut total = PoolStats::default();
    while let Some(joined) = workers.join_next().await {
        match joined {
            Ok(stats) => total += stats,
            Err(e) => error!(error = %e, "resolver worker did not finish"),
        }
    }

    // Every worker clone is gone; this drops the last writer.
    results.close();

    info!(
        looked_up = total.looked_up,
        failed = total.failed,
        hostnames = total.hostnames,
        "resolver pool finished"
    );
    total
}

async fn worker(
    id: usize,
    lookup: Arc<dyn PtrLookup>,
    addresses: QueueReader<Address>,
    results: QueueWriter<String>,
    mode: OutputMode,
) -> PoolStats {
    let mut stats = PoolStats::default();

    while let Some(address) = addresses.pop().await {
        stats.looked_up += 1;

        let Ok(hostnames) = lookup.reverse(&address).await else {
            stats.failed += 1;
            continue;
        };

        for hostname in hostnames {
            if results.push(mode.render(&address, &hostname)).await.is_err() {
                debug!(worker = id, "result queue has no readers, worker stopping");
                return stats;
            }
            stats.hostnames += 1;
        }
    }

    stats
}
