//! Concurrent reverse-DNS sweep pipeline.
//!
//! Three stages connected by two bounded queues:
//!
//! - [`expander`] reads input lines, expands CIDR blocks and feeds the address queue
//! - [`ResolverPool`] runs a fixed number of workers issuing PTR lookups
//! - [`collector`] drains the result queue into an output stream
//!
//! [`Sweep`] wires the stages together.

#![doc(html_root_url = "https://docs.rs/ptrsweep-recon/0.1.0")]

mod config;
mod error;
pub mod collector;
pub mod expander;
pub mod lookup;
pub mod pool;
pub mod queue;
mod sweep;

pub use config::{ResolverConfig, SweepConfig, DEFAULT_WORKERS};
pub use error::{ReconError, ReconResult};
pub use lookup::{HickoryLookup, PtrLookup};
pub use pool::{PoolStats, ResolverPool};
pub use sweep::{Sweep, SweepReport};
