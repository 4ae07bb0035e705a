//! Command-line argument definitions using clap.

use clap::Parser;
use std::net::IpAddr;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Bulk reverse-DNS lookups
///
/// Reads IPv4 addresses or CIDR blocks (one per line) from stdin, expands the
/// blocks, and prints every PTR hostname the configured resolver returns.
/// Failed lookups are skipped silently.
#[derive(Parser, Debug)]
#[command(name = "ptrsweep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// DNS resolver IP address [default: 8.8.8.8]
    #[arg(long = "dns", value_name = "IP")]
    pub dns: Option<IpAddr>,

    /// DNS resolver UDP port [default: 53]
    #[arg(long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Number of concurrent lookup workers [default: 20]
    #[arg(short = 'c', value_name = "N")]
    pub concurrency: Option<NonZeroUsize>,

    /// Print "<address>: <hostname>" instead of the bare hostname
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Per-query timeout in seconds [default: 5]
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Output format [default: plain]
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Log filter directive written to stderr, e.g. "info" or "ptrsweep_recon=debug" [default: warn]
    #[arg(long, value_name = "DIRECTIVE")]
    pub log_level: Option<String>,

    /// Read defaults from a TOML file; flags take precedence
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
