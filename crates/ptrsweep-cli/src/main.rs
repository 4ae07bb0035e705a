//! ptrsweep - bulk reverse-DNS lookups
//!
//! Reads addresses and CIDR blocks from stdin and prints their PTR hostnames.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    ptrsweep_cli::run().await
}
