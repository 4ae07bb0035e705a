//! # ptrsweep-cli
//!
//! Command-line front end for the ptrsweep pipeline.
//!
//! ## Usage
//!
//! ```text
//! echo 192.168.1.0/24 | ptrsweep --dns 1.1.1.1 -c 50 -v
//! ```
//!
//! - **Input**: one IPv4 address or CIDR block per line on stdin
//! - **Output**: one hostname per line on stdout (`<address>: <hostname>` with `-v`)
//! - **Diagnostics**: invalid CIDR blocks and logs go to stderr

pub mod cli;
pub mod config;
pub mod logging;
pub mod output;

pub use cli::run;
