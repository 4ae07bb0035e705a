//! Core types and errors for ptrsweep.
//!
//! This crate provides the foundational types shared by the sweep pipeline:
//!
//! - **Types**: input classification ([`InputLine`]), IPv4 prefixes and their
//!   ascending enumeration ([`CidrBlock`]), and output rendering ([`OutputMode`])
//! - **Errors**: a single error enum, [`SweepError`]
//!
//! # Example
//!
//! ```rust
//! use ptrsweep_core::{CidrBlock, Result};
//!
//! fn count(block: &str) -> Result<u64> {
//!     let block: CidrBlock = block.parse()?;
//!     Ok(block.len())
//! }
//!
//! assert_eq!(count("192.168.1.0/30").unwrap(), 4);
//! ```

#![doc(html_root_url = "https://docs.rs/ptrsweep-core/0.1.0")]

mod error;
pub mod types;

pub use error::{Result, SweepError};
pub use types::*;
