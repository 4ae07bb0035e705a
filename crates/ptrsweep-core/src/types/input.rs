use crate::error::Result;
use crate::types::{Address, CidrBlock};

/// One classified line of sweep input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputLine {
    /// A line without `/`, queued verbatim
    Single(Address),
    /// A line with `/`, parsed as a CIDR block
    Block(CidrBlock),
}

impl InputLine {
    /// Classify a line of input.
    ///
    /// Lines containing `/` must parse as an IPv4 CIDR block. Anything else
    /// (including the empty line) is taken as a single address without
    /// validation. A trailing `\r` is dropped first.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.contains('/') {
            Ok(Self::Block(line.parse()?))
        } else {
            Ok(Self::Single(Address::new(line)))
        }
    }
}
