use ipnetwork::Ipv4Network;
use std::fmt;
use std::iter::FusedIterator;
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::error::SweepError;

/// An IPv4 network prefix.
///
/// Host bits given in the input are masked off, so `10.0.0.7/30` and
/// `10.0.0.4/30` describe the same block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CidrBlock {
    net: Ipv4Network,
}

impl CidrBlock {
    /// Longest valid IPv4 prefix length
    pub const MAX_PREFIX: u8 = 32;

    /// Build a block from an address and prefix length, masking host bits
    pub fn new(addr: Ipv4Addr, prefix: u8) -> crate::Result<Self> {
        let invalid = |e: ipnetwork::IpNetworkError| SweepError::InvalidCidr {
            input: format!("{addr}/{prefix}"),
            reason: e.to_string(),
        };
        let net = Ipv4Network::new(addr, prefix).map_err(invalid)?;
        let net = Ipv4Network::new(net.network(), prefix).map_err(invalid)?;
        Ok(Self { net })
    }

    /// The prefix length
    #[must_use]
    pub fn prefix(&self) -> u8 {
        self.net.prefix()
    }

    /// First address of the block (all host bits clear)
    #[must_use]
    pub fn network(&self) -> Ipv4Addr {
        self.net.network()
    }

    /// Last address of the block: the network OR'd with the inverted mask
    #[must_use]
    pub fn broadcast(&self) -> Ipv4Addr {
        self.net.broadcast()
    }

    /// Number of addresses in the block, `2^(32 - prefix)`
    #[must_use]
    pub fn len(&self) -> u64 {
        1u64 << (Self::MAX_PREFIX - self.prefix())
    }

    /// A block always holds at least one address
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Every address from the network through the broadcast address, ascending
    #[must_use]
    pub fn addresses(&self) -> CidrAddresses {
        CidrAddresses {
            next: Some(u32::from(self.network())),
            last: u32::from(self.broadcast()),
        }
    }
}

impl FromStr for CidrBlock {
    type Err = SweepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| SweepError::InvalidCidr {
            input: s.to_owned(),
            reason,
        };

        let (addr, prefix) = s
            .split_once('/')
            .ok_or_else(|| invalid("missing '/' separator".into()))?;

        let addr: Ipv4Addr = addr
            .parse()
            .map_err(|_| invalid(format!("{addr:?} is not an IPv4 address")))?;

        // `u8::from_str` would accept a leading '+'
        if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid(format!("{prefix:?} is not a prefix length")));
        }
        let prefix: u8 = prefix
            .parse()
            .map_err(|_| invalid(format!("prefix length {prefix} out of range")))?;
        if prefix > Self::MAX_PREFIX {
            return Err(invalid(format!(
                "prefix length {prefix} exceeds {}",
                Self::MAX_PREFIX
            )));
        }

        Self::new(addr, prefix)
    }
}

impl fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network(), self.prefix())
    }
}

/// Ascending iterator over the addresses of a [`CidrBlock`].
///
/// Driven by a `u32` cursor that stops on the broadcast address, so it never
/// wraps past `255.255.255.255`.
#[derive(Debug, Clone)]
pub struct CidrAddresses {
    next: Option<u32>,
    last: u32,
}

impl Iterator for CidrAddresses {
    type Item = Ipv4Addr;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if current == self.last {
            None
        } else {
            Some(current + 1)
        };
        Some(Ipv4Addr::from(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.next.map_or((0, Some(0)), |next| {
            let remaining = u64::from(self.last - next) + 1;
            usize::try_from(remaining).map_or((usize::MAX, None), |n| (n, Some(n)))
        })
    }
}

impl FusedIterator for CidrAddresses {}
