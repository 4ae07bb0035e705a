use std::fmt;
use std::net::Ipv4Addr;

/// One host to look up, kept as the text it arrived as.
///
/// Single-address input lines are passed through without validation, so an
/// `Address` is not guaranteed to hold a dotted quad. Use [`Address::to_ipv4`]
/// at the point where a real address is needed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    /// Wrap raw address text
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The address text exactly as it was queued
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Try to interpret the text as an IPv4 address
    #[must_use]
    pub fn to_ipv4(&self) -> Option<Ipv4Addr> {
        self.0.parse().ok()
    }
}

impl From<Ipv4Addr> for Address {
    fn from(ip: Ipv4Addr) -> Self {
        Self(ip.to_string())
    }
}

impl From<String> for Address {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for Address {
    fn from(text: &str) -> Self {
        Self(text.to_owned())
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_text_verbatim() {
        let addr = Address::new("not an ip");
        assert_eq!(addr.as_str(), "not an ip");
        assert_eq!(addr.to_ipv4(), None);
    }

    #[test]
    fn parses_dotted_quad() {
        let addr = Address::from(Ipv4Addr::new(10, 1, 2, 3));
        assert_eq!(addr.as_str(), "10.1.2.3");
        assert_eq!(addr.to_ipv4(), Some(Ipv4Addr::new(10, 1, 2, 3)));
    }
}
