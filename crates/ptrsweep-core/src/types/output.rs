use serde_json::json;

use crate::types::Address;

/// How a resolved hostname is rendered as an output line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// The hostname alone
    #[default]
    Bare,
    /// `<address>: <hostname>`
    Verbose,
    /// `{"address":"<address>","hostname":"<hostname>"}`
    Json,
}

impl OutputMode {
    /// Render one hostname returned for `address`.
    ///
    /// A single trailing root-label dot is removed from the hostname.
    #[must_use]
    pub fn render(self, address: &Address, hostname: &str) -> String {
        let hostname = trim_root_label(hostname);
        match self {
            Self::Bare => hostname.to_owned(),
            Self::Verbose => format!("{address}: {hostname}"),
            Self::Json => json!({
                "address": address.as_str(),
                "hostname": hostname,
            })
            .to_string(),
        }
    }
}

/// Strip the trailing `.` of a fully-qualified name
#[must_use]
pub fn trim_root_label(hostname: &str) -> &str {
    hostname.strip_suffix('.').unwrap_or(hostname)
}
