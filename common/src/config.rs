use std::time::Duration;

/// Base of the vendor lookup endpoint. The MAC is appended as the last path segment.
pub const DEFAULT_API_URL: &str = "https://api.maclookup.app/v2/macs";

/// Program used to dump the ARP cache. Always invoked with `-a`.
pub const DEFAULT_ARP_COMMAND: &str = "arp";

/// Zero-based whitespace field holding the MAC in `arp -a` output
/// (`? (192.168.1.1) at aa:bb:cc:dd:ee:ff on en0 ...`).
pub const DEFAULT_ARP_FIELD: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Endpoint base, without a trailing slash.
    pub api_url: String,
    /// Request timeout. `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
    pub arp_command: String,
    /// Zero-based index of the MAC field in each ARP output line.
    pub arp_field: usize,
}

impl Config {
    /// Full lookup URL for `mac`. The MAC is inserted verbatim.
    pub fn lookup_url(&self, mac: &str) -> String {
        format!("{}/{}", self.api_url.trim_end_matches('/'), mac)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: None,
            arp_command: DEFAULT_ARP_COMMAND.to_string(),
            arp_field: DEFAULT_ARP_FIELD,
        }
    }
}
