//! # ARP Output Parsing
//!
//! Turns the text printed by the system ARP utility into MAC candidates.
//!
//! The layout of that text differs per platform, so the field holding the
//! hardware address is chosen by an [`ArpLineParser`]. The stock
//! [`ColumnParser`] picks one whitespace-delimited field by index, which
//! covers the BSD/macOS and Linux net-tools layout:
//!
//! ```text
//! ? (192.168.1.1) at aa-bb-cc-dd-ee-ff on en0 ifscope [ethernet]
//! ```

use async_trait::async_trait;
use tracing::trace;

use crate::config::DEFAULT_ARP_FIELD;
use crate::error::ArpError;
use crate::network::mac;

/// Source of raw ARP cache listings.
#[async_trait]
pub trait ArpRepository: Send + Sync {
    /// Returns the complete text printed by the ARP utility.
    async fn arp_output(&self) -> Result<String, ArpError>;
}

/// Extracts the raw MAC candidate from a single line of ARP output.
pub trait ArpLineParser: Send + Sync {
    /// Returns the field that may hold a MAC, or `None` if the line has no such field.
    fn mac_field<'a>(&self, line: &'a str) -> Option<&'a str>;
}

/// Selects the whitespace-delimited field at `index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnParser {
    pub index: usize,
}

impl ColumnParser {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl Default for ColumnParser {
    fn default() -> Self {
        Self::new(DEFAULT_ARP_FIELD)
    }
}

impl ArpLineParser for ColumnParser {
    fn mac_field<'a>(&self, line: &'a str) -> Option<&'a str> {
        line.split_whitespace().nth(self.index)
    }
}

/// Walks `output` line by line and returns every normalized MAC candidate,
/// in the order they appear.
///
/// A line contributes only if the parser finds its field and that field
/// contains `:` or `-`. Everything else is skipped silently.
pub fn extract_macs(output: &str, parser: &dyn ArpLineParser) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| {
            let candidate = parser.mac_field(line)?;
            if mac::has_mac_separator(candidate) {
                Some(mac::normalize_mac(candidate))
            } else {
                trace!("skipping ARP line without MAC field: {line}");
                None
            }
        })
        .collect()
}
