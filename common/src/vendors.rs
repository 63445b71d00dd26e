use std::fmt;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::LookupError;

/// What the lookup service said about a MAC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Vendor {
    /// Company registered for the OUI. May be empty if the service says so.
    Company(String),
    /// 404, or a 200 answer without a `company` field.
    NotFound,
    /// Any other HTTP status.
    UnexpectedStatus(u16),
}

impl Vendor {
    /// Maps an HTTP status and, for 200, the decoded `company` field.
    pub fn from_status(status: u16, company: Option<String>) -> Self {
        match status {
            200 => company.map_or(Vendor::NotFound, Vendor::Company),
            404 => Vendor::NotFound,
            code => Vendor::UnexpectedStatus(code),
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vendor::Company(name) => f.write_str(name),
            Vendor::NotFound => f.write_str("Not found"),
            Vendor::UnexpectedStatus(code) => write!(f, "Error: {code}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    /// The MAC exactly as it was sent.
    pub mac: String,
    pub vendor: Vendor,
    pub elapsed: Duration,
}

impl LookupResult {
    /// Elapsed time truncated to whole milliseconds.
    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

/// Defines the contract for resolving device manufacturers from MAC addresses.
#[async_trait]
pub trait VendorRepository: Send + Sync {
    /// Resolves the vendor of `mac`.
    ///
    /// # Arguments
    /// * `mac` - The MAC string, used verbatim.
    ///
    /// # Returns
    /// * `Ok(LookupResult)` - The service answered, whatever the status.
    /// * `Err(LookupError)` - No usable answer was received.
    async fn lookup(&self, mac: &str) -> Result<LookupResult, LookupError>;
}
