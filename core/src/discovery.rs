//! # ARP Discovery Service
//!
//! Collects the MAC addresses currently present in the local ARP cache.
//!
//! The service is split from the vendor lookup so the caller can report
//! each lookup as soon as it completes.

use tracing::info;

use ouilookup_common::config::Config;
use ouilookup_common::error::ArpError;
use ouilookup_common::network::arp::{self, ArpLineParser, ArpRepository, ColumnParser};

use crate::system::SystemArp;

/// Application Service for ARP table enumeration.
///
/// 1. delegates the raw listing to the [`ArpRepository`] trait.
/// 2. hands each line to the [`ArpLineParser`] and normalizes what it finds.
pub struct ArpDiscovery {
    arp_repo: Box<dyn ArpRepository>,
    parser: Box<dyn ArpLineParser>,
}

impl ArpDiscovery {
    pub fn new(arp_repo: Box<dyn ArpRepository>, parser: Box<dyn ArpLineParser>) -> Self {
        Self { arp_repo, parser }
    }

    /// Uses the system `arp` utility and the configured field index.
    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            Box::new(SystemArp::new(cfg.arp_command.clone())),
            Box::new(ColumnParser::new(cfg.arp_field)),
        )
    }

    /// Normalized MAC candidates, in ARP output order.
    pub async fn candidates(&self) -> Result<Vec<String>, ArpError> {
        let output = self.arp_repo.arp_output().await?;
        let macs = arp::extract_macs(&output, self.parser.as_ref());
        info!("found {} MAC candidates in the ARP table", macs.len());
        Ok(macs)
    }
}
