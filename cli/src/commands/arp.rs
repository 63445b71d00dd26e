use std::io::{self, Write};

use ouilookup_common::vendors::VendorRepository;
use ouilookup_core::discovery::ArpDiscovery;

use crate::commands::lookup;
use crate::terminal::print;

/// `--arp`: looks up every MAC in the ARP table, one after the other.
///
/// Failing to read the table ends this action only.
pub async fn arp<W: Write>(
    discovery: &ArpDiscovery,
    vendor_repo: &dyn VendorRepository,
    out: &mut W,
) -> io::Result<()> {
    let macs = match discovery.candidates().await {
        Ok(macs) => macs,
        Err(err) => return print::arp_error(out, &err),
    };

    print::arp_header(out)?;
    for mac in &macs {
        lookup::lookup(vendor_repo, mac, out).await?;
    }
    Ok(())
}
