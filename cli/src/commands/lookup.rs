use std::io::{self, Write};

use tracing::debug;

use ouilookup_common::network::mac::is_valid_mac;
use ouilookup_common::vendors::VendorRepository;

use crate::terminal::print;

/// `--mac`: validate, then look up.
pub async fn mac<W: Write>(
    vendor_repo: &dyn VendorRepository,
    mac_addr: &str,
    out: &mut W,
) -> io::Result<()> {
    if !is_valid_mac(mac_addr) {
        debug!("rejected malformed MAC {mac_addr:?}");
        return print::invalid_mac(out, mac_addr);
    }
    lookup(vendor_repo, mac_addr, out).await
}

/// Looks up `mac_addr` as given and prints the outcome. A failed request is
/// reported and swallowed.
pub async fn lookup<W: Write>(
    vendor_repo: &dyn VendorRepository,
    mac_addr: &str,
    out: &mut W,
) -> io::Result<()> {
    match vendor_repo.lookup(mac_addr).await {
        Ok(result) => print::lookup_result(out, &result),
        Err(err) => {
            debug!("lookup of {mac_addr} failed: {err:?}");
            print::lookup_error(out, &err)
        }
    }
}
