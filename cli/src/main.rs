mod commands;
mod terminal;

use std::io;
use std::process;

use commands::CommandLine;
use ouilookup_core::discovery::ArpDiscovery;
use ouilookup_core::vendors::MacLookupApi;
use terminal::{logging, print};
use tracing::debug;

/// Exit status for an unusable command line.
const EXIT_USAGE: i32 = 2;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut out = io::stdout();

    let invocation = match CommandLine::parse_args(std::env::args_os()) {
        Ok(invocation) => invocation,
        Err(err) => {
            print::parse_error(&mut out, &err)?;
            print::help(&mut out)?;
            process::exit(EXIT_USAGE);
        }
    };

    logging::init_logging(invocation.verbosity);
    debug!("{:?}", invocation.cfg);

    let vendor_repo = MacLookupApi::new(&invocation.cfg)?;
    let discovery = ArpDiscovery::from_config(&invocation.cfg);

    commands::run(&invocation.actions, &vendor_repo, &discovery, &mut out).await?;
    Ok(())
}
