pub mod arp;
pub mod lookup;

use std::ffi::OsString;
use std::io::{self, Write};
use std::time::Duration;

use clap::{ArgAction, ArgMatches, CommandFactory, FromArgMatches, Parser};
use tracing::debug;

use ouilookup_common::config::{Config, DEFAULT_API_URL, DEFAULT_ARP_COMMAND, DEFAULT_ARP_FIELD};
use ouilookup_common::vendors::VendorRepository;
use ouilookup_core::discovery::ArpDiscovery;

use crate::terminal::print;

#[derive(Parser, Debug)]
#[command(name = "ouilookup")]
#[command(about = "Resolve the vendor of MAC addresses.")]
#[command(override_usage = "ouilookup --mac <mac> | --arp | [--help]")]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(infer_long_args = true)]
pub struct CommandLine {
    /// MAC address to look up; the next token is taken as is, even if it starts with `-`
    #[arg(long, value_name = "MAC", action = ArgAction::Append, allow_hyphen_values = true)]
    pub mac: Vec<String>,

    /// Look up every host in the ARP table
    #[arg(
        long,
        action = ArgAction::Append,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub arp: Vec<bool>,

    /// Print the help block
    #[arg(
        long,
        action = ArgAction::Append,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub help: Vec<bool>,

    /// Base URL of the lookup API
    #[arg(long, value_name = "URL", env = "OUILOOKUP_LOOKUP_URL", default_value = DEFAULT_API_URL)]
    pub lookup_url: String,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECONDS", env = "OUILOOKUP_TIMEOUT", value_parser = parse_timeout)]
    pub timeout: Option<Duration>,

    /// Program listing the ARP table, run with `-a`
    #[arg(long, value_name = "PROGRAM", env = "OUILOOKUP_TABLE_COMMAND", default_value = DEFAULT_ARP_COMMAND)]
    pub table_command: String,

    /// 1-based column holding the MAC in the ARP output
    #[arg(
        long,
        value_name = "N",
        env = "OUILOOKUP_TABLE_FIELD",
        default_value_t = (DEFAULT_ARP_FIELD + 1) as u16,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub table_field: u16,

    /// Log diagnostics to stderr; repeat for more detail
    #[arg(long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Option processing stops at the first operand; the rest is ignored.
    #[arg(trailing_var_arg = true, num_args = 1.., hide = true)]
    pub operands: Vec<String>,
}

/// A single flag to act upon, in command-line order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Help,
    Mac(String),
    Arp,
}

#[derive(Debug)]
pub struct Invocation {
    pub actions: Vec<Action>,
    pub cfg: Config,
    pub verbosity: u8,
}

impl CommandLine {
    pub fn parse_args<I, T>(args: I) -> Result<Invocation, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches: ArgMatches = Self::command().try_get_matches_from(args)?;
        let commands = Self::from_arg_matches(&matches)?;

        if !commands.operands.is_empty() {
            debug!("ignoring operands {:?}", commands.operands);
        }

        Ok(Invocation {
            actions: commands.ordered_actions(&matches),
            cfg: commands.config(),
            verbosity: commands.verbose,
        })
    }

    fn config(&self) -> Config {
        Config {
            api_url: self.lookup_url.clone(),
            timeout: self.timeout,
            arp_command: self.table_command.clone(),
            arp_field: usize::from(self.table_field) - 1,
        }
    }

    /// Every occurrence of `--mac`, `--arp` and `--help` keeps its own position.
    fn ordered_actions(&self, matches: &ArgMatches) -> Vec<Action> {
        let mut indexed: Vec<(usize, Action)> = Vec::new();

        if let Some(indices) = matches.indices_of("mac") {
            indexed.extend(indices.zip(self.mac.iter().cloned().map(Action::Mac)));
        }
        push_switch(&mut indexed, matches, "arp", &self.arp, Action::Arp);
        push_switch(&mut indexed, matches, "help", &self.help, Action::Help);

        indexed.sort_by_key(|(idx, _)| *idx);
        indexed.into_iter().map(|(_, action)| action).collect()
    }
}

/// `--arp=false` is accepted by the parser but does nothing.
fn push_switch(
    indexed: &mut Vec<(usize, Action)>,
    matches: &ArgMatches,
    id: &str,
    values: &[bool],
    action: Action,
) {
    let Some(indices) = matches.indices_of(id) else {
        return;
    };
    indexed.extend(
        indices
            .zip(values)
            .filter(|(_, on)| **on)
            .map(|(idx, _)| (idx, action.clone())),
    );
}

fn parse_timeout(s: &str) -> Result<Duration, String> {
    let secs: f64 = s.parse().map_err(|_| format!("'{s}' is not a number of seconds"))?;
    if secs <= 0.0 {
        return Err(format!("'{s}' must be greater than zero"));
    }
    Duration::try_from_secs_f64(secs).map_err(|err| err.to_string())
}

/// Runs each action in order. Only failures to write to `out` stop the loop.
pub async fn run<W: Write>(
    actions: &[Action],
    vendor_repo: &dyn VendorRepository,
    discovery: &ArpDiscovery,
    out: &mut W,
) -> io::Result<()> {
    for action in actions {
        match action {
            Action::Help => print::help(out)?,
            Action::Mac(mac) => lookup::mac(vendor_repo, mac, out).await?,
            Action::Arp => arp::arp(discovery, vendor_repo, out).await?,
        }
    }
    Ok(())
}
