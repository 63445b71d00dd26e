use std::io;

use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Writes `<marker> <component>: <fields>`, e.g. `[-] vendors: ...`.
pub struct OuiFormatter;

impl<S, N> FormatEvent<S, N> for OuiFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let (marker, color) = level_marker(*meta.level());

        write!(
            writer,
            "{} {} ",
            marker.color(color).bold(),
            format!("{}:", component(meta.target())).bright_black()
        )?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

fn level_marker(level: Level) -> (&'static str, Color) {
    match level {
        Level::TRACE => ("[ ]", Color::BrightBlack),
        Level::DEBUG => ("[?]", Color::Blue),
        Level::INFO => ("[+]", Color::Green),
        Level::WARN => ("[*]", Color::Yellow),
        Level::ERROR => ("[-]", Color::Red),
    }
}

/// Our own events are tagged with their last module segment. Events from
/// other crates keep the full target so their origin stays visible.
fn component(target: &str) -> &str {
    if target.starts_with("ouilookup") {
        target.rsplit("::").next().unwrap_or(target)
    } else {
        target
    }
}

/// Maps the number of `--verbose` flags to a default filter directive.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber. Diagnostics go to stderr so stdout
/// carries only lookup output. `RUST_LOG` wins over `--verbose`.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .event_format(OuiFormatter)
        .try_init();
}
