//! User-facing output. Everything here goes to the writer it is given,
//! which is stdout in the binary; errors included.

use std::io::{self, Write};

use ouilookup_common::error::{ArpError, LookupError};
use ouilookup_common::vendors::LookupResult;

const HELP: &str = "
    Use: ouilookup --mac <mac> | --arp | [--help]
    --mac: MAC a consultar. P.e. aa:bb:cc:00:00:00.
    --arp: muestra los fabricantes de los hosts disponibles en la tabla arp.
    --help: muestra este mensaje y termina.

    Opciones de configuración:
    --lookup-url <url>: base de la API de consulta (OUILOOKUP_LOOKUP_URL).
    --timeout <segundos>: tiempo máximo por consulta (OUILOOKUP_TIMEOUT).
    --table-command <programa>: programa que lista la tabla arp (OUILOOKUP_TABLE_COMMAND).
    --table-field <n>: columna de la MAC en la salida de arp, desde 1 (OUILOOKUP_TABLE_FIELD).
    --verbose: muestra mensajes de diagnóstico en stderr; repetible.
    ";

pub fn help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{HELP}")
}

pub fn lookup_result<W: Write>(out: &mut W, result: &LookupResult) -> io::Result<()> {
    writeln!(out, "MAC address : {}", result.mac)?;
    writeln!(out, "Fabricante : {}", result.vendor)?;
    writeln!(out, "Tiempo de respuesta: {}ms", result.elapsed_ms())
}

pub fn lookup_error<W: Write>(out: &mut W, err: &LookupError) -> io::Result<()> {
    writeln!(out, "Error al consultar la API: {err}")
}

pub fn invalid_mac<W: Write>(out: &mut W, mac: &str) -> io::Result<()> {
    writeln!(
        out,
        "Error: El formato de la dirección MAC '{mac}' no es válido. Use el formato aa:bb:cc:dd:ee:ff."
    )
}

pub fn arp_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "IP/MAC/Vendor:")
}

pub fn arp_error<W: Write>(out: &mut W, err: &ArpError) -> io::Result<()> {
    writeln!(out, "Error al mostrar la tabla ARP: {err}")
}

pub fn parse_error<W: Write>(out: &mut W, err: &clap::Error) -> io::Result<()> {
    writeln!(out, "{}", err.to_string().trim_end())
}
