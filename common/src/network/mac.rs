use std::sync::OnceLock;

use regex::Regex;

static MAC_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Full address (`aa:bb:cc:dd:ee:ff`) or OUI prefix (`aa:bb:cc`).
/// `:` and `-` may be mixed.
fn get_mac_pattern() -> &'static Regex {
    MAC_PATTERN.get_or_init(|| {
        Regex::new(r"^(?:(?:[0-9A-Fa-f]{2}[:-]){5}[0-9A-Fa-f]{2}|(?:[0-9A-Fa-f]{2}[:-]){2}[0-9A-Fa-f]{2})$")
            .expect("MAC pattern is a valid regex")
    })
}

/// Checks that `mac` is, in full, either a six-group address or a
/// three-group OUI prefix of two-digit hex groups.
///
/// Accepting the OUI-only form is deliberate even though the CLI error
/// message only mentions the six-group form.
pub fn is_valid_mac(mac: &str) -> bool {
    get_mac_pattern().is_match(mac)
}

/// Rewrites `-` separators to `:` and lowercases the result.
pub fn normalize_mac(mac: &str) -> String {
    mac.replace('-', ":").to_lowercase()
}

/// Whether `candidate` carries a MAC separator at all.
pub fn has_mac_separator(candidate: &str) -> bool {
    candidate.contains(':') || candidate.contains('-')
}
