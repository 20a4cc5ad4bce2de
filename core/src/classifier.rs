//! # Address Classification
//!
//! Presentation syntax is delegated to `std::net`; this module only decides the family
//! and collapses IPv4-mapped IPv6 addresses onto IPv4.

use std::net::{Ipv4Addr, Ipv6Addr};

use ipconv_common::address::{AddressKind, IPV4_LEN, IPV6_LEN, RawAddress, is_ipv4_mapped};
use tracing::trace;

/// Classifies presentation text.
///
/// IPv4 is tried first, then IPv6. An IPv6 address inside `::ffff:0:0/96` comes back as
/// [`RawAddress::V4`] holding its trailing 4 bytes. `None` means the text is not a valid
/// address of either family; surrounding whitespace or any other garbage is not tolerated.
pub fn classify(text: &str) -> Option<RawAddress> {
    if let Ok(v4) = text.parse::<Ipv4Addr>() {
        trace!(text, "classified as IPv4");
        return Some(RawAddress::from(v4));
    }

    let v6: Ipv6Addr = text.parse().ok()?;
    let octets: [u8; IPV6_LEN] = v6.octets();

    if is_ipv4_mapped(&octets) {
        trace!(text, "classified as IPv4-mapped IPv6");
        let mut tail = [0u8; IPV4_LEN];
        tail.copy_from_slice(&octets[IPV6_LEN - IPV4_LEN..]);
        return Some(RawAddress::V4(tail));
    }

    trace!(text, "classified as IPv6");
    Some(RawAddress::V6(octets))
}

pub fn kind_of(text: &str) -> AddressKind {
    classify(text).map_or(AddressKind::Invalid, |raw| raw.kind())
}

/// Formats raw bytes as presentation text, picking the family from the length.
///
/// Lengths other than 4 and 16 have no presentation form and yield `None`.
///
/// IPv6 uses the `std` rendering: mapped addresses print as `::ffff:a.b.c.d`, while
/// IPv4-compatible ones (`::a.b.c.d` without the `ffff` marker) print as hex groups, e.g.
/// `::abcd:1234`. Both forms parse back to the same bytes.
pub fn format(bytes: &[u8]) -> Option<String> {
    if let Ok(octets) = <[u8; IPV4_LEN]>::try_from(bytes) {
        return Some(Ipv4Addr::from(octets).to_string());
    }
    if let Ok(octets) = <[u8; IPV6_LEN]>::try_from(bytes) {
        return Some(Ipv6Addr::from(octets).to_string());
    }
    trace!(len = bytes.len(), "no presentation form for this length");
    None
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
