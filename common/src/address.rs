//! # Address Model
//!
//! An address is carried as its raw network-order bytes: 4 for IPv4 and 16 for IPv6.
//! The family is encoded in the variant, so a payload of any other length cannot exist.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

pub const IPV4_LEN: usize = 4;
pub const IPV6_LEN: usize = 16;

/// Leading bytes of the `::ffff:0:0/96` block.
const MAPPED_PREFIX: [u8; 12] = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressKind {
    Invalid,
    V4,
    V6,
}

impl AddressKind {
    /// Numeric family tag handed back to callers that wrote into their own buffer.
    pub fn tag(self) -> Option<u8> {
        match self {
            AddressKind::Invalid => None,
            AddressKind::V4 => Some(4),
            AddressKind::V6 => Some(6),
        }
    }

    pub fn payload_len(self) -> usize {
        match self {
            AddressKind::Invalid => 0,
            AddressKind::V4 => IPV4_LEN,
            AddressKind::V6 => IPV6_LEN,
        }
    }
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AddressKind::Invalid => "invalid",
            AddressKind::V4 => "IPv4",
            AddressKind::V6 => "IPv6",
        };
        f.write_str(name)
    }
}

/// An address payload in network byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawAddress {
    V4([u8; IPV4_LEN]),
    V6([u8; IPV6_LEN]),
}

impl RawAddress {
    pub fn kind(&self) -> AddressKind {
        match self {
            RawAddress::V4(_) => AddressKind::V4,
            RawAddress::V6(_) => AddressKind::V6,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            RawAddress::V4(octets) => octets,
            RawAddress::V6(octets) => octets,
        }
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl From<Ipv4Addr> for RawAddress {
    fn from(addr: Ipv4Addr) -> Self {
        RawAddress::V4(addr.octets())
    }
}

/// Keeps all 16 bytes. Collapsing mapped addresses is left to classification.
impl From<Ipv6Addr> for RawAddress {
    fn from(addr: Ipv6Addr) -> Self {
        RawAddress::V6(addr.octets())
    }
}

/// Checks for the `::ffff:a.b.c.d` layout: 80 zero bits followed by 16 one bits.
pub fn is_ipv4_mapped(octets: &[u8; IPV6_LEN]) -> bool {
    octets[..MAPPED_PREFIX.len()] == MAPPED_PREFIX
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
