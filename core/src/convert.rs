//! # Conversion Operations
//!
//! The three operations a host binding exposes. Each one classifies first and then hands
//! the payload to the decimal encoder or the window resolver.
//!
//! Unparseable text is reported as `None`. Out-of-range offsets and lengths are clamped.

use std::fmt;

use ipconv_common::address::RawAddress;
use tracing::debug;

use crate::classifier::{classify, format};
use crate::decimal::{DecimalDigits, to_decimal};
use crate::window::{resolve_read_window, resolve_window};

/// The numeric value of an address.
///
/// IPv4 fits a native integer. IPv6 is carried as exact decimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressNumber {
    V4(u32),
    V6(DecimalDigits),
}

impl fmt::Display for AddressNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressNumber::V4(value) => write!(f, "{value}"),
            AddressNumber::V6(digits) => f.write_str(digits.as_str()),
        }
    }
}

/// Returns the address bytes in a newly allocated buffer of exactly 4 or 16 bytes.
pub fn address_to_buffer(text: &str) -> Option<Vec<u8>> {
    let raw: RawAddress = classify(text)?;
    debug!(text, kind = %raw.kind(), "address converted to new buffer");
    Some(raw.to_vec())
}

/// Writes the address bytes into `dest` at `offset` and returns the family tag (4 or 6).
///
/// A negative `offset` counts from the end of `dest`. The copy is clamped to `dest`, and
/// the tag is returned even when nothing could be copied. Invalid text leaves `dest` untouched.
pub fn address_into_buffer(text: &str, dest: &mut [u8], offset: i64) -> Option<u8> {
    let raw: RawAddress = classify(text)?;
    let payload_len: usize = raw.kind().payload_len();
    let window = resolve_window(offset, payload_len as i64, payload_len, dest.len());
    window.copy(raw.as_bytes(), dest);

    debug!(
        text,
        offset,
        payload_len,
        dest_len = dest.len(),
        copied = window.len,
        "address written into buffer"
    );
    raw.kind().tag()
}

pub fn address_to_number(text: &str) -> Option<AddressNumber> {
    let number = match classify(text)? {
        RawAddress::V4(octets) => AddressNumber::V4(u32::from_be_bytes(octets)),
        RawAddress::V6(octets) => AddressNumber::V6(to_decimal(&octets)),
    };
    debug!(text, %number, "address converted to number");
    Some(number)
}

/// Formats the address found in `buffer[offset..offset + length]`.
///
/// Offsets and lengths follow the read-window rules of [`resolve_read_window`]. Only a
/// resolved length of exactly 4 or 16 has a presentation form; anything else is `None`.
pub fn buffer_to_address_text(
    buffer: &[u8],
    offset: Option<i64>,
    length: Option<i64>,
) -> Option<String> {
    let Some(range) = resolve_read_window(buffer.len(), offset, length) else {
        debug!(buf_len = buffer.len(), ?offset, ?length, "read window is empty");
        return None;
    };

    let text = format(&buffer[range.clone()]);
    debug!(?range, found = text.is_some(), "buffer converted to address text");
    text
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
