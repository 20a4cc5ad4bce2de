//! # Window Resolution
//!
//! Reconciles a requested `(offset, length)` with bounded byte regions. Requests are
//! clamped, never rejected: an out-of-range request becomes a shorter or empty window.
//!
//! A negative offset counts back from the end of the destination. If it still lands before
//! index 0, the source bytes that would have fallen before the start are dropped.

use std::ops::Range;

use ipconv_common::window::ByteWindow;

/// Resolves a copy of up to `requested_length` bytes from a source of `source_len` bytes
/// into a destination of `dest_len` bytes, starting at `requested_offset` in the destination.
pub fn resolve_window(
    requested_offset: i64,
    requested_length: i64,
    source_len: usize,
    dest_len: usize,
) -> ByteWindow {
    // i128 holds any usize plus any i64 without overflow.
    let source_len = source_len as i128;
    let dest_len = dest_len as i128;

    let mut offset = i128::from(requested_offset);
    let mut length = i128::from(requested_length).min(source_len);
    let mut source_start: i128 = 0;

    if offset < 0 {
        offset += dest_len;
    }

    if offset < 0 {
        source_start = -offset;
        length -= source_start;
        offset = 0;
    }

    if offset + length > dest_len {
        length = dest_len - offset;
    }

    if length <= 0 {
        return ByteWindow::EMPTY;
    }

    ByteWindow::new(source_start as usize, offset as usize, length as usize)
}

/// Resolves the sub-range of a `buffer_len`-byte buffer to read an address from.
///
/// `offset` defaults to 0. `length` defaults to everything from `offset` to the end,
/// measured before a negative offset is adjusted. Returns `None` when nothing is left
/// to read or when the adjusted start still lies before the buffer.
pub fn resolve_read_window(
    buffer_len: usize,
    offset: Option<i64>,
    length: Option<i64>,
) -> Option<Range<usize>> {
    let offset: i64 = offset.unwrap_or(0);
    let buffer_len_signed: i64 = i64::try_from(buffer_len).unwrap_or(i64::MAX);
    let length: i64 = length.unwrap_or_else(|| buffer_len_signed.saturating_sub(offset));

    // The buffer bounds the read; the requested length is the only source limit.
    let window = resolve_window(offset, length, length.max(0) as usize, buffer_len);

    if window.is_empty() || window.source_start > 0 {
        return None;
    }
    Some(window.dest_range())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
