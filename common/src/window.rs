//! # Byte Window
//!
//! The outcome of reconciling a requested `(offset, length)` with two bounded byte regions.
//! A window is only produced by clamping, so its ranges are always in bounds for the
//! lengths it was resolved against.

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ByteWindow {
    pub source_start: usize,
    pub dest_start: usize,
    pub len: usize,
}

impl ByteWindow {
    pub const EMPTY: ByteWindow = ByteWindow {
        source_start: 0,
        dest_start: 0,
        len: 0,
    };

    pub fn new(source_start: usize, dest_start: usize, len: usize) -> Self {
        Self {
            source_start,
            dest_start,
            len,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn source_range(&self) -> Range<usize> {
        self.source_start..self.source_start + self.len
    }

    pub fn dest_range(&self) -> Range<usize> {
        self.dest_start..self.dest_start + self.len
    }

    /// Copies the window from `src` into `dst`. Empty windows leave `dst` untouched.
    pub fn copy(&self, src: &[u8], dst: &mut [u8]) {
        if self.is_empty() {
            return;
        }
        dst[self.dest_range()].copy_from_slice(&src[self.source_range()]);
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
