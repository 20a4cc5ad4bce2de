//! # Decimal Rendering
//!
//! Renders a 128-bit big-endian value as base-10 digits using double-and-add over a
//! fixed digit array. Each input bit, most significant first, doubles the accumulated
//! decimal numeral and adds the bit as the carry-in. Only the digits that have become
//! non-zero so far take part in each step, so early bits touch very few digits.

use std::fmt;

/// Digits in `2^128 - 1`.
pub const MAX_DECIMAL_DIGITS: usize = 39;

/// Base-10 digits of an unsigned value, most significant first, no leading zeros.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecimalDigits {
    ascii: [u8; MAX_DECIMAL_DIGITS],
    start: usize,
}

impl DecimalDigits {
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.ascii[self.start..]).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        MAX_DECIMAL_DIGITS - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for DecimalDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for DecimalDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DecimalDigits").field(&self.as_str()).finish()
    }
}

impl PartialEq<&str> for DecimalDigits {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Converts 16 big-endian bytes to their exact decimal representation.
pub fn to_decimal(bytes: &[u8; 16]) -> DecimalDigits {
    let mut digits = [0u8; MAX_DECIMAL_DIGITS];
    // Leftmost digit that ever became non-zero; the array length means "no digits yet".
    let mut active_start: usize = MAX_DECIMAL_DIGITS;

    for &byte in bytes {
        for shift in (0..8).rev() {
            let mut carry: u8 = (byte >> shift) & 1;

            for digit in digits[active_start..].iter_mut().rev() {
                let doubled: u8 = *digit * 2 + carry;
                if doubled > 9 {
                    *digit = doubled - 10;
                    carry = 1;
                } else {
                    *digit = doubled;
                    carry = 0;
                }
            }

            if carry == 1 {
                active_start -= 1;
                digits[active_start] = 1;
            }
        }
    }

    if active_start == MAX_DECIMAL_DIGITS {
        active_start -= 1;
    }

    for digit in &mut digits[active_start..] {
        *digit += b'0';
    }

    DecimalDigits {
        ascii: digits,
        start: active_start,
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
