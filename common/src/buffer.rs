//! # Buffer Arguments
//!
//! The command-line host passes byte buffers around as hex text.

use crate::error::ArgumentError;

/// Parses a hex buffer such as `0x7f000001`, `7f:00:00:01` or `7f 00 00 01`.
///
/// Separators (`:`, `-`, whitespace) may only sit between byte pairs; one that splits a
/// pair is reported as an invalid character. Empty text is an empty buffer.
pub fn parse_buffer(text: &str) -> Result<Vec<u8>, ArgumentError> {
    let trimmed: &str = text.trim();
    let digits: &str = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    let mut compact: String = String::with_capacity(digits.len());
    let mut run: usize = 0;

    for (index, c) in digits.chars().enumerate() {
        if is_separator(c) {
            if run % 2 == 1 {
                return Err(hex::FromHexError::InvalidHexCharacter { c, index }.into());
            }
            run = 0;
            continue;
        }
        compact.push(c);
        run += 1;
    }

    Ok(hex::decode(compact)?)
}

fn is_separator(c: char) -> bool {
    matches!(c, ':' | '-') || c.is_whitespace()
}

pub fn format_buffer(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
