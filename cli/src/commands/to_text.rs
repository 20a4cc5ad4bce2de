use anyhow::Context;
use colored::*;

use crate::terminal::{colors, print};
use ipconv_common::address::IPV6_LEN;
use ipconv_common::buffer::parse_buffer;
use ipconv_common::config::Config;
use ipconv_core::convert::buffer_to_address_text;
use ipconv_core::window::resolve_read_window;

pub fn to_text(buffer: &str, offset: Option<i64>, length: Option<i64>, cfg: &Config) -> anyhow::Result<()> {
    print::header("to text", cfg.quiet);

    let bytes: Vec<u8> = parse_buffer(buffer).context("reading buffer argument")?;
    let read_len: usize = resolve_read_window(bytes.len(), offset, length).map_or(0, |range| range.len());

    let value: ColoredString = match buffer_to_address_text(&bytes, offset, length) {
        Some(text) => text.color(address_color(read_len)),
        None => print::null(),
    };
    print::result_line("address", value, cfg.quiet);
    Ok(())
}

/// Picks the family color from the number of bytes the address was read from.
fn address_color(read_len: usize) -> Color {
    if read_len == IPV6_LEN {
        colors::IPV6_ADDR
    } else {
        colors::IPV4_ADDR
    }
}
