use anyhow::Context;
use colored::*;

use crate::terminal::{colors, print};
use ipconv_common::buffer::{format_buffer, parse_buffer};
use ipconv_common::config::Config;
use ipconv_core::convert::{address_into_buffer, address_to_buffer};

pub fn to_buffer(address: &str, into: Option<&str>, offset: i64, cfg: &Config) -> anyhow::Result<()> {
    print::header("to buffer", cfg.quiet);

    let Some(into) = into else {
        let value: ColoredString = match address_to_buffer(address) {
            Some(bytes) => format_buffer(&bytes).color(colors::ACCENT),
            None => print::null(),
        };
        print::result_line("buffer", value, cfg.quiet);
        return Ok(());
    };

    let mut buffer: Vec<u8> = parse_buffer(into).context("reading --into")?;

    let Some(tag) = address_into_buffer(address, &mut buffer, offset) else {
        print::result_line("family", print::null(), cfg.quiet);
        return Ok(());
    };

    if cfg.quiet > 0 {
        print::print(&format!("{} {}", tag, format_buffer(&buffer)));
    } else {
        print::aligned_line("family", tag.to_string().color(colors::NUMBER));
        print::aligned_line("buffer", format_buffer(&buffer).color(colors::ACCENT));
    }
    Ok(())
}
