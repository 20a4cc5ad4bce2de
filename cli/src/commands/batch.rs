use std::io::{self, BufRead};
use std::time::Instant;

use anyhow::Context;
use rayon::prelude::*;
use tracing::info;

use crate::terminal::print;
use ipconv_common::config::Config;
use ipconv_common::error::ArgumentError;
use ipconv_core::convert::{AddressNumber, address_to_number};

type Converted = (String, Option<AddressNumber>);

pub fn batch(cfg: &Config) -> anyhow::Result<()> {
    print::header("batch", cfg.quiet);

    let start_time: Instant = Instant::now();
    let lines: Vec<String> = read_lines(io::stdin().lock())?;
    let converted: Vec<Converted> = convert_lines(&lines);

    for (address, number) in &converted {
        match number {
            Some(number) => print::print(&format!("{address} {number}")),
            None => print::print(&format!("{address} null")),
        }
    }

    if cfg.quiet == 0 {
        let valid: usize = converted.iter().filter(|(_, n)| n.is_some()).count();
        info!(
            "Converted {valid} of {} addresses in {:.2?}",
            converted.len(),
            start_time.elapsed()
        );
    }
    Ok(())
}

/// Reads one address per line, skipping empty lines.
///
/// Only the line terminator is removed; any other whitespace reaches the classifier.
fn read_lines<R: BufRead>(reader: R) -> anyhow::Result<Vec<String>> {
    let mut lines: Vec<String> = Vec::new();

    for (idx, chunk) in reader.split(b'\n').enumerate() {
        let chunk: Vec<u8> = chunk.context("reading batch input")?;
        let line: String =
            String::from_utf8(chunk).map_err(|_| ArgumentError::InvalidBatchLine { line: idx + 1 })?;

        let address: &str = line.strip_suffix('\r').unwrap_or(line.as_str());
        if !address.is_empty() {
            lines.push(address.to_string());
        }
    }
    Ok(lines)
}

/// Converts in parallel; output order follows input order.
fn convert_lines(lines: &[String]) -> Vec<Converted> {
    lines
        .par_iter()
        .map(|address| (address.clone(), address_to_number(address)))
        .collect()
}
