use colored::*;

use crate::terminal::{colors, print};
use ipconv_common::config::Config;
use ipconv_core::convert::{AddressNumber, address_to_number};

pub fn to_number(address: &str, cfg: &Config) {
    print::header("to number", cfg.quiet);

    let value: ColoredString = match address_to_number(address) {
        Some(number @ AddressNumber::V4(_)) => number.to_string().color(colors::IPV4_ADDR),
        Some(number @ AddressNumber::V6(_)) => number.to_string().color(colors::IPV6_ADDR),
        None => print::null(),
    };
    print::result_line("number", value, cfg.quiet);
}
