pub mod batch;
pub mod to_buffer;
pub mod to_number;
pub mod to_text;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ipconv")]
#[command(about = "Convert IP addresses between text, bytes and numbers.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Print bare results only
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Show library diagnostics (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert an address to network-order bytes
    #[command(alias = "b")]
    ToBuffer {
        address: String,
        /// Existing buffer (hex) to write the address into
        #[arg(long, value_name = "HEX")]
        into: Option<String>,
        /// Write position in the buffer; negative counts from the end
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i64,
    },
    /// Convert an address to its numeric value
    #[command(alias = "n")]
    ToNumber { address: String },
    /// Format the address stored in a buffer (hex)
    #[command(alias = "t")]
    ToText {
        buffer: String,
        /// Read position in the buffer; negative counts from the end
        #[arg(long, allow_negative_numbers = true)]
        offset: Option<i64>,
        /// Number of bytes to read
        #[arg(long, allow_negative_numbers = true)]
        length: Option<i64>,
    },
    /// Convert addresses read from stdin, one per line
    #[command(alias = "x")]
    Batch,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
