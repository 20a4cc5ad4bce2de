mod commands;
mod terminal;

use commands::{CommandLine, Commands, batch, to_buffer, to_number, to_text};
use ipconv_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg = Config {
        quiet: commands.quiet,
        no_color: commands.no_color,
    };
    print::initialize(&cfg);

    match commands.command {
        Commands::ToBuffer {
            address,
            into,
            offset,
        } => to_buffer::to_buffer(&address, into.as_deref(), offset, &cfg),
        Commands::ToNumber { address } => {
            to_number::to_number(&address, &cfg);
            Ok(())
        }
        Commands::ToText {
            buffer,
            offset,
            length,
        } => to_text::to_text(&buffer, offset, length, &cfg),
        Commands::Batch => batch::batch(&cfg),
    }
}
