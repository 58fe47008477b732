mod cli;
mod convert;

use clap::Parser;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use crate::cli::{Cli, Commands};
use crate::convert::{run_conversion, Layout};

fn main() {
    let cli = Cli::parse();

    TermLogger::init(
        cli.loglevel,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .expect("Failed to initialize logger");

    let result = match cli.command {
        Commands::Interleaved(args) => run_conversion(args, Layout::Interleaved),
        Commands::Grouped(args) => run_conversion(args, Layout::Grouped),
    };

    if let Err(e) = result {
        log::error!("Conversion failed: {}", e);
        std::process::exit(1);
    }
}
