use clap::{Parser, Subcommand};
use radcube_lib::FileType;
use simplelog::LevelFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Log level for output (error, warn, info, debug, trace)
    #[arg(global = true, long, default_value = "info")]
    pub loglevel: LevelFilter,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a capture recorded with per-chirp pairwise interleaving
    Interleaved(ConvertArgs),

    /// Decode a capture recorded as 4-word I/Q groups
    Grouped(ConvertArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Path to the raw .bin capture file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to the .json file with the radar parameters of the recording
    #[arg(short, long)]
    pub params: PathBuf,

    /// Output file for the decoded data cube
    #[arg(short, long)]
    pub output: PathBuf,

    /// Specify output format, e.g., 'npy'
    #[arg(long, default_value = "npy")]
    pub format: FileType,
}
