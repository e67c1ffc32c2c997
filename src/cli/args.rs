use clap::{Args, Subcommand};
use ecoji::Variant;
use std::path::PathBuf;

/// Arguments for encoding and decoding
#[derive(Args, Debug)]
pub struct CodecArgs {
    /// Input file (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Decode emoji back to bytes (either generation, concatenations allowed)
    #[arg(short = 'd', long)]
    pub decode: bool,

    /// Break encoded lines after COLS symbols (0 disables wrapping)
    #[arg(short = 'w', long, value_name = "COLS")]
    pub wrap: Option<usize>,

    /// Encode with the first-generation alphabet
    #[arg(short = '1', long = "v1", conflicts_with = "v2")]
    pub v1: bool,

    /// Encode with the second-generation alphabet
    #[arg(long = "v2")]
    pub v2: bool,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl CodecArgs {
    /// Generation requested on the command line, if any.
    pub fn variant(&self) -> Option<Variant> {
        if self.v1 {
            Some(Variant::V1)
        } else if self.v2 {
            Some(Variant::V2)
        } else {
            None
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the effective settings and the files they were loaded from
    Config(ConfigArgs),
}

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Only print the path of the user configuration file
    #[arg(long)]
    pub path: bool,
}
