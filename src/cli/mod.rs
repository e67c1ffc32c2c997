mod args;
mod commands;
mod global;
mod handlers;

use args::{CodecArgs, Commands};
use clap::Parser;
use ecoji::EcojiConfig;
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "ecoji")]
#[command(version)]
#[command(about = "Encode and decode data as emoji, 10 bits per symbol", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    global: GlobalArgs,

    #[command(flatten)]
    codec: CodecArgs,
}

fn init_tracing(global: &GlobalArgs) {
    // --quiet silences everything, --verbose shows info or whatever RUST_LOG
    // asks for, and the default only lets warnings through.
    let filter = if global.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if global.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(!global.color_disabled())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(&cli.global);

    // Load settings with user overrides
    let config = EcojiConfig::load_with_overrides()?;

    match &cli.command {
        Some(Commands::Config(args)) => handlers::config::handle(args, &config),
        None if cli.codec.decode => handlers::decode::handle(&cli.codec),
        None => handlers::encode::handle(&cli.codec, &config),
    }
}
