use clap::Args;

/// Global arguments that apply to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Suppress all log output
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Show informational logs (honours RUST_LOG)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Disable colored log output (NO_COLOR also covers error messages)
    #[arg(long, global = true)]
    pub no_color: bool,
}

impl GlobalArgs {
    /// Whether color was switched off by flag or by the `NO_COLOR` convention.
    pub fn color_disabled(&self) -> bool {
        self.no_color || std::env::var_os("NO_COLOR").is_some()
    }
}
