pub mod check;

use clap::{ArgAction, Parser};
use linkprobe_common::config::Config;

/// Running without arguments performs the full check.
#[derive(Parser)]
#[command(name = "linkprobe", version)]
#[command(about = "Reports active interfaces, subnet masks and the default gateway.")]
pub struct CommandLine {
    /// Only print findings, no banners or section headers
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count)]
    pub quiet: u8,

    /// Increase logging detail on stderr (-v: debug, -vv: trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbosity: u8,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Print a summary tree of the report at the end
    #[arg(short = 's', long = "summary")]
    pub summary: bool,

    /// Read interfaces from the OS interface table instead of command output
    #[arg(long = "native")]
    pub native: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl From<&CommandLine> for Config {
    fn from(cmd: &CommandLine) -> Self {
        Self {
            quiet: cmd.quiet,
            no_color: cmd.no_color,
            summary: cmd.summary,
            native: cmd.native,
            verbosity: cmd.verbosity,
        }
    }
}
