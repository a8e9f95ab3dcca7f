mod commands;
mod terminal;

use commands::CommandLine;
use linkprobe_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = Config::from(&commands);

    logging::init_logging(cfg.verbosity)?;
    print::initialize(&cfg);

    commands::check::check(&cfg)
}
