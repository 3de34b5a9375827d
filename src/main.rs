mod cli;

use std::process;

use clap::Parser;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = sign_tally::run(&cli.settings()) {
        log::error!("{e:#}");
        process::exit(1);
    }
}
