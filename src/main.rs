mod arc;
mod cli;
mod deployment;
mod env;
mod error;
mod focus;
mod git;
mod host;
mod output;
mod path_ext;
mod remote;

use clap::Parser;

use crate::error::formatter::ErrorFormatter;

fn main() {
    let cli = cli::Cli::parse();
    let verbose = cli.verbose;
    cli::init_logger(verbose);

    if let Err(err) = cli::run(cli) {
        eprintln!("{}", ErrorFormatter::new(verbose).format(&err));
        std::process::exit(1);
    }
}
