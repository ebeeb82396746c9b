//! `foliogen` — static portfolio page generator for data-analysis projects

use clap::Parser;

use foliogen::cli::args::Cli;
use foliogen::cli::commands;
use foliogen::error::ExitCode;
use foliogen::observability::{LogFormat, init_logging};

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(LogFormat::Human, cli.verbose, cli.color);
    }

    match commands::dispatch(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
