//! Entry point for the textdupe CLI.

use clap::Parser;
use textdupe::{cli::Cli, error::ExitCode, logging};

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    match textdupe::run_app(&cli) {
        Ok(report) => std::process::exit(textdupe::exit_code(&report).as_i32()),
        Err(err) => {
            eprintln!("[{}] Error: {:#}", ExitCode::GeneralError.code_prefix(), err);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    }
}
