//! Terminal front end for the rehearse study tool.

use clap::Parser;

mod cli;
mod commands;
mod logging;
mod summary;

use crate::cli::{Cli, Command};
use crate::commands::{run_check, run_study, run_themes};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.log_level);

    let exit_code = match cli.command {
        Command::Check(args) => match run_check(&args) {
            Ok(valid) => {
                if valid {
                    0
                } else {
                    1
                }
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Themes(args) => match run_themes(&args) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Study(args) => match run_study(&args) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}
