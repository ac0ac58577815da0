//! unum - persona launcher for Claude Code
//!
//! Loads a persona config, resolves a per-directory session location,
//! expands the prompt template, and replaces this process with claude.

mod cli;
mod config;
mod error;
mod launch;
mod logging;
mod paths;
mod template;
mod version;

use std::process;

use clap::Parser;

use crate::cli::Cli;
use crate::error::ERROR_EXIT_CODE;

fn main() {
    logging::init();

    // Zero arguments and anything clap cannot shape both land on usage
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => exit_usage(),
    };

    match cli.persona.as_str() {
        "-h" | "--help" | "help" => exit_usage(),
        "-V" | "--version" => {
            version::print_version();
            return;
        }
        _ => {}
    }

    let result = if cli.args.first().map(String::as_str) == Some("init") {
        config::init_persona(&cli.persona)
    } else {
        // On success this never returns: the process image is replaced
        launch::launch(&cli.persona, &cli.args)
    };

    if let Err(e) = result {
        eprint!("{}", e.format_for_terminal());
        process::exit(ERROR_EXIT_CODE);
    }
}

fn exit_usage() -> ! {
    eprint!("{}", cli::usage());
    process::exit(ERROR_EXIT_CODE);
}
