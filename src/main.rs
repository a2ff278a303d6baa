mod cli_commands;
mod cli_exec;
mod cli_runtime;

use crate::cli_commands::{Commands, ResolveCommands};

fn main() {
    if let Err(err) = cli_runtime::run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
