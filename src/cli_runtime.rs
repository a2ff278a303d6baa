use anyhow::Result;
use clap::Parser;

use crate::Commands;

#[derive(Parser)]
#[command(name = "fabric-deploy")]
#[command(about = "Deploy Fabric items from a repository checkout", long_about = None)]
pub(crate) struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    fabric_deploy::logging::init(cli.verbose);
    crate::cli_exec::handle_command(cli.command)
}
