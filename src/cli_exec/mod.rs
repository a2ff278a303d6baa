use anyhow::{Context, Result};

use fabric_deploy::endpoint::FabricEndpoint;

use crate::cli_commands::ApiArgs;
use crate::{Commands, ResolveCommands};

mod publish;
mod resolve;

pub(super) fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Publish(args) => publish::handle_publish_command(args)?,
        Commands::Resolve { command } => match command {
            ResolveCommands::Workspace { name, api, json } => {
                resolve::handle_resolve_workspace_command(&name, &api, json)?
            }
            ResolveCommands::Item {
                name,
                workspace_id,
                api,
                json,
            } => resolve::handle_resolve_item_command(&name, &workspace_id, &api, json)?,
        },
    }
    Ok(())
}

fn endpoint(api: &ApiArgs) -> Result<FabricEndpoint> {
    FabricEndpoint::new(api.token.clone()).context("create fabric endpoint")
}
