use anyhow::{Context, Result};

use fabric_deploy::endpoint::{list_items, list_workspaces};
use fabric_deploy::resolve::{resolve_item_id, resolve_workspace_id};

use crate::cli_commands::ApiArgs;

use super::endpoint;

pub(super) fn handle_resolve_workspace_command(name: &str, api: &ApiArgs, json: bool) -> Result<()> {
    let endpoint = endpoint(api)?;
    let listing = list_workspaces(&endpoint, api.api_root())?;
    let id = resolve_workspace_id(name, &listing)
        .with_context(|| format!("workspace not found: {}", name))?;
    print_id(name, &id, json)
}

pub(super) fn handle_resolve_item_command(
    name: &str,
    workspace_id: &str,
    api: &ApiArgs,
    json: bool,
) -> Result<()> {
    let endpoint = endpoint(api)?;
    let listing = list_items(&endpoint, api.api_root(), workspace_id)?;
    let id = resolve_item_id(name, workspace_id, &listing)?;
    print_id(name, &id, json)
}

fn print_id(name: &str, id: &str, json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({ "name": name, "id": id }))
                .context("serialize id")?
        );
    } else {
        println!("{}", id);
    }
    Ok(())
}
