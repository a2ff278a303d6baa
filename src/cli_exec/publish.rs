use anyhow::{Context, Result};

use fabric_deploy::config::{DeploySettings, load_parameter_file};
use fabric_deploy::items::report::publish_reports;
use fabric_deploy::publish::FabricWorkspace;
use fabric_deploy::repository::Repository;

use crate::cli_commands::publish::PublishArgs;

use super::endpoint;

pub(super) fn handle_publish_command(args: PublishArgs) -> Result<()> {
    let repository = Repository::scan(&args.repository)?;

    let mut settings = DeploySettings::new(&args.workspace_id, &args.environment, &args.output);
    settings.api_root = args.api.api_root().to_string();
    if let Some(path) = &args.parameters {
        settings.report_parameters = load_parameter_file(path)?.report_parameters;
    }

    let endpoint = endpoint(&args.api)?;
    let mut workspace = FabricWorkspace::new(settings, repository, Box::new(endpoint));
    workspace
        .refresh_deployed_items()
        .context("list target workspace items")?;

    let published = publish_reports(&workspace)?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&published).context("serialize published items")?
        );
    } else if published.is_empty() {
        println!("No report items found in {}", args.repository.display());
    } else {
        for item in &published {
            println!(
                "{} -> {} (files={} rewritten={} excluded={})",
                item.name,
                item.staged_dir.display(),
                item.files,
                item.rewritten,
                item.excluded
            );
        }
    }
    Ok(())
}
