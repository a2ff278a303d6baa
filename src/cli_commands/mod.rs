use clap::{Args, Subcommand};

use fabric_deploy::endpoint::FABRIC_API_ROOT_URL;

pub(crate) mod publish;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Stage report items with their dataset references resolved
    Publish(publish::PublishArgs),

    /// Look up workspace or item ids by display name
    Resolve {
        #[command(subcommand)]
        command: ResolveCommands,
    },
}

#[derive(Subcommand)]
pub(crate) enum ResolveCommands {
    /// Print the id of a workspace
    Workspace {
        /// Workspace display name
        name: String,
        #[command(flatten)]
        api: ApiArgs,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the id of an item in a workspace
    Item {
        /// Item display name
        name: String,
        #[arg(long)]
        workspace_id: String,
        #[command(flatten)]
        api: ApiArgs,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
pub(crate) struct ApiArgs {
    /// Fabric REST API root
    #[arg(long, default_value = FABRIC_API_ROOT_URL)]
    pub(crate) api_root: String,
    /// Bearer token for the Fabric API
    #[arg(long, env = "FABRIC_TOKEN", hide_env_values = true)]
    pub(crate) token: String,
}

impl ApiArgs {
    pub(crate) fn api_root(&self) -> &str {
        self.api_root.trim_end_matches('/')
    }
}
