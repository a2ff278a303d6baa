use std::path::PathBuf;

use clap::Args;

use super::ApiArgs;

#[derive(Args)]
pub(crate) struct PublishArgs {
    /// Repository root holding the item directories
    #[arg(long)]
    pub(crate) repository: PathBuf,
    /// Target workspace id
    #[arg(long)]
    pub(crate) workspace_id: String,
    /// Environment name used to select report parameters
    #[arg(long)]
    pub(crate) environment: String,
    /// Parameter file (YAML) with `report_parameters`
    #[arg(long)]
    pub(crate) parameters: Option<PathBuf>,
    /// Directory receiving the staged item definitions
    #[arg(long, default_value = "staged")]
    pub(crate) output: PathBuf,
    #[command(flatten)]
    pub(crate) api: ApiArgs,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}
