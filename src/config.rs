use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::endpoint::FABRIC_API_ROOT_URL;
use crate::model::{ParameterFile, ReportParameters};

/// Everything a deployment run needs besides the repository and the endpoint.
#[derive(Clone, Debug)]
pub struct DeploySettings {
    pub api_root: String,
    pub workspace_id: String,
    pub environment: String,
    /// Where processed item definitions are staged.
    pub output_dir: PathBuf,
    pub report_parameters: ReportParameters,
}

impl DeploySettings {
    pub fn new(workspace_id: &str, environment: &str, output_dir: &Path) -> Self {
        Self {
            api_root: FABRIC_API_ROOT_URL.to_string(),
            workspace_id: workspace_id.to_string(),
            environment: environment.to_string(),
            output_dir: output_dir.to_path_buf(),
            report_parameters: ReportParameters::default(),
        }
    }
}

pub fn load_parameter_file(path: &Path) -> Result<ParameterFile> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_parameter_file(&text).with_context(|| format!("parse {}", path.display()))
}

pub fn parse_parameter_file(text: &str) -> Result<ParameterFile> {
    if text.trim().is_empty() {
        return Ok(ParameterFile::default());
    }
    let parsed: ParameterFile = serde_yaml::from_str(text).context("parse parameter yaml")?;
    Ok(parsed)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
