//! Deployment context and the generic per-item staging step.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use globset::GlobSet;

use crate::config::DeploySettings;
use crate::endpoint::{Endpoint, list_items};
use crate::error::DeployError;
use crate::repository::{FileContents, ItemFile, Repository, RepositoryItem};

/// Target workspace plus everything item handlers may consult while
/// processing files.
pub struct FabricWorkspace {
    pub settings: DeploySettings,
    pub repository: Repository,
    pub endpoint: Box<dyn Endpoint>,
    // (item type, display name) -> id of items present in the target workspace.
    deployed: HashMap<(String, String), String>,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct PublishedItem {
    pub item_type: String,
    pub name: String,
    pub staged_dir: PathBuf,
    pub files: usize,
    pub rewritten: usize,
    pub excluded: usize,
}

impl FabricWorkspace {
    pub fn new(settings: DeploySettings, repository: Repository, endpoint: Box<dyn Endpoint>) -> Self {
        Self {
            settings,
            repository,
            endpoint,
            deployed: HashMap::new(),
        }
    }

    pub fn workspace_id(&self) -> &str {
        &self.settings.workspace_id
    }

    pub fn environment(&self) -> &str {
        &self.settings.environment
    }

    pub fn api_root(&self) -> &str {
        &self.settings.api_root
    }

    /// Records the ids of every typed item currently in the target workspace.
    pub fn refresh_deployed_items(&mut self) -> Result<usize, DeployError> {
        let listing = list_items(
            self.endpoint.as_ref(),
            &self.settings.api_root,
            &self.settings.workspace_id,
        )?;
        let mut recorded = 0;
        for record in listing.value {
            if let Some(item_type) = record.item_type {
                self.deployed
                    .insert((item_type, record.display_name), record.id);
                recorded += 1;
            }
        }
        tracing::debug!(workspace_id = %self.settings.workspace_id, recorded, "refreshed deployed items");
        Ok(recorded)
    }

    pub fn record_deployed_item(&mut self, item_type: &str, name: &str, id: &str) {
        self.deployed
            .insert((item_type.to_string(), name.to_string()), id.to_string());
    }

    pub fn deployed_id(&self, item_type: &str, name: &str) -> Option<&str> {
        self.deployed
            .get(&(item_type.to_string(), name.to_string()))
            .map(String::as_str)
    }

    /// Maps a repository item directory to the id of its deployed counterpart.
    pub fn convert_path_to_id(&self, item_type: &str, path: &Path) -> Option<String> {
        let item = self.repository.find_by_path(item_type, path)?;
        self.deployed_id(item_type, &item.name).map(str::to_string)
    }

    /// Where an item is staged: its directory relative to the repository
    /// root, under `output_dir`.
    pub fn staging_dir(&self, item: &RepositoryItem) -> PathBuf {
        let rel = item
            .path
            .strip_prefix(self.repository.root())
            .ok()
            .filter(|rel| !rel.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(item.dir_name()));
        self.settings.output_dir.join(rel)
    }

    /// Stages one item's files, passing each through `process`. Files
    /// matching `exclude` (relative to the item directory) are skipped.
    pub fn publish_item<F>(
        &self,
        name: &str,
        item_type: &str,
        exclude: &GlobSet,
        process: F,
    ) -> Result<PublishedItem>
    where
        F: Fn(&FabricWorkspace, &RepositoryItem, &ItemFile) -> Result<FileContents, DeployError>,
    {
        let item = self
            .repository
            .get(item_type, name)
            .with_context(|| format!("{} item '{}' not found in repository", item_type, name))?;

        let staged_dir = self.staging_dir(item);
        if staged_dir.exists() {
            fs::remove_dir_all(&staged_dir)
                .with_context(|| format!("clear {}", staged_dir.display()))?;
        }

        let mut summary = PublishedItem {
            item_type: item_type.to_string(),
            name: name.to_string(),
            staged_dir: staged_dir.clone(),
            files: 0,
            rewritten: 0,
            excluded: 0,
        };

        for file in item.files()? {
            if exclude.is_match(&file.relative_path) {
                tracing::debug!(file = %file.relative_path.display(), "excluded");
                summary.excluded += 1;
                continue;
            }

            let processed = process(self, item, &file)
                .with_context(|| format!("process {}", file.relative_path.display()))?;
            if processed != file.contents {
                summary.rewritten += 1;
            }

            let dest = staged_dir.join(&file.relative_path);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("create dir {}", parent.display()))?;
            }
            fs::write(&dest, processed.into_bytes()).with_context(|| format!("write {}", dest.display()))?;
            summary.files += 1;
        }

        tracing::info!(
            item_type,
            files = summary.files,
            rewritten = summary.rewritten,
            excluded = summary.excluded,
            "staged {}",
            name
        );
        Ok(summary)
    }
}

#[cfg(test)]
#[path = "tests/publish_tests.rs"]
mod tests;
