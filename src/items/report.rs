//! Report items.
//!
//! A report's `definition.pbir` points at its semantic model either by a path
//! inside the repository (`byPath`) or by a live connection (`byConnection`).
//! Both are rewritten into a connection that is valid in the target workspace.

use std::path::Path;

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::Serialize;
use serde_json::Value;

use crate::endpoint::{list_items, list_workspaces};
use crate::error::DeployError;
use crate::model::{ByConnection, ReportParameterSet};
use crate::publish::{FabricWorkspace, PublishedItem};
use crate::repository::{FileContents, ItemFile, RepositoryItem, normalize_path};
use crate::resolve::{resolve_item_id, resolve_workspace_id};

use super::{REPORT, SEMANTIC_MODEL};

pub const DEFINITION_FILE: &str = "definition.pbir";

/// Local Power BI Desktop cache, never deployed.
const EXCLUDE_GLOB: &str = "**/*.pbi/**";

pub fn publish_reports(workspace: &FabricWorkspace) -> Result<Vec<PublishedItem>> {
    let exclude = exclude_set()?;
    let names: Vec<String> = workspace
        .repository
        .items_of_type(REPORT)
        .map(|item| item.name.clone())
        .collect();

    let mut published = Vec::with_capacity(names.len());
    for name in names {
        let span = tracing::info_span!("report", item = %name);
        let _guard = span.enter();
        published.push(workspace.publish_item(&name, REPORT, &exclude, process_report_file)?);
    }
    Ok(published)
}

fn exclude_set() -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    builder.add(Glob::new(EXCLUDE_GLOB).context("compile report exclude glob")?);
    builder.build().context("build report exclude set")
}

/// Rewrites the dataset reference of `definition.pbir`; every other file is
/// returned unchanged.
pub fn process_report_file(
    workspace: &FabricWorkspace,
    item: &RepositoryItem,
    file: &ItemFile,
) -> Result<FileContents, DeployError> {
    if file.name != DEFINITION_FILE {
        return Ok(file.contents.clone());
    }
    let Some(contents) = file.text() else {
        return Err(DeployError::invalid_definition(&file.name, "not utf-8 text"));
    };

    let mut definition: Value = serde_json::from_str(contents)
        .map_err(|err| DeployError::invalid_definition(&file.name, err))?;

    let Some(dataset_ref) = definition.get("datasetReference") else {
        return Ok(file.contents.clone());
    };

    let connection = if let Some(by_path) = dataset_ref.get("byPath").filter(|v| !v.is_null()) {
        let rel = by_path
            .get("path")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                DeployError::invalid_definition(&file.name, "datasetReference.byPath.path missing")
            })?;
        connect_by_path(workspace, item, rel)?
    } else if dataset_ref.get("byConnection").is_some()
        && let Some(params) = workspace
            .settings
            .report_parameters
            .lookup(&item.name, workspace.environment())
    {
        connect_cross_workspace(workspace, params)?
    } else {
        return Ok(file.contents.clone());
    };

    definition["datasetReference"] = serde_json::json!({ "byConnection": connection });
    to_pretty_json(&definition)
        .map(FileContents::Text)
        .map_err(|err| DeployError::invalid_definition(&file.name, err))
}

fn connect_by_path(
    workspace: &FabricWorkspace,
    item: &RepositoryItem,
    rel: &str,
) -> Result<ByConnection, DeployError> {
    let model_path = normalize_path(&item.path.join(Path::new(rel)));
    let Some(model_id) = workspace.convert_path_to_id(SEMANTIC_MODEL, &model_path) else {
        let msg = format!(
            "Semantic model at '{}' not found in the repository. Cannot deploy a report with a relative path without deploying the model.",
            rel
        );
        tracing::error!("{}", msg);
        return Err(DeployError::Dependency(msg));
    };
    tracing::debug!(model = %model_path.display(), model_id = %model_id, "resolved byPath reference");
    Ok(ByConnection::local(&model_id))
}

fn connect_cross_workspace(
    workspace: &FabricWorkspace,
    params: &ReportParameterSet,
) -> Result<ByConnection, DeployError> {
    let workspace_name = &params.workspace_name;
    let model_name = &params.semantic_model_name;

    let workspaces = list_workspaces(workspace.endpoint.as_ref(), workspace.api_root())?;
    let Some(workspace_id) = resolve_workspace_id(workspace_name, &workspaces) else {
        let msg = format!(
            "Workspace GUID for '{}' not found. Cannot deploy report.",
            workspace_name
        );
        tracing::error!("{}", msg);
        return Err(DeployError::Dependency(msg));
    };

    let items = list_items(workspace.endpoint.as_ref(), workspace.api_root(), &workspace_id)?;
    let model_id = match resolve_item_id(model_name, &workspace_id, &items) {
        Ok(id) => id,
        Err(DeployError::NotFound { .. }) => {
            let msg = format!(
                "Semantic Model GUID for '{}' in '{}' not found. Cannot deploy report.",
                model_name, workspace_name
            );
            tracing::error!("{}", msg);
            return Err(DeployError::Dependency(msg));
        }
        Err(err) => return Err(err),
    };

    tracing::debug!(workspace_id = %workspace_id, model_id = %model_id, "resolved cross-workspace reference");
    Ok(ByConnection::cross_workspace(workspace_name, model_name, &model_id))
}

fn to_pretty_json(value: &Value) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    // serde_json only emits valid utf-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
#[path = "../tests/items/report_tests.rs"]
mod tests;
