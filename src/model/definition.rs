use serde::{Deserialize, Serialize};

pub const VIRTUAL_SERVER_NAME: &str = "sobe_wowvirtualserver";
pub const DATA_SOURCE_NAME: &str = "EntityDataSource";
pub const CONNECTION_TYPE: &str = "pbiServiceXmlaStyleLive";

/// Live connection descriptor written under `datasetReference.byConnection`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ByConnection {
    pub connection_string: Option<String>,
    pub pbi_service_model_id: Option<String>,
    pub pbi_model_virtual_server_name: String,
    pub pbi_model_database_name: String,
    pub name: String,
    pub connection_type: String,
}

impl ByConnection {
    /// Connection to a model deployed alongside the report.
    pub fn local(model_id: &str) -> Self {
        Self {
            connection_string: None,
            pbi_service_model_id: None,
            pbi_model_virtual_server_name: VIRTUAL_SERVER_NAME.to_string(),
            pbi_model_database_name: model_id.to_string(),
            name: DATA_SOURCE_NAME.to_string(),
            connection_type: CONNECTION_TYPE.to_string(),
        }
    }

    /// Connection to a model living in another workspace.
    pub fn cross_workspace(workspace_name: &str, model_name: &str, model_id: &str) -> Self {
        Self {
            connection_string: Some(live_connection_string(workspace_name, model_name)),
            ..Self::local(model_id)
        }
    }
}

pub fn live_connection_string(workspace_name: &str, model_name: &str) -> String {
    format!(
        "Data Source=powerbi://api.powerbi.com/v1.0/myorg/{};initial catalog={};integrated security=ClaimsToken",
        workspace_name, model_name
    )
}
