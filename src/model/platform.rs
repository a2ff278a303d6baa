use serde::{Deserialize, Serialize};

/// Contents of an item's `.platform` metadata file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlatformFile {
    pub metadata: PlatformMetadata,

    #[serde(default)]
    pub config: Option<PlatformConfig>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformMetadata {
    #[serde(rename = "type")]
    pub item_type: String,
    pub display_name: String,

    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformConfig {
    #[serde(default)]
    pub logical_id: Option<String>,
}
