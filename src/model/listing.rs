use serde::{Deserialize, Serialize};

/// Body of a list response (`GET /v1/workspaces`, `GET /v1/workspaces/{id}/items`).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Listing {
    pub value: Vec<ListingRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingRecord {
    pub display_name: String,
    pub id: String,

    // Only present on item listings.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
}

impl Listing {
    pub fn from_body(body: &serde_json::Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(body)
    }
}
