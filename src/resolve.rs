//! Name -> id lookups over listings already fetched from the API.
//!
//! The two lookups deliberately differ on absence: a missing workspace is
//! reported as `None` and left to the caller, a missing item is an error.

use std::collections::HashMap;

use crate::error::DeployError;
use crate::model::{Listing, ListingRecord};

/// Returns the id of the first workspace whose display name is exactly `name`.
pub fn resolve_workspace_id(name: &str, listing: &Listing) -> Option<String> {
    let found = listing
        .value
        .iter()
        .find(|ws| ws.display_name == name)
        .map(|ws| ws.id.clone());
    if found.is_none() {
        tracing::warn!(workspace = name, "workspace not found");
    }
    found
}

/// Returns the id of the item named `name` in `workspace_id`.
///
/// When the listing holds several records with the same display name, the
/// last one wins.
pub fn resolve_item_id(
    name: &str,
    workspace_id: &str,
    listing: &Listing,
) -> Result<String, DeployError> {
    let by_name: HashMap<&str, &ListingRecord> = listing
        .value
        .iter()
        .map(|item| (item.display_name.as_str(), item))
        .collect();

    by_name
        .get(name)
        .map(|item| item.id.clone())
        .ok_or_else(|| DeployError::NotFound {
            name: name.to_string(),
            workspace_id: workspace_id.to_string(),
        })
}

#[cfg(test)]
#[path = "tests/resolve_tests.rs"]
mod tests;
