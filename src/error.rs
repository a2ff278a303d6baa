//! Error type shared by the resolver, the item handlers and the publish driver.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeployError {
    /// A named artifact is missing from a workspace item listing.
    #[error("artifact with name {name} not found in workspace with id {workspace_id}")]
    NotFound { name: String, workspace_id: String },

    /// A cross-item dependency could not be resolved.
    #[error("{0}")]
    Dependency(String),

    #[error("invalid definition in {file}: {message}")]
    InvalidDefinition { file: String, message: String },

    #[error("malformed listing from {url}: {message}")]
    MalformedListing { url: String, message: String },

    #[error("request to {url} failed: {message}")]
    Endpoint { url: String, message: String },
}

impl DeployError {
    pub(crate) fn invalid_definition(file: &str, message: impl ToString) -> Self {
        Self::InvalidDefinition {
            file: file.to_string(),
            message: message.to_string(),
        }
    }
}
