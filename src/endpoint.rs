//! HTTP access to the Fabric REST API.

use anyhow::{Context, Result};
use reqwest::Method;

use crate::error::DeployError;
use crate::model::Listing;

mod http_client;
use self::http_client::{Failure, check_status, with_retries};

pub const FABRIC_API_ROOT_URL: &str = "https://api.fabric.microsoft.com";

#[derive(Clone, Debug)]
pub struct EndpointResponse {
    pub status_code: u16,
    pub body: serde_json::Value,
}

/// Capability to call the remote API.
///
/// Errors describe what went wrong with the request; naming the request is
/// left to the caller.
pub trait Endpoint {
    fn invoke(&self, method: Method, url: &str) -> Result<EndpointResponse>;
}

pub struct FabricEndpoint {
    token: String,
    client: reqwest::blocking::Client,
}

impl FabricEndpoint {
    pub fn new(token: String) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("fabric-deploy")
            .build()
            .context("build reqwest client")?;
        Ok(Self { token, client })
    }

    fn send(&self, method: &Method, url: &str) -> Result<EndpointResponse, Failure> {
        let resp = self
            .client
            .request(method.clone(), url)
            .bearer_auth(&self.token)
            .send()?;
        let status = resp.status();
        check_status(status)?;
        let bytes = resp.bytes()?;
        let body = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .context("parse response body")
                .map_err(Failure::Fatal)?
        };
        Ok(EndpointResponse {
            status_code: status.as_u16(),
            body,
        })
    }
}

impl Endpoint for FabricEndpoint {
    fn invoke(&self, method: Method, url: &str) -> Result<EndpointResponse> {
        tracing::debug!(%method, url, "invoke");
        if method == Method::GET {
            with_retries(&format!("{} {}", method, url), || self.send(&method, url))
        } else {
            self.send(&method, url).map_err(Failure::into_error)
        }
    }
}

pub fn list_workspaces(endpoint: &dyn Endpoint, api_root: &str) -> Result<Listing, DeployError> {
    fetch_listing(endpoint, &format!("{}/v1/workspaces", api_root))
}

pub fn list_items(
    endpoint: &dyn Endpoint,
    api_root: &str,
    workspace_id: &str,
) -> Result<Listing, DeployError> {
    fetch_listing(
        endpoint,
        &format!("{}/v1/workspaces/{}/items", api_root, workspace_id),
    )
}

fn fetch_listing(endpoint: &dyn Endpoint, url: &str) -> Result<Listing, DeployError> {
    let resp = endpoint
        .invoke(Method::GET, url)
        .map_err(|err| DeployError::Endpoint {
            url: url.to_string(),
            message: format!("{:#}", err),
        })?;
    Listing::from_body(&resp.body).map_err(|err| DeployError::MalformedListing {
        url: url.to_string(),
        message: err.to_string(),
    })
}

#[cfg(test)]
#[path = "tests/endpoint/listing_tests.rs"]
mod tests;
