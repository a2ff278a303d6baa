use std::cell::RefCell;

use super::*;

struct Canned {
    body: serde_json::Value,
    urls: RefCell<Vec<String>>,
}

impl Endpoint for Canned {
    fn invoke(&self, method: Method, url: &str) -> Result<EndpointResponse> {
        assert_eq!(method, Method::GET);
        self.urls.borrow_mut().push(url.to_string());
        Ok(EndpointResponse {
            status_code: 200,
            body: self.body.clone(),
        })
    }
}

struct Failing;

impl Endpoint for Failing {
    fn invoke(&self, _method: Method, _url: &str) -> Result<EndpointResponse> {
        Err(anyhow::anyhow!("connection refused")).context("GET")
    }
}

#[test]
fn list_items_targets_workspace_items_url() {
    let endpoint = Canned {
        body: serde_json::json!({ "value": [{ "displayName": "M", "id": "1" }] }),
        urls: RefCell::new(Vec::new()),
    };
    let listing = list_items(&endpoint, "https://api.test", "ws-1").expect("list items");
    assert_eq!(listing.value.len(), 1);
    assert_eq!(
        *endpoint.urls.borrow(),
        vec!["https://api.test/v1/workspaces/ws-1/items".to_string()]
    );
}

#[test]
fn envelope_without_value_is_malformed() {
    let endpoint = Canned {
        body: serde_json::json!({ "items": [] }),
        urls: RefCell::new(Vec::new()),
    };
    let err = list_workspaces(&endpoint, "https://api.test").expect_err("malformed");
    match err {
        DeployError::MalformedListing { url, .. } => {
            assert_eq!(url, "https://api.test/v1/workspaces");
        }
        other => panic!("expected MalformedListing, got {:?}", other),
    }
}

#[test]
fn transport_failure_becomes_endpoint_error() {
    let err = list_workspaces(&Failing, "https://api.test").expect_err("transport failure");
    match err {
        DeployError::Endpoint { url, message } => {
            assert_eq!(url, "https://api.test/v1/workspaces");
            assert!(message.contains("connection refused"));
        }
        other => panic!("expected Endpoint, got {:?}", other),
    }
}
