#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use std::thread;

use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri, header};
use axum::{Json, Router};
use reqwest::Method;

use fabric_deploy::endpoint::{Endpoint, EndpointResponse};
/// Endpoint answering GETs from a url -> body table.
#[derive(Default)]
pub struct CannedEndpoint {
    pub bodies: HashMap<String, serde_json::Value>,
    pub calls: Rc<RefCell<Vec<String>>>,
}

impl CannedEndpoint {
    pub fn with(mut self, url: &str, body: serde_json::Value) -> Self {
        self.bodies.insert(url.to_string(), body);
        self
    }
}

impl Endpoint for CannedEndpoint {
    fn invoke(&self, method: Method, url: &str) -> Result<EndpointResponse> {
        anyhow::ensure!(method == Method::GET, "unexpected method {}", method);
        self.calls.borrow_mut().push(url.to_string());
        let body = self
            .bodies
            .get(url)
            .cloned()
            .with_context(|| format!("no canned response for {}", url))?;
        Ok(EndpointResponse {
            status_code: 200,
            body,
        })
    }
}

pub fn write_item(root: &Path, dir: &str, item_type: &str, name: &str) -> Result<PathBuf> {
    let item_dir = root.join(dir);
    std::fs::create_dir_all(&item_dir).context("create item dir")?;
    let platform = serde_json::json!({
        "$schema": "https://developer.microsoft.com/json-schemas/fabric/gitIntegration/platformProperties/2.0.0/schema.json",
        "metadata": { "type": item_type, "displayName": name },
        "config": { "version": "2.0", "logicalId": format!("{}-{}", item_type, name) }
    });
    std::fs::write(
        item_dir.join(".platform"),
        serde_json::to_vec_pretty(&platform).context("serialize .platform")?,
    )
    .context("write .platform")?;
    Ok(item_dir)
}

#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
}

pub struct JsonServer {
    pub base_url: String,
    pub requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

struct ServerState {
    routes: HashMap<String, (StatusCode, serde_json::Value)>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

async fn respond(
    State(state): State<Arc<ServerState>>,
    method: axum::http::Method,
    uri: Uri,
    headers: HeaderMap,
) -> (StatusCode, Json<serde_json::Value>) {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    if let Ok(mut requests) = state.requests.lock() {
        requests.push(RecordedRequest {
            method: method.to_string(),
            path: uri.path().to_string(),
            authorization,
        });
    }
    match state.routes.get(uri.path()) {
        Some((status, body)) => (*status, Json(body.clone())),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "errorCode": "EntityNotFound" })),
        ),
    }
}

/// Serves `routes` (path -> (status, body)) from an axum router on a
/// background runtime until the test process exits. Unknown paths get 404.
pub fn spawn_json_server(routes: Vec<(&str, u16, serde_json::Value)>) -> Result<JsonServer> {
    let routes = routes
        .into_iter()
        .map(|(path, status, body)| {
            let status = StatusCode::from_u16(status)
                .with_context(|| format!("status for {}", path))?;
            Ok((path.to_string(), (status, body)))
        })
        .collect::<Result<HashMap<_, _>>>()?;
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = Arc::new(ServerState {
        routes,
        requests: requests.clone(),
    });
    let app = Router::new().fallback(respond).with_state(state);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .context("build test server runtime")?;
    let listener = runtime
        .block_on(tokio::net::TcpListener::bind("127.0.0.1:0"))
        .context("bind test server")?;
    let addr = listener.local_addr().context("test server addr")?;

    thread::spawn(move || {
        let _ = runtime.block_on(async move { axum::serve(listener, app).await });
    });

    Ok(JsonServer {
        base_url: format!("http://{}", addr),
        requests,
    })
}
