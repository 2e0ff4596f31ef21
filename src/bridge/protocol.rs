//! Request/response messages of the stdio bridge.
//!
//! ```text
//! -> {"id": 1, "method": "download_update", "params": {"url": "...", "path": "..."}}
//! <- {"id": 1, "result": 1048576}
//! <- {"id": 2, "error": {"kind": "network", "message": "..."}}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

use crate::app::App;
use crate::error::Error;
use crate::release::FetchRelease;
use crate::runtime::Runtime;

/// Error kind for requests that cannot be understood.
pub const BAD_REQUEST: &str = "bad_request";

#[derive(Debug, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub id: Value,
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ErrorBody {
    pub kind: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct Response {
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

impl Response {
    pub fn ok(id: Value, result: Value) -> Self {
        Self {
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn err(id: Value, kind: &str, message: impl Into<String>) -> Self {
        Self {
            id,
            result: None,
            error: Some(ErrorBody {
                kind: kind.to_string(),
                message: message.into(),
            }),
        }
    }

    fn from_error(id: Value, error: Error) -> Self {
        Self::err(id, error.kind(), error.to_string())
    }
}

#[derive(Deserialize)]
struct DownloadParams {
    url: String,
    path: PathBuf,
}

#[derive(Deserialize)]
struct PathParams {
    path: PathBuf,
}

fn params<T: serde::de::DeserializeOwned>(request: &Request) -> Result<T, Response> {
    serde_json::from_value(request.params.clone()).map_err(|e| {
        Response::err(
            request.id.clone(),
            BAD_REQUEST,
            format!("Invalid params for {}: {}", request.method, e),
        )
    })
}

fn to_response<T: Serialize>(id: Value, result: crate::error::Result<T>) -> Response {
    match result {
        Ok(value) => match serde_json::to_value(value) {
            Ok(value) => Response::ok(id, value),
            Err(e) => Response::err(id, BAD_REQUEST, e.to_string()),
        },
        Err(e) => Response::from_error(id, e),
    }
}

/// Invoke the bound operation named by `request`.
#[tracing::instrument(skip(app, request), fields(method = %request.method))]
pub async fn dispatch<R: Runtime + 'static, F: FetchRelease + 'static>(
    app: &App<R, F>,
    request: Request,
) -> Response {
    let id = request.id.clone();
    match request.method.as_str() {
        "check_for_updates" => to_response(id, app.check_for_updates().await),
        "download_update" => match params::<DownloadParams>(&request) {
            Ok(p) => to_response(id, app.download_update(&p.url, &p.path).await),
            Err(response) => response,
        },
        "install_update" => match params::<PathParams>(&request) {
            Ok(p) => to_response(id, app.install_update(&p.path)),
            Err(response) => response,
        },
        "print_silent" => match params::<PathParams>(&request) {
            Ok(p) => to_response(id, app.print_silent(&p.path).await),
            Err(response) => response,
        },
        "get_app_version" => Response::ok(id, Value::from(app.get_app_version())),
        other => Response::err(id, BAD_REQUEST, format!("Unknown method: {}", other)),
    }
}
