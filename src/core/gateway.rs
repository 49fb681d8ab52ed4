//! Network call gateway: the one request executor every resource family goes
//! through.
//!
//! An operation runs in a fixed order: connectivity preflight, client
//! provisioning, a single HTTP request, outcome normalisation, and exactly one
//! observer callback. Nothing is retried, batched or cached here.
//!
//! Every call yields an [`ApiOutcome`]. Families then apply their error policy:
//! [`ApiOutcome::swallow`] folds failures into a `{"message": ...}` value,
//! [`ApiOutcome::propagate`] turns them into a [`GatewayError`].

use crate::adapters::http::HttpClients;
use crate::domain::model::AvatarUpload;
use crate::domain::ports::Connectivity;
use crate::utils::display::is_truthy;
use crate::utils::error::GatewayError;
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub const NO_NETWORK_MESSAGE: &str = "No Network Connection";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error";

/// Static description of one remote endpoint.
#[derive(Debug, Clone)]
pub struct Operation {
    pub name: &'static str,
    pub method: Method,
    pub requires_auth: bool,
}

impl Operation {
    pub const fn public(name: &'static str, method: Method) -> Self {
        Self {
            name,
            method,
            requires_auth: false,
        }
    }

    pub const fn authenticated(name: &'static str, method: Method) -> Self {
        Self {
            name,
            method,
            requires_auth: true,
        }
    }

    /// Message returned by the swallow policy when the server gave none.
    pub fn fallback_message(&self) -> String {
        format!("{} failed", self.name)
    }
}

#[derive(Debug)]
pub enum RequestBody {
    Empty,
    Json(Value),
    Multipart(AvatarUpload),
    /// Payload that could not be encoded; fails before anything is sent.
    Invalid(String),
}

impl RequestBody {
    pub fn json<T: Serialize>(payload: &T) -> Self {
        match serde_json::to_value(payload) {
            Ok(value) => RequestBody::Json(value),
            Err(e) => RequestBody::Invalid(e.to_string()),
        }
    }
}

#[derive(Debug)]
pub struct ApiRequest {
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_string(), value.into()));
        self
    }

    pub fn json<T: Serialize>(mut self, payload: &T) -> Self {
        self.body = RequestBody::json(payload);
        self
    }

    pub fn multipart(mut self, upload: AvatarUpload) -> Self {
        self.body = RequestBody::Multipart(upload);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Device reported no network; no request was issued.
    Connectivity,
    /// The authenticated client could not be obtained.
    Credential,
    /// The request payload could not be encoded.
    Encode,
    /// The request never produced an HTTP response.
    Transport,
    /// The server answered with a non-2xx status.
    Remote,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    pub kind: FailureKind,
    pub status: Option<u16>,
    /// Parsed response body for `Remote` failures; `None` when the body was empty.
    pub body: Option<Value>,
    pub detail: String,
}

impl Failure {
    pub fn no_network() -> Self {
        Self {
            kind: FailureKind::Connectivity,
            status: None,
            body: None,
            detail: NO_NETWORK_MESSAGE.to_string(),
        }
    }

    fn local(kind: FailureKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            status: None,
            body: None,
            detail: detail.into(),
        }
    }

    fn remote(status: u16, body: Option<Value>) -> Self {
        Self {
            kind: FailureKind::Remote,
            status: Some(status),
            body,
            detail: format!("HTTP {}", status),
        }
    }

    /// `message` field the server put in its error body, kept as sent.
    /// Falsy values (`null`, `false`, `0`, `""`) do not count.
    pub fn server_message(&self) -> Option<&Value> {
        self.body
            .as_ref()
            .and_then(|body| body.get("message"))
            .filter(|message| is_truthy(message))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome {
    Success(Value),
    Failure(Failure),
}

impl ApiOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiOutcome::Success(_))
    }

    /// Swallow policy: failures become `{"message": ...}` and are returned
    /// like any other payload.
    pub fn swallow(self, operation: &Operation) -> Value {
        match self {
            ApiOutcome::Success(body) => body,
            ApiOutcome::Failure(failure) => {
                let message = match failure.kind {
                    FailureKind::Connectivity => json!(NO_NETWORK_MESSAGE),
                    _ => failure
                        .server_message()
                        .cloned()
                        .unwrap_or_else(|| json!(operation.fallback_message())),
                };
                json!({ "message": message })
            }
        }
    }

    /// Propagate policy: an HTTP error body is handed back verbatim as
    /// [`GatewayError::RemoteError`], everything else is a generic network
    /// error. Missing connectivity is still answered with the sentinel value.
    pub fn propagate(self) -> Result<Value, GatewayError> {
        match self {
            ApiOutcome::Success(body) => Ok(body),
            ApiOutcome::Failure(failure) => match failure.kind {
                FailureKind::Connectivity => Ok(json!({ "message": NO_NETWORK_MESSAGE })),
                FailureKind::Remote if failure.body.is_some() => Err(GatewayError::RemoteError {
                    status: failure.status.unwrap_or_default(),
                    body: failure.body.unwrap_or(Value::Null),
                }),
                _ => Err(GatewayError::NetworkError {
                    message: NETWORK_ERROR_MESSAGE.to_string(),
                }),
            },
        }
    }
}

/// One observation per gateway call.
#[derive(Debug)]
pub struct CallEvent<'a> {
    pub operation: &'a str,
    pub method: &'a Method,
    pub path: &'a str,
    pub outcome: &'a ApiOutcome,
    pub latency: Duration,
}

pub trait CallObserver: Send + Sync {
    fn observe(&self, event: &CallEvent<'_>);
}

/// Writes every call to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl CallObserver for TracingObserver {
    fn observe(&self, event: &CallEvent<'_>) {
        let latency_ms = event.latency.as_millis() as u64;
        match event.outcome {
            ApiOutcome::Success(body) => tracing::info!(
                operation = event.operation,
                method = %event.method,
                path = event.path,
                latency_ms,
                "📝 {}: {}",
                event.operation,
                body
            ),
            ApiOutcome::Failure(failure) => tracing::error!(
                operation = event.operation,
                method = %event.method,
                path = event.path,
                latency_ms,
                kind = ?failure.kind,
                status = failure.status,
                "❌ {} Error: {}",
                event.operation,
                failure
                    .body
                    .as_ref()
                    .map(|body| body.to_string())
                    .unwrap_or_else(|| failure.detail.clone())
            ),
        }
    }
}

pub struct Gateway {
    clients: HttpClients,
    connectivity: Arc<dyn Connectivity>,
    observer: Arc<dyn CallObserver>,
}

impl Gateway {
    pub fn new(
        clients: HttpClients,
        connectivity: Arc<dyn Connectivity>,
        observer: Arc<dyn CallObserver>,
    ) -> Self {
        Self {
            clients,
            connectivity,
            observer,
        }
    }

    pub fn clients(&self) -> &HttpClients {
        &self.clients
    }

    pub async fn execute(&self, operation: &Operation, request: ApiRequest) -> ApiOutcome {
        let started = Instant::now();
        let path = request.path.clone();
        let outcome = self.dispatch(operation, request).await;

        self.observer.observe(&CallEvent {
            operation: operation.name,
            method: &operation.method,
            path: &path,
            outcome: &outcome,
            latency: started.elapsed(),
        });

        outcome
    }

    async fn dispatch(&self, operation: &Operation, request: ApiRequest) -> ApiOutcome {
        if !self.connectivity.is_connected().await {
            return ApiOutcome::Failure(Failure::no_network());
        }

        let client = match self.clients.provision(operation.requires_auth).await {
            Ok(client) => client,
            Err(e) => return ApiOutcome::Failure(Failure::local(FailureKind::Credential, e.to_string())),
        };

        let mut builder = client.request(operation.method.clone(), &request.path);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(payload) => builder.json(&payload),
            RequestBody::Multipart(upload) => match avatar_form(upload) {
                Ok(form) => builder.multipart(form),
                Err(e) => return ApiOutcome::Failure(Failure::local(FailureKind::Encode, e.to_string())),
            },
            RequestBody::Invalid(reason) => {
                return ApiOutcome::Failure(Failure::local(FailureKind::Encode, reason))
            }
        };

        tracing::debug!("📡 {} {} {}", operation.method, client.url(&request.path), operation.name);

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => return ApiOutcome::Failure(Failure::local(FailureKind::Transport, e.to_string())),
        };

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => return ApiOutcome::Failure(Failure::local(FailureKind::Transport, e.to_string())),
        };

        if status.is_success() {
            ApiOutcome::Success(parse_body(&text).unwrap_or(Value::Null))
        } else {
            ApiOutcome::Failure(Failure::remote(status.as_u16(), parse_body(&text)))
        }
    }
}

fn avatar_form(upload: AvatarUpload) -> Result<Form, reqwest::Error> {
    let part = Part::bytes(upload.bytes)
        .file_name(upload.file_name)
        .mime_str(&upload.content_type)?;
    Ok(Form::new().part("avatar", part))
}

/// JSON when possible, otherwise the raw text as a JSON string. `None` for an
/// empty body.
fn parse_body(text: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }
    Some(serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string())))
}
