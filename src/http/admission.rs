//! Admission middleware.
//! Rejects requests using a blocked HTTP protocol version.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use tracing::warn;

use crate::http::response;
use crate::policy::{decide, Decision, ProtocolVersion};
use crate::routing::ScopeRouter;

/// State required for admission checks.
#[derive(Clone)]
pub struct AdmissionState {
    pub scopes: Arc<ScopeRouter>,
}

/// Phase handler: runs before any other request processing and
/// short-circuits with 426 when the protocol version is blocked.
pub async fn admission_middleware(
    State(state): State<AdmissionState>,
    ConnectInfo(client): ConnectInfo<SocketAddr>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let host = req
        .headers()
        .get(header::HOST)
        .and_then(|h| h.to_str().ok());
    let policy = state.scopes.lookup(host, req.uri().path());

    let version = ProtocolVersion::from(req.version());
    match decide(&policy, version) {
        Decision::Allow => next.run(req).await,
        Decision::Block {
            version_label,
            message,
        } => {
            warn!(
                version = version_label,
                client = %client,
                request = %format_args!("{} {} {:?}", req.method(), req.uri(), req.version()),
                "request blocked by security policy"
            );
            reject(version_label, message.as_ref())
        }
    }
}

/// Turn the logical rejection content into a wire response.
fn reject(version_label: &str, message: Option<&Bytes>) -> Response {
    let content = response::build(version_label, message);

    // Should be unreachable; fatal to this request only.
    if content.body.len() != content.body_len {
        tracing::error!(
            declared = content.body_len,
            actual = content.body.len(),
            "rejection body length mismatch"
        );
        return internal_error();
    }

    let mut builder = Response::builder().status(content.status);
    for (name, value) in &content.headers {
        builder = builder.header(name.clone(), value.clone());
    }
    builder = builder
        .header(header::CONTENT_TYPE, "text/html")
        .header(header::CONTENT_LENGTH, content.body_len);

    match builder.body(Body::from(content.body)) {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(error = %e, "failed to assemble rejection response");
            internal_error()
        }
    }
}

/// Generic server error; never exposes internal detail to the client.
fn internal_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}
