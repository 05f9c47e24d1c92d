//! Rejection response synthesis.
//!
//! # Responsibilities
//! - Build the logical content of a 426 Upgrade Required response
//! - Select the verbatim custom body or generate the default HTML page
//!
//! # Design Decisions
//! - Produces a value; transmission, content-type and framing belong to
//!   the server layer
//! - The default body is assembled into an exactly pre-sized buffer and
//!   `body_len` is computed from the parts, so a mismatch with the actual
//!   byte count is detectable as an internal invariant violation

use axum::http::header::{HeaderName, HeaderValue, CONNECTION, UPGRADE};
use axum::http::StatusCode;
use bytes::Bytes;

/// Protocol versions offered to the client in the `Upgrade` header.
pub const UPGRADE_TARGETS: &str = "HTTP/2.0, HTTP/1.1";

const DEFAULT_BODY_PREAMBLE: &[u8] = b"<!DOCTYPE html>\n\
<html>\n\
<head><title>426 Upgrade Required</title></head>\n\
<body>\n\
<center><h1>426 Upgrade Required</h1></center>\n\
<hr>\n\
<center>This server requires HTTP/2.0 or HTTP/1.1</center>\n\
<center>Your client used: ";

const DEFAULT_BODY_SUFFIX: &[u8] = b"</center>\n</body>\n</html>\n";

/// Logical content of a rejection response.
///
/// Headers are ordered; the server layer appends content-type and
/// content-length once `body_len` is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseContent {
    pub status: StatusCode,
    pub headers: Vec<(HeaderName, HeaderValue)>,
    pub body: Bytes,
    pub body_len: usize,
}

/// Build the 426 response for a blocked request.
///
/// A non-empty custom message is sent verbatim, with no templating.
/// Otherwise the default page is generated around the blocked version's
/// label.
pub fn build(version_label: &str, message: Option<&Bytes>) -> ResponseContent {
    let (body, body_len) = match message {
        Some(msg) if !msg.is_empty() => (msg.clone(), msg.len()),
        _ => default_body(version_label),
    };

    ResponseContent {
        status: StatusCode::UPGRADE_REQUIRED,
        headers: vec![
            (UPGRADE, HeaderValue::from_static(UPGRADE_TARGETS)),
            (CONNECTION, HeaderValue::from_static("Upgrade")),
        ],
        body,
        body_len,
    }
}

fn default_body(version_label: &str) -> (Bytes, usize) {
    let label = version_label.as_bytes();
    let total_len = DEFAULT_BODY_PREAMBLE.len() + label.len() + DEFAULT_BODY_SUFFIX.len();

    let mut body = Vec::with_capacity(total_len);
    body.extend_from_slice(DEFAULT_BODY_PREAMBLE);
    body.extend_from_slice(label);
    body.extend_from_slice(DEFAULT_BODY_SUFFIX);

    (Bytes::from(body), total_len)
}
