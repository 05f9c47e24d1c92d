//! Protocol version classification.

use axum::http::Version;

/// The protocol generations the guard distinguishes.
///
/// Everything from HTTP/2 upwards collapses into one variant: modern
/// versions are never blockable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolVersion {
    V09,
    V10,
    V11,
    V2Plus,
}

impl ProtocolVersion {
    /// Human-readable protocol name, used in logs and the rejection page.
    pub fn label(self) -> &'static str {
        match self {
            ProtocolVersion::V09 => "HTTP/0.9",
            ProtocolVersion::V10 => "HTTP/1.0",
            ProtocolVersion::V11 => "HTTP/1.1",
            ProtocolVersion::V2Plus => "HTTP/2+",
        }
    }
}

impl From<Version> for ProtocolVersion {
    fn from(version: Version) -> Self {
        match version {
            Version::HTTP_09 => ProtocolVersion::V09,
            Version::HTTP_10 => ProtocolVersion::V10,
            Version::HTTP_11 => ProtocolVersion::V11,
            _ => ProtocolVersion::V2Plus,
        }
    }
}
