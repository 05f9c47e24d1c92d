//! Configuration schema definitions.
//!
//! This module defines the on-disk configuration structure for the guard.
//! All types derive Serde traits for deserialization from config files.
//!
//! Policy tables are raw scopes: every key is optional, and an absent key
//! means "unset" (inherit from the enclosing scope), which is distinct from
//! an explicit `false`.

use serde::{Deserialize, Serialize};

use crate::config::scope::Directive;

/// Root configuration for the admission guard.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GuardConfig {
    /// Listener configuration (bind address, timeout).
    pub listener: ListenerConfig,

    /// Root policy scope, inherited by every site and location.
    pub policy: PolicyScopeConfig,

    /// Per-site scopes keyed by Host header.
    pub sites: Vec<SiteConfig>,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Request timeout (total time for request/response) in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// One raw policy scope as written by the config author.
///
/// `None` is the unset state, not `false`; resolution inherits unset fields
/// from the parent scope.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PolicyScopeConfig {
    /// Master switch for the whole guard in this scope.
    pub enabled: Option<bool>,

    /// Reject HTTP/0.9 requests.
    pub block_http09: Option<bool>,

    /// Reject HTTP/1.0 requests.
    pub block_http10: Option<bool>,

    /// Reject HTTP/1.1 requests.
    pub block_http11: Option<bool>,

    /// Verbatim rejection body, overriding the generated page.
    pub custom_message: Option<String>,
}

impl PolicyScopeConfig {
    /// Expand the set keys into directives, in declaration order.
    pub fn directives(&self) -> Vec<Directive> {
        let mut out = Vec::new();
        if let Some(v) = self.enabled {
            out.push(Directive::Enabled(v));
        }
        if let Some(v) = self.block_http09 {
            out.push(Directive::BlockHttp09(v));
        }
        if let Some(v) = self.block_http10 {
            out.push(Directive::BlockHttp10(v));
        }
        if let Some(v) = self.block_http11 {
            out.push(Directive::BlockHttp11(v));
        }
        if let Some(v) = &self.custom_message {
            out.push(Directive::CustomMessage(v.clone()));
        }
        out
    }
}

/// Per-site configuration scope.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Host header to match (exact match, case-insensitive).
    pub host: String,

    /// Site-level policy overrides.
    #[serde(default)]
    pub policy: PolicyScopeConfig,

    /// Nested per-path scopes.
    #[serde(default)]
    pub locations: Vec<LocationConfig>,
}

/// Per-path configuration scope within a site.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocationConfig {
    /// Path prefix to match (case-sensitive).
    pub path_prefix: String,

    /// Location-level policy overrides.
    #[serde(default)]
    pub policy: PolicyScopeConfig,
}
