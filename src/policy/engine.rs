//! Per-request admission decision.

use bytes::Bytes;

use crate::config::Policy;
use crate::policy::version::ProtocolVersion;

/// Outcome of evaluating a policy against a request's protocol version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Continue processing the request unmodified.
    Allow,
    /// Reject with 426 Upgrade Required.
    Block {
        /// Protocol name for logging and the generated page.
        version_label: &'static str,
        /// Resolved custom body; `None` means the generated default page.
        message: Option<Bytes>,
    },
}

/// Map a policy and a request version to a decision.
///
/// Total and pure: every (policy, version) pair maps to exactly one
/// decision, and the same inputs always produce the same output.
///
/// The caller must emit a warning-level log entry for every `Block`,
/// carrying the blocked version label, the client address, and the
/// request's start line.
pub fn decide(policy: &Policy, version: ProtocolVersion) -> Decision {
    // Resolution already forced the flags off for a disabled policy;
    // short-circuiting here just skips re-reading them.
    if !policy.enabled {
        return Decision::Allow;
    }

    let blocked = match version {
        ProtocolVersion::V09 => policy.block_http09,
        ProtocolVersion::V10 => policy.block_http10,
        ProtocolVersion::V11 => policy.block_http11,
        // HTTP/2.0+ are always allowed.
        ProtocolVersion::V2Plus => return Decision::Allow,
    };

    if blocked {
        Decision::Block {
            version_label: version.label(),
            message: policy.custom_message.clone(),
        }
    } else {
        Decision::Allow
    }
}
