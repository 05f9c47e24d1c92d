//! Legacy HTTP admission guard.
//!
//! Intercepts inbound requests at the earliest processing phase,
//! classifies them by HTTP protocol version, and rejects versions below
//! the configured minimum with `426 Upgrade Required` — before any
//! routing or content generation happens. Policies are configured per
//! scope (global, per-site, per-path) with inherit/override semantics
//! and an optional custom rejection body.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod policy;
pub mod routing;

pub use config::{load_config, GuardConfig, Policy};
pub use http::GuardServer;
pub use lifecycle::Shutdown;
pub use policy::{decide, Decision, ProtocolVersion};
pub use routing::ScopeRouter;
