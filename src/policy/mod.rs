//! Admission policy evaluation.
//!
//! # Responsibilities
//! - Classify a request's protocol version
//! - Map (policy, version) to an Allow/Block decision
//!
//! # Design Decisions
//! - Pure functions over explicit arguments; no process-wide state
//! - Exhaustive version mapping, checked by the compiler

pub mod engine;
pub mod version;

pub use engine::{decide, Decision};
pub use version::ProtocolVersion;
