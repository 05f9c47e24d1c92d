//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → admission.rs (scope lookup, version check — may short-circuit)
//!     → response.rs (426 content on block)
//!     → inner handler (only when admitted)
//! ```

pub mod admission;
pub mod response;
pub mod server;

pub use admission::{admission_middleware, AdmissionState};
pub use response::{ResponseContent, UPGRADE_TARGETS};
pub use server::GuardServer;
