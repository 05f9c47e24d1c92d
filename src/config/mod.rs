//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → scope.rs (raw scopes via directive application, duplicate checks)
//!     → resolve.rs (top-down merge into effective policies)
//!     → ScopeRouter (cached Arc<Policy> per scope)
//!     → shared read-only with every request task
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; policies are resolved exactly once
//! - Unset fields are a real third state, never conflated with `false`
//! - Any load-time error prevents startup; nothing degrades silently

pub mod loader;
pub mod resolve;
pub mod schema;
pub mod scope;

pub use loader::{load_config, load_config_str, ConfigError};
pub use resolve::{resolve, Policy};
pub use schema::{GuardConfig, ListenerConfig, LocationConfig, PolicyScopeConfig, SiteConfig};
pub use scope::{ConfigScope, Directive, Setting};
