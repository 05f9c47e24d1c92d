//! Request-to-scope routing.

pub mod router;

pub use router::ScopeRouter;
