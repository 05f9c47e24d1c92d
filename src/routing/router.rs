//! Scope lookup for incoming requests.
//!
//! # Responsibilities
//! - Resolve every configured scope into a cached policy at load time
//! - Map a request's host and path to the most specific policy
//! - Fall back to the site policy, then the root policy; lookup never fails
//!
//! # Design Decisions
//! - Host matching is case-insensitive (per HTTP spec); paths are
//!   case-sensitive prefixes
//! - Immutable after construction (thread-safe without locks)
//! - Locations are sorted by prefix length so the longest match wins
//! - Policies are recomputed never; per-request work is lookup only

use std::sync::Arc;

use crate::config::{resolve, ConfigError, ConfigScope, GuardConfig, Policy};

/// Effective policies for every configured scope, resolved once at load.
#[derive(Debug)]
pub struct ScopeRouter {
    root: Arc<Policy>,
    sites: Vec<SiteScope>,
}

#[derive(Debug)]
struct SiteScope {
    /// Normalized to lowercase for case-insensitive matching.
    host: String,
    policy: Arc<Policy>,
    /// Sorted by prefix length, longest first.
    locations: Vec<LocationScope>,
}

#[derive(Debug)]
struct LocationScope {
    path_prefix: String,
    policy: Arc<Policy>,
}

impl ScopeRouter {
    /// Resolve all scopes top-down: defaults → root → site → location.
    pub fn from_config(config: &GuardConfig) -> Result<Self, ConfigError> {
        let root = resolve(
            &Policy::default(),
            &ConfigScope::from_schema(&config.policy)?,
        );

        let mut sites = Vec::with_capacity(config.sites.len());
        for site in &config.sites {
            let site_policy = resolve(&root, &ConfigScope::from_schema(&site.policy)?);

            let mut locations = Vec::with_capacity(site.locations.len());
            for location in &site.locations {
                let location_policy =
                    resolve(&site_policy, &ConfigScope::from_schema(&location.policy)?);
                locations.push(LocationScope {
                    path_prefix: location.path_prefix.clone(),
                    policy: Arc::new(location_policy),
                });
            }
            locations.sort_by(|a, b| b.path_prefix.len().cmp(&a.path_prefix.len()));

            sites.push(SiteScope {
                host: site.host.to_lowercase(),
                policy: Arc::new(site_policy),
                locations,
            });
        }

        Ok(Self {
            root: Arc::new(root),
            sites,
        })
    }

    /// Find the most specific policy for a request.
    pub fn lookup(&self, host: Option<&str>, path: &str) -> Arc<Policy> {
        let site = host.and_then(|h| {
            let h = h.to_lowercase();
            self.sites.iter().find(|s| s.host == h)
        });

        let Some(site) = site else {
            return self.root.clone();
        };

        site.locations
            .iter()
            .find(|l| path.starts_with(&l.path_prefix))
            .map(|l| l.policy.clone())
            .unwrap_or_else(|| site.policy.clone())
    }

    /// The root scope's effective policy.
    pub fn root(&self) -> Arc<Policy> {
        self.root.clone()
    }
}
