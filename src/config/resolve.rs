//! Scope resolution (configuration merge).
//!
//! # Responsibilities
//! - Merge a raw scope with its parent's resolved policy
//! - Supply the documented defaults at the root of the chain
//! - Enforce the disabled-overrides-all-flags invariant
//!
//! # Design Decisions
//! - `resolve` is a pure function of its two inputs; no global state
//! - The master-switch invariant is a separate post-merge normalization
//!   step, not folded into per-field inheritance, so it stays visible and
//!   independently testable

use bytes::Bytes;

use crate::config::scope::{ConfigScope, Setting};

/// The effective, fully resolved policy for one scope.
///
/// Immutable once resolved; computed once at configuration load and shared
/// read-only across all request tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    /// Master switch. When false, every block flag below is false too.
    pub enabled: bool,
    pub block_http09: bool,
    pub block_http10: bool,
    pub block_http11: bool,
    /// Verbatim rejection body; `None` means the generated default page.
    pub custom_message: Option<Bytes>,
}

impl Default for Policy {
    /// The root scope's parent: guard off, but HTTP/0.9 and HTTP/1.0
    /// marked for blocking the moment it is switched on.
    fn default() -> Self {
        Self {
            enabled: false,
            block_http09: true,
            block_http10: true,
            block_http11: false,
            custom_message: None,
        }
    }
}

/// Resolve one scope against its parent's effective policy.
///
/// Explicit values win; unset fields inherit. Afterwards the result is
/// normalized: a disabled scope observably blocks nothing, even if the
/// parent had blocking enabled and this scope only flipped the master
/// switch off.
pub fn resolve(parent: &Policy, scope: &ConfigScope) -> Policy {
    let mut policy = Policy {
        enabled: scope.enabled.or_inherit(parent.enabled),
        block_http09: scope.block_http09.or_inherit(parent.block_http09),
        block_http10: scope.block_http10.or_inherit(parent.block_http10),
        block_http11: scope.block_http11.or_inherit(parent.block_http11),
        custom_message: match &scope.custom_message {
            Setting::Explicit(msg) => Some(msg.clone()),
            Setting::Unset => parent.custom_message.clone(),
        },
    };
    normalize(&mut policy);
    policy
}

/// Post-merge invariant: disabled means no flag is observably set.
fn normalize(policy: &mut Policy) {
    if !policy.enabled {
        policy.block_http09 = false;
        policy.block_http10 = false;
        policy.block_http11 = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::scope::Directive;

    fn scope(directives: Vec<Directive>) -> ConfigScope {
        let mut scope = ConfigScope::default();
        for d in directives {
            scope.apply(d).unwrap();
        }
        scope
    }

    #[test]
    fn test_empty_scope_resolves_to_defaults() {
        let policy = resolve(&Policy::default(), &ConfigScope::default());
        assert!(!policy.enabled);
        // Defaults block 0.9/1.0, but the disabled master forces them off.
        assert!(!policy.block_http09);
        assert!(!policy.block_http10);
        assert!(!policy.block_http11);
        assert_eq!(policy.custom_message, None);
    }

    #[test]
    fn test_enabled_root_keeps_default_flags() {
        let policy = resolve(&Policy::default(), &scope(vec![Directive::Enabled(true)]));
        assert!(policy.enabled);
        assert!(policy.block_http09);
        assert!(policy.block_http10);
        assert!(!policy.block_http11);
    }

    #[test]
    fn test_explicit_value_overrides_parent() {
        let parent = resolve(&Policy::default(), &scope(vec![Directive::Enabled(true)]));
        let child = resolve(
            &parent,
            &scope(vec![
                Directive::BlockHttp10(false),
                Directive::BlockHttp11(true),
            ]),
        );
        assert!(child.enabled);
        assert!(child.block_http09); // inherited
        assert!(!child.block_http10); // overridden
        assert!(child.block_http11); // overridden
    }

    #[test]
    fn test_disabled_child_cannot_leak_parent_blocking() {
        let parent = resolve(
            &Policy::default(),
            &scope(vec![Directive::Enabled(true), Directive::BlockHttp11(true)]),
        );
        assert!(parent.block_http11);

        // Child only flips the master switch off; every flag must read
        // false afterwards, not just behave as false at decision time.
        let child = resolve(&parent, &scope(vec![Directive::Enabled(false)]));
        assert!(!child.enabled);
        assert!(!child.block_http09);
        assert!(!child.block_http10);
        assert!(!child.block_http11);
    }

    #[test]
    fn test_disabled_scope_with_explicit_flags_reads_all_false() {
        let policy = resolve(
            &Policy::default(),
            &scope(vec![
                Directive::BlockHttp09(true),
                Directive::BlockHttp10(true),
                Directive::BlockHttp11(true),
            ]),
        );
        // enabled inherits the default false, so normalization wins.
        assert!(!policy.block_http09);
        assert!(!policy.block_http10);
        assert!(!policy.block_http11);
    }

    #[test]
    fn test_custom_message_inherits_when_unset() {
        let parent = resolve(
            &Policy::default(),
            &scope(vec![Directive::CustomMessage("upgrade please".into())]),
        );
        let child = resolve(&parent, &ConfigScope::default());
        assert_eq!(
            child.custom_message,
            Some(Bytes::from_static(b"upgrade please"))
        );

        let overridden = resolve(
            &parent,
            &scope(vec![Directive::CustomMessage("other".into())]),
        );
        assert_eq!(overridden.custom_message, Some(Bytes::from_static(b"other")));
    }

    /// Resolving child-then-parent must equal resolving the flattened chain
    /// in one pass (most specific explicit value per field wins).
    #[test]
    fn test_inheritance_flattens() {
        fn flatten(outer: &ConfigScope, inner: &ConfigScope) -> ConfigScope {
            fn pick<T: Clone>(outer: &Setting<T>, inner: &Setting<T>) -> Setting<T> {
                if inner.is_explicit() {
                    inner.clone()
                } else {
                    outer.clone()
                }
            }
            ConfigScope {
                enabled: pick(&outer.enabled, &inner.enabled),
                block_http09: pick(&outer.block_http09, &inner.block_http09),
                block_http10: pick(&outer.block_http10, &inner.block_http10),
                block_http11: pick(&outer.block_http11, &inner.block_http11),
                custom_message: pick(&outer.custom_message, &inner.custom_message),
            }
        }

        let parent_scope = scope(vec![
            Directive::Enabled(true),
            Directive::BlockHttp11(true),
            Directive::CustomMessage("parent".into()),
        ]);
        let child_scope = scope(vec![
            Directive::BlockHttp11(false),
            Directive::BlockHttp10(false),
        ]);

        let chained = resolve(&resolve(&Policy::default(), &parent_scope), &child_scope);
        let flat = resolve(&Policy::default(), &flatten(&parent_scope, &child_scope));
        assert_eq!(chained, flat);
    }
}
