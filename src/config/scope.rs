//! Raw configuration scopes.
//!
//! # Responsibilities
//! - Model each raw field as `Unset | Explicit(value)` (no sentinel values)
//! - Build scopes by applying directives one at a time
//! - Reject a repeated `custom-message` within one scope at load time
//!
//! # Design Decisions
//! - Unset is a real third state; resolution must be able to tell
//!   "author wrote false" apart from "author wrote nothing"
//! - Duplicate detection happens here, before any merge, so a duplicate
//!   can never be silently resolved as last-write-wins

use bytes::Bytes;

use crate::config::loader::ConfigError;
use crate::config::schema::PolicyScopeConfig;

/// A raw field value: either unset (inherit) or explicitly written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Setting<T> {
    /// No value written in this scope; inherit from the parent.
    #[default]
    Unset,
    /// Value written by the config author.
    Explicit(T),
}

impl<T: Copy> Setting<T> {
    /// The explicit value if set, otherwise the inherited one.
    pub fn or_inherit(self, parent: T) -> T {
        match self {
            Setting::Explicit(v) => v,
            Setting::Unset => parent,
        }
    }
}

impl<T> Setting<T> {
    pub fn is_explicit(&self) -> bool {
        matches!(self, Setting::Explicit(_))
    }
}

/// One configuration directive, as fed by the loader (or a programmatic
/// builder) into a scope.
#[derive(Debug, Clone)]
pub enum Directive {
    Enabled(bool),
    BlockHttp09(bool),
    BlockHttp10(bool),
    BlockHttp11(bool),
    CustomMessage(String),
}

/// Raw, author-supplied settings for one nesting level.
///
/// Read-only after loading; resolution into a `Policy` happens in
/// [`crate::config::resolve`].
#[derive(Debug, Clone, Default)]
pub struct ConfigScope {
    pub enabled: Setting<bool>,
    pub block_http09: Setting<bool>,
    pub block_http10: Setting<bool>,
    pub block_http11: Setting<bool>,
    pub custom_message: Setting<Bytes>,
}

impl ConfigScope {
    /// Apply one directive to this scope.
    ///
    /// A second `custom-message` in the same scope is a configuration
    /// authoring error and fails the whole load.
    pub fn apply(&mut self, directive: Directive) -> Result<(), ConfigError> {
        match directive {
            Directive::Enabled(v) => self.enabled = Setting::Explicit(v),
            Directive::BlockHttp09(v) => self.block_http09 = Setting::Explicit(v),
            Directive::BlockHttp10(v) => self.block_http10 = Setting::Explicit(v),
            Directive::BlockHttp11(v) => self.block_http11 = Setting::Explicit(v),
            Directive::CustomMessage(msg) => {
                if self.custom_message.is_explicit() {
                    return Err(ConfigError::DuplicateDirective("custom-message"));
                }
                self.custom_message = Setting::Explicit(Bytes::from(msg));
            }
        }
        Ok(())
    }

    /// Build a scope from one parsed policy table.
    pub fn from_schema(raw: &PolicyScopeConfig) -> Result<Self, ConfigError> {
        let mut scope = Self::default();
        for directive in raw.directives() {
            scope.apply(directive)?;
        }
        Ok(scope)
    }
}
