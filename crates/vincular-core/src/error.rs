//! Error types for the binding core.
//!
//! All failures are synchronous and local: they surface to the immediate
//! caller, are never retried, and leave manager state untouched.

use crate::binding::Binding;
use crate::value::ValueKind;
use thiserror::Error;

/// Errors raised by binding registration, property access, and dispatch.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BindingError {
    /// A property path did not resolve on the source.
    #[error("property not found: {path}")]
    PropertyNotFound {
        /// The rendered path that failed to resolve.
        path: String,
    },

    /// A structurally-equal binding is already registered on the manager.
    #[error("duplicate binding: {binding}")]
    DuplicateBinding {
        /// The rejected binding.
        binding: Binding,
    },

    /// A write carried a value incompatible with the property's declared kind.
    #[error("type mismatch on {path}: expected {expected}, found {found}")]
    TypeMismatch {
        /// The property written to.
        path: String,
        /// The property's declared kind.
        expected: ValueKind,
        /// The kind of the rejected value.
        found: ValueKind,
    },

    /// A manager's binding list was mutated from inside a change dispatch.
    ///
    /// Fatal to the offending call only; the manager stays consistent and
    /// the remaining subscribers still receive the notification.
    #[error("binding list mutated during change dispatch")]
    ConcurrentModification,
}

/// Convenience result alias for binding operations.
pub type Result<T> = std::result::Result<T, BindingError>;

impl BindingError {
    /// Build a `PropertyNotFound` for the given path.
    #[must_use]
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::PropertyNotFound { path: path.into() }
    }
}
