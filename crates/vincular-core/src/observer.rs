//! `PropertyObserver`: one (source, property) access point.
//!
//! The observer is the only place that touches a source on behalf of a
//! manager: it reads, kind-checks writes, and filters the source's
//! notification channel down to its own property. Attaching to a source
//! with no notification channel is a silent no-op; such a pairing simply
//! never fires.

use crate::error::{BindingError, Result};
use crate::path::PropertyPath;
use crate::source::{SharedSource, SubscriptionId};
use crate::value::Value;
use std::cell::Cell;
use std::rc::Rc;

/// Observes a single named property on a bindable source.
pub struct PropertyObserver {
    source: SharedSource,
    path: PropertyPath,
    name: String,
    subscription: Cell<Option<SubscriptionId>>,
}

impl PropertyObserver {
    /// Create an unattached observer for `path` on `source`.
    #[must_use]
    pub fn new(source: SharedSource, path: PropertyPath) -> Self {
        let name = path.as_str().to_string();
        Self {
            source,
            path,
            name,
            subscription: Cell::new(None),
        }
    }

    /// The observed path.
    #[must_use]
    pub fn path(&self) -> &PropertyPath {
        &self.path
    }

    /// Whether a subscription on the source is live.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.subscription.get().is_some()
    }

    /// Subscribe to the source's change notifications, filtered to this
    /// observer's property.
    ///
    /// Returns `false` when the source exposes no notification channel;
    /// the observer then stays detached and `callback` never runs.
    /// Attaching twice is a no-op.
    pub fn attach(&self, callback: impl Fn(&Value) + 'static) -> bool {
        if self.is_attached() {
            return true;
        }
        let name = self.name.clone();
        let id = self.source.subscribe(Rc::new(move |property, value| {
            if property == name {
                callback(value);
            }
        }));
        match id {
            Some(id) => {
                self.subscription.set(Some(id));
                true
            }
            None => false,
        }
    }

    /// Drop the subscription, if any. Idempotent.
    pub fn detach(&self) {
        if let Some(id) = self.subscription.take() {
            self.source.unsubscribe(id);
        }
    }

    /// Read the current property value.
    pub fn read(&self) -> Result<Value> {
        self.source.get(&self.name)
    }

    /// Write a value through to the source.
    ///
    /// The value is checked against the property's declared kind before
    /// the source sees it; the only permitted coercion is `Int` widening
    /// into a `Float` property. Change notification is delivered to every
    /// subscriber before this call returns.
    pub fn write(&self, value: Value) -> Result<()> {
        let declared = self
            .source
            .descriptor(&self.name)
            .ok_or_else(|| BindingError::not_found(&self.name))?
            .kind;
        let accepted =
            value
                .clone()
                .coerce_to(declared)
                .ok_or_else(|| BindingError::TypeMismatch {
                    path: self.name.clone(),
                    expected: declared,
                    found: value.kind(),
                })?;
        self.source.set(&self.name, accepted)
    }
}

impl Drop for PropertyObserver {
    fn drop(&mut self) {
        self.detach();
    }
}
