//! `Record`: a ready-made property-bag source.
//!
//! A `Record` declares its properties up front (the declared kind is fixed
//! by the initial value) and implements the full [`BindableSource`]
//! capability set, including synchronous change notification. The
//! [`Record::without_notifications`] variant models legacy sources with no
//! notification channel: bindings against it stay silent forever.

use crate::error::{BindingError, Result};
use crate::source::{
    BindableSource, ChangeSubscriber, PropertyDescriptor, SharedSource, SubscriptionId,
};
use crate::value::{Value, ValueKind};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Debug, Clone)]
struct Field {
    name: String,
    kind: ValueKind,
    value: Value,
}

/// An insertion-ordered bag of declared, kind-checked properties.
pub struct Record {
    fields: RefCell<Vec<Field>>,
    subscribers: RefCell<Vec<(SubscriptionId, ChangeSubscriber)>>,
    next_subscription: Cell<u64>,
    notifying: bool,
}

impl Record {
    /// Create an empty record with notification support.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: RefCell::new(Vec::new()),
            subscribers: RefCell::new(Vec::new()),
            next_subscription: Cell::new(0),
            notifying: true,
        }
    }

    /// Create an empty record that exposes no notification channel.
    #[must_use]
    pub fn without_notifications() -> Self {
        Self {
            notifying: false,
            ..Self::new()
        }
    }

    /// Declare a property; its kind is fixed by the initial value.
    ///
    /// A `Value::Null` initial value declares an untyped property that
    /// accepts writes of any kind.
    #[must_use]
    pub fn with(self, name: impl Into<String>, value: Value) -> Self {
        self.fields.borrow_mut().push(Field {
            name: name.into(),
            kind: value.kind(),
            value,
        });
        self
    }

    /// Finish building and hand out the shared source handle.
    #[must_use]
    pub fn into_source(self) -> SharedSource {
        Rc::new(self)
    }

    fn notify(&self, name: &str, value: &Value) {
        // Snapshot outside the borrow: a subscriber may re-enter get/set.
        let subscribers: Vec<ChangeSubscriber> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, s)| Rc::clone(s))
            .collect();
        for subscriber in subscribers {
            subscriber(name, value);
        }
    }
}

impl Default for Record {
    fn default() -> Self {
        Self::new()
    }
}

impl BindableSource for Record {
    fn properties(&self) -> Vec<PropertyDescriptor> {
        self.fields
            .borrow()
            .iter()
            .map(|f| PropertyDescriptor::new(f.name.clone(), f.kind))
            .collect()
    }

    fn get(&self, name: &str) -> Result<Value> {
        self.fields
            .borrow()
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.clone())
            .ok_or_else(|| BindingError::not_found(name))
    }

    fn set(&self, name: &str, value: Value) -> Result<()> {
        let accepted = {
            let mut fields = self.fields.borrow_mut();
            let field = fields
                .iter_mut()
                .find(|f| f.name == name)
                .ok_or_else(|| BindingError::not_found(name))?;
            let accepted =
                value
                    .clone()
                    .coerce_to(field.kind)
                    .ok_or_else(|| BindingError::TypeMismatch {
                        path: name.to_string(),
                        expected: field.kind,
                        found: value.kind(),
                    })?;
            field.value = accepted.clone();
            accepted
        };
        // Delivered before set returns, after the field borrow is released.
        self.notify(name, &accepted);
        Ok(())
    }

    fn subscribe(&self, subscriber: ChangeSubscriber) -> Option<SubscriptionId> {
        if !self.notifying {
            return None;
        }
        let id = SubscriptionId(self.next_subscription.get());
        self.next_subscription.set(id.0 + 1);
        self.subscribers.borrow_mut().push((id, subscriber));
        Some(id)
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.borrow_mut().retain(|(sid, _)| *sid != id);
    }
}
