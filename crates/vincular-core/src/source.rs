//! The bindable-source capability interface.
//!
//! Runtime reflection is replaced by an explicit capability set: a source
//! type declares its properties, serves kind-checked reads and writes, and
//! optionally exposes a change-notification channel. Sources without a
//! channel are legal; observers attached to them simply never fire.
//!
//! The whole subsystem is UI-thread-confined (single-threaded cooperative
//! model), so sources are shared as `Rc<dyn BindableSource>` and identity
//! is `Rc` pointer identity, never value equality.

use crate::error::Result;
use crate::value::{Value, ValueKind};
use std::rc::Rc;

/// Callback invoked when any property on a source changes.
///
/// Receives the property name and the new value, synchronously from inside
/// the `set` call that triggered it.
pub type ChangeSubscriber = Rc<dyn Fn(&str, &Value)>;

/// Handle identifying one subscription on a notification channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

/// Name and declared kind of one bindable property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    /// Property name, case-sensitive.
    pub name: String,
    /// Declared kind; `ValueKind::Null` means untyped.
    pub kind: ValueKind,
}

impl PropertyDescriptor {
    /// Create a descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ValueKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Capability interface every bindable source type implements.
pub trait BindableSource {
    /// All declared properties, in declaration order.
    fn properties(&self) -> Vec<PropertyDescriptor>;

    /// Descriptor for one property, if declared.
    fn descriptor(&self, name: &str) -> Option<PropertyDescriptor> {
        self.properties().into_iter().find(|d| d.name == name)
    }

    /// Read a property value.
    fn get(&self, name: &str) -> Result<Value>;

    /// Write a property value, notifying subscribers before returning.
    fn set(&self, name: &str, value: Value) -> Result<()>;

    /// Subscribe to change notifications for all properties.
    ///
    /// Returns `None` when this source exposes no notification channel;
    /// callers must treat that as a silent no-op, not an error.
    fn subscribe(&self, subscriber: ChangeSubscriber) -> Option<SubscriptionId>;

    /// Remove a subscription. Unknown ids are ignored.
    fn unsubscribe(&self, id: SubscriptionId);
}

/// Shared handle to a bindable source.
pub type SharedSource = Rc<dyn BindableSource>;

/// Identity key of a source: `Rc` pointer identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceKey(usize);

impl SourceKey {
    /// Key for the given shared source.
    #[must_use]
    pub fn of(source: &SharedSource) -> Self {
        Self(Rc::as_ptr(source).cast::<()>() as usize)
    }
}
