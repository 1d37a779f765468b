//! `BindingManager`: per-key binding bookkeeping and change fan-out.
//!
//! One manager exists per two-tier key: `(source, path)` for a
//! property-level manager, `(source, None)` for the whole-object
//! (row-level) manager. The two tiers are distinct objects with fully
//! independent binding lists, even for the same source.
//!
//! Change notification is synchronous: subscribers run in subscription
//! order, on the execution context that performed the triggering write,
//! before that write returns. Mutating the manager's binding list from
//! inside a dispatch fails fast with `ConcurrentModification`; the other
//! subscribers still receive the notification.

use crate::binding::Binding;
use crate::error::{BindingError, Result};
use crate::observer::PropertyObserver;
use crate::path::PropertyPath;
use crate::source::{SharedSource, SourceKey, SubscriptionId};
use crate::value::Value;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

/// Registry key of a manager: source identity plus optional path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ManagerKey {
    /// Identity of the source.
    pub source: SourceKey,
    /// Rendered property path; `None` for the whole-object tier.
    pub path: Option<String>,
}

type CurrentChangedFn = Rc<dyn Fn(&Value)>;

/// Owns the bindings and change-subscribers for one `(source, path)` key.
pub struct BindingManager {
    key: ManagerKey,
    path: Option<PropertyPath>,
    source: SharedSource,
    bindings: RefCell<Vec<Binding>>,
    subscribers: RefCell<Vec<(SubscriptionId, CurrentChangedFn)>>,
    next_subscription: Cell<u64>,
    current: RefCell<Value>,
    dispatch_depth: Cell<u32>,
    observer: Option<PropertyObserver>,
    row_subscription: Cell<Option<SubscriptionId>>,
}

impl BindingManager {
    /// Build the property-level manager for `(source, path)`.
    ///
    /// Fails with `PropertyNotFound` when the path does not resolve on the
    /// source. The current value is seeded with an initial read; the
    /// manager then tracks the property through the source's notification
    /// channel (silently static when the source has none).
    pub(crate) fn new_property(source: SharedSource, path: PropertyPath) -> Result<Rc<Self>> {
        let observer = PropertyObserver::new(Rc::clone(&source), path.clone());
        let initial = observer.read()?;
        let manager = Rc::new(Self {
            key: ManagerKey {
                source: SourceKey::of(&source),
                path: Some(path.as_str().to_string()),
            },
            path: Some(path),
            source,
            bindings: RefCell::new(Vec::new()),
            subscribers: RefCell::new(Vec::new()),
            next_subscription: Cell::new(0),
            current: RefCell::new(initial),
            dispatch_depth: Cell::new(0),
            observer: Some(observer),
            row_subscription: Cell::new(None),
        });

        let weak: Weak<Self> = Rc::downgrade(&manager);
        if let Some(observer) = &manager.observer {
            observer.attach(move |value| {
                if let Some(manager) = weak.upgrade() {
                    manager.source_changed(value);
                }
            });
        }
        Ok(manager)
    }

    /// Build the whole-object (row-level) manager for `source`.
    ///
    /// Fires on any property change; `current()` holds the most recently
    /// changed value, `Null` until the first change.
    pub(crate) fn new_row(source: SharedSource) -> Rc<Self> {
        let manager = Rc::new(Self {
            key: ManagerKey {
                source: SourceKey::of(&source),
                path: None,
            },
            path: None,
            source: Rc::clone(&source),
            bindings: RefCell::new(Vec::new()),
            subscribers: RefCell::new(Vec::new()),
            next_subscription: Cell::new(0),
            current: RefCell::new(Value::Null),
            dispatch_depth: Cell::new(0),
            observer: None,
            row_subscription: Cell::new(None),
        });

        let weak: Weak<Self> = Rc::downgrade(&manager);
        let id = source.subscribe(Rc::new(move |_property, value| {
            if let Some(manager) = weak.upgrade() {
                manager.source_changed(value);
            }
        }));
        manager.row_subscription.set(id);
        manager
    }

    /// The registry key this manager was created under.
    #[must_use]
    pub fn key(&self) -> &ManagerKey {
        &self.key
    }

    /// Identity of the underlying source.
    #[must_use]
    pub fn source_key(&self) -> SourceKey {
        self.key.source
    }

    /// The observed path; `None` for the whole-object tier.
    #[must_use]
    pub fn property_path(&self) -> Option<&PropertyPath> {
        self.path.as_ref()
    }

    /// Whether this is a property-level manager.
    #[must_use]
    pub fn is_property_level(&self) -> bool {
        self.path.is_some()
    }

    /// The tracked current value.
    #[must_use]
    pub fn current(&self) -> Value {
        self.current.borrow().clone()
    }

    /// Snapshot of the registered bindings, in insertion order.
    #[must_use]
    pub fn bindings(&self) -> Vec<Binding> {
        self.bindings.borrow().clone()
    }

    /// Number of registered bindings.
    #[must_use]
    pub fn binding_count(&self) -> usize {
        self.bindings.borrow().len()
    }

    /// The binding at `index` in insertion order, if any.
    #[must_use]
    pub fn binding_at(&self, index: usize) -> Option<Binding> {
        self.bindings.borrow().get(index).cloned()
    }

    /// Append a binding.
    ///
    /// Fails with `DuplicateBinding` when a structurally-equal binding is
    /// already registered, and with `ConcurrentModification` when called
    /// from inside a change dispatch. Either way the list is unchanged.
    pub fn add_binding(&self, binding: Binding) -> Result<()> {
        self.guard_dispatch()?;
        let mut bindings = self.bindings.borrow_mut();
        if bindings.contains(&binding) {
            return Err(BindingError::DuplicateBinding { binding });
        }
        bindings.push(binding);
        Ok(())
    }

    /// Remove a binding; returns whether it was present.
    ///
    /// Subject to the same dispatch guard as [`add_binding`](Self::add_binding).
    pub fn remove_binding(&self, binding: &Binding) -> Result<bool> {
        self.guard_dispatch()?;
        let mut bindings = self.bindings.borrow_mut();
        let before = bindings.len();
        bindings.retain(|b| b != binding);
        Ok(bindings.len() != before)
    }

    /// Subscribe to current-value changes.
    ///
    /// Subscribers fire synchronously in subscription order. Subscribing
    /// from inside a dispatch is permitted and takes effect from the next
    /// dispatch.
    pub fn on_current_changed(&self, callback: impl Fn(&Value) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.get());
        self.next_subscription.set(id.0 + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    /// Remove a current-changed subscription. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.borrow_mut().retain(|(sid, _)| *sid != id);
    }

    /// Detach from the source's notification channel.
    ///
    /// Called on context disposal; the manager keeps its bindings but no
    /// longer tracks the source.
    pub(crate) fn detach(&self) {
        if let Some(observer) = &self.observer {
            observer.detach();
        }
        if let Some(id) = self.row_subscription.take() {
            self.source.unsubscribe(id);
        }
    }

    fn guard_dispatch(&self) -> Result<()> {
        if self.dispatch_depth.get() > 0 {
            return Err(BindingError::ConcurrentModification);
        }
        Ok(())
    }

    fn source_changed(&self, value: &Value) {
        *self.current.borrow_mut() = value.clone();
        // Snapshot so subscribers added during dispatch wait for the next
        // one, and unsubscribe during dispatch cannot invalidate iteration.
        let subscribers: Vec<CurrentChangedFn> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, s)| Rc::clone(s))
            .collect();
        self.dispatch_depth.set(self.dispatch_depth.get() + 1);
        for subscriber in &subscribers {
            subscriber(value);
        }
        self.dispatch_depth.set(self.dispatch_depth.get() - 1);
    }
}

impl fmt::Debug for BindingManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingManager")
            .field("key", &self.key)
            .field("bindings", &*self.bindings.borrow())
            .field("current", &*self.current.borrow())
            .finish_non_exhaustive()
    }
}
