//! `BindingContext`: the explicit scope that owns the manager registry.
//!
//! There is no ambient singleton: every lookup goes through a context
//! value, and two consumers share managers exactly when they share a
//! context. Managers are created lazily on first lookup and live until
//! the context is disposed.

use crate::error::Result;
use crate::manager::{BindingManager, ManagerKey};
use crate::path::PropertyPath;
use crate::source::{SharedSource, SourceKey};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Owns the process-wide (per-context) registry of binding managers.
///
/// Keys are two-tier: `(source, None)` addresses the whole-object
/// (row-level) manager, `(source, path)` a property-level manager. Source
/// identity is reference identity; repeated lookups with an equal key
/// return the same `Rc` instance.
#[derive(Default)]
pub struct BindingContext {
    managers: RefCell<HashMap<ManagerKey, Rc<BindingManager>>>,
}

impl BindingContext {
    /// Create an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up (or lazily create) the whole-object manager for `source`.
    #[must_use]
    pub fn get(&self, source: &SharedSource) -> Rc<BindingManager> {
        let key = ManagerKey {
            source: SourceKey::of(source),
            path: None,
        };
        if let Some(manager) = self.managers.borrow().get(&key) {
            return Rc::clone(manager);
        }
        let manager = BindingManager::new_row(Rc::clone(source));
        self.managers.borrow_mut().insert(key, Rc::clone(&manager));
        manager
    }

    /// Look up (or lazily create) the property-level manager for
    /// `(source, path)`.
    ///
    /// Fails with `PropertyNotFound` when the path does not resolve on the
    /// source; no manager is created or cached in that case.
    pub fn get_path(
        &self,
        source: &SharedSource,
        path: impl Into<PropertyPath>,
    ) -> Result<Rc<BindingManager>> {
        let path = path.into();
        let key = ManagerKey {
            source: SourceKey::of(source),
            path: Some(path.as_str().to_string()),
        };
        if let Some(manager) = self.managers.borrow().get(&key) {
            return Ok(Rc::clone(manager));
        }
        let manager = BindingManager::new_property(Rc::clone(source), path)?;
        self.managers.borrow_mut().insert(key, Rc::clone(&manager));
        Ok(manager)
    }

    /// Whether a manager already exists for the given key.
    #[must_use]
    pub fn contains(&self, source: &SharedSource, path: Option<&PropertyPath>) -> bool {
        let key = ManagerKey {
            source: SourceKey::of(source),
            path: path.map(|p| p.as_str().to_string()),
        };
        self.managers.borrow().contains_key(&key)
    }

    /// Number of live managers in the registry.
    #[must_use]
    pub fn manager_count(&self) -> usize {
        self.managers.borrow().len()
    }

    /// Detach every manager from its source and empty the registry.
    ///
    /// Lookups after disposal recreate managers from scratch. Also runs
    /// on drop, so a context never leaves subscriptions behind.
    pub fn dispose(&self) {
        let managers: Vec<Rc<BindingManager>> =
            self.managers.borrow_mut().drain().map(|(_, m)| m).collect();
        for manager in managers {
            manager.detach();
        }
    }
}

impl Drop for BindingContext {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for BindingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingContext")
            .field("managers", &self.managers.borrow().len())
            .finish()
    }
}
