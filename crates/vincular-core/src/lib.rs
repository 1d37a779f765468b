//! Core binding-manager registry for the Vincular data-binding layer.
//!
//! This crate mediates between opaque data sources and the UI-facing
//! consumers bound to them:
//! - [`PropertyPath`] and [`Value`] — addressing and scalar values
//! - [`BindableSource`] / [`Record`] — the source capability interface
//! - [`PropertyObserver`] — one (source, property) access point
//! - [`Binding`] and [`BindingManager`] — per-key bookkeeping and fan-out
//! - [`BindingContext`] — the explicit registry scope
//!
//! Everything is UI-thread-confined: notification delivery is synchronous
//! and runs before the triggering write returns, and managers are shared
//! by reference (`Rc`) within one context.

mod binding;
mod context;
mod error;
mod manager;
mod observer;
mod path;
mod record;
mod source;
mod value;

pub use binding::Binding;
pub use context::BindingContext;
pub use error::{BindingError, Result};
pub use manager::{BindingManager, ManagerKey};
pub use observer::PropertyObserver;
pub use path::PropertyPath;
pub use record::Record;
pub use source::{
    BindableSource, ChangeSubscriber, PropertyDescriptor, SharedSource, SourceKey, SubscriptionId,
};
pub use value::{Value, ValueKind};
