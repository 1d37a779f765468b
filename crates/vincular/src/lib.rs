//! Vincular: a context-scoped data-binding layer for UI toolkits.
//!
//! Vincular mediates between data sources and the UI-facing consumers
//! bound to them. Each `(source, property-path)` pair has exactly one
//! [`BindingManager`] per [`BindingContext`]; property writes fan out to
//! every subscriber synchronously, before the write returns.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use vincular::{BindableSource, Binding, BindingContext, Record, SharedSource, Value};
//!
//! let ctx = BindingContext::new();
//! let person: SharedSource = Record::new()
//!     .with("Text", Value::text("ada"))
//!     .into_source();
//!
//! // Two consumers looking up the same key share one manager.
//! let label = ctx.get_path(&person, "Text")?;
//! let input = ctx.get_path(&person, "Text")?;
//! assert!(Rc::ptr_eq(&label, &input));
//!
//! label.add_binding(Binding::new("label1", "text", "Text"))?;
//! assert_eq!(input.binding_count(), 1);
//!
//! // A source write is delivered before set returns.
//! label.on_current_changed(|value| println!("now: {value}"));
//! person.set("Text", Value::text("grace"))?;
//! assert_eq!(label.current(), Value::text("grace"));
//! # Ok::<(), vincular::BindingError>(())
//! ```

pub use vincular_core::{
    BindableSource, Binding, BindingContext, BindingError, BindingManager, ChangeSubscriber,
    ManagerKey, PropertyDescriptor, PropertyObserver, PropertyPath, Record, Result, SharedSource,
    SourceKey, SubscriptionId, Value, ValueKind,
};

/// Commonly used types, for glob import.
pub mod prelude {
    pub use crate::{
        BindableSource, Binding, BindingContext, BindingError, BindingManager, PropertyObserver,
        PropertyPath, Record, SharedSource, Value, ValueKind,
    };
}
