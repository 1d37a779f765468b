//! `Binding`: one consumer-to-source link.

use crate::path::PropertyPath;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable link from a consumer-side property to a source property.
///
/// Equality is structural over (consumer, consumer property, source path);
/// a manager rejects registration of a second structurally-equal binding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Binding {
    consumer: String,
    consumer_property: String,
    source_path: PropertyPath,
}

impl Binding {
    /// Create a binding from `consumer`'s `consumer_property` to the
    /// source property named by `source_path`.
    #[must_use]
    pub fn new(
        consumer: impl Into<String>,
        consumer_property: impl Into<String>,
        source_path: impl Into<PropertyPath>,
    ) -> Self {
        Self {
            consumer: consumer.into(),
            consumer_property: consumer_property.into(),
            source_path: source_path.into(),
        }
    }

    /// Identity of the consumer that owns this binding.
    #[must_use]
    pub fn consumer(&self) -> &str {
        &self.consumer
    }

    /// The consumer-side property being driven.
    #[must_use]
    pub fn consumer_property(&self) -> &str {
        &self.consumer_property
    }

    /// The source property path feeding this binding.
    #[must_use]
    pub fn source_path(&self) -> &PropertyPath {
        &self.source_path
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{} <- {}",
            self.consumer, self.consumer_property, self.source_path
        )
    }
}
