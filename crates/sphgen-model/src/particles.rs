//! Particle-collection descriptors.
//!
//! The generator never reads or writes numeric data; a collection is only
//! a name plus the set of numeric property names it carries.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Bookkeeping properties every collection carries. These are excluded
/// from the generated wrapper's numeric fields and bound separately.
pub const RESERVED_PROPERTIES: [&str; 4] = ["tag", "group", "local", "pid"];

/// A named particle collection exposing its numeric property names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleCollection {
    /// Collection name, bound as a wrapper field in the generated routine
    pub name: String,
    /// Property names, in declaration order
    pub properties: IndexSet<String>,
}

impl ParticleCollection {
    /// Create a descriptor from a name and its property names.
    pub fn new(name: impl Into<String>, properties: &[&str]) -> Self {
        Self {
            name: name.into(),
            properties: properties.iter().map(|p| p.to_string()).collect(),
        }
    }
}
