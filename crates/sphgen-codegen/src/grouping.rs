//! Destination/source grouping derived from equation metadata.
//!
//! For each group the emitter needs, in order: which destinations are
//! updated, and for each destination, which equations contribute through
//! which source collection.

use std::sync::Arc;

use indexmap::IndexMap;
use sphgen_model::{Equation, Group};
use tracing::trace;

/// Equations contributing to one destination, keyed by source collection.
pub type SourceMap = IndexMap<String, Vec<Arc<dyn Equation>>>;

/// Per-group structure: destination name to its source contributions.
pub type DestMap = IndexMap<String, SourceMap>;

/// Build the destination → source → equations structure for one group.
///
/// Destinations appear in first-occurrence order among the group's
/// equations; per-source lists preserve equation order. An equation
/// contributes only under its own destination. A source-independent
/// equation (empty source list) still reserves its destination slot but
/// adds no source entry, so nothing is emitted for it inside the pair
/// loops.
pub fn build_dest_map(group: &Group) -> DestMap {
    let mut dests = DestMap::new();
    for equation in &group.equations {
        let sources = dests.entry(equation.dest().to_string()).or_default();
        for src in equation.sources() {
            sources
                .entry(src.clone())
                .or_default()
                .push(Arc::clone(equation));
        }
    }
    trace!(destinations = dests.len(), "built destination map");
    dests
}
