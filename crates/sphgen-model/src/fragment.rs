//! Fragment bundles produced on demand by equations, kernels, and locators.

use crate::variable::{Temporary, Variable};

/// Bundle of named optional code fragments.
///
/// Every fragment producer answers a single query with one of these; any
/// field may be empty, which the pipeline treats as "not provided".
/// Several pipeline stages (declaration checker, array resolver, emitter)
/// independently re-query the same producer, so producers must return the
/// same bundle every time.
#[derive(Debug, Clone, Default)]
pub struct Fragments {
    /// Variables private to the declaring equation (names must be unique
    /// across the whole equation set)
    pub variables: Vec<Variable>,
    /// Temporaries shared verbatim between equations declaring the same name
    pub temporaries: Vec<Temporary>,
    /// Array tokens read or written; `d_`-prefixed for the destination
    /// side, `s_`-prefixed for the source side
    pub arrays: Vec<String>,
    /// Per-neighbor loop body; may contain the `KERNEL` and `GRADIENT`
    /// macro tokens
    pub loop_body: Option<String>,
    /// Finalization run once per destination particle, after the neighbor
    /// loop closes
    pub post: Option<String>,
    /// One-time auxiliary declarations emitted before the routine
    pub helper: Option<String>,
    /// Per destination/source-pair setup statement (locators)
    pub setup: Option<String>,
}
