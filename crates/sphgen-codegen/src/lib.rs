// Allow unwrap in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! Fused compute-routine generation for SPH pairwise summations.
//!
//! Turns a declarative equation set into the text of a single fused
//! compute routine plus its auxiliary declarations. The pipeline is a
//! straight line:
//!
//! ```text
//! equation list → normalize → groups → dest/source grouping
//!               → declaration check → array-dependency resolution
//!               → emit (helpers, then nested loop body)
//! ```
//!
//! Generation is a pure, synchronous function of its inputs: any shape,
//! naming, or capability violation aborts before any text is produced,
//! and there is no partial output.

pub mod check;
pub mod deps;
pub mod emit;
pub mod error;
pub mod grouping;
pub mod normalize;
pub mod source;
pub mod subst;
pub mod wrapper;

#[cfg(test)]
pub(crate) mod testutil;

pub use emit::Generator;
pub use error::{Error, Result};
