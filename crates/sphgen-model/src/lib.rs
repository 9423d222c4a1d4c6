//! Data model for SPH compute-routine generation.
//!
//! This crate defines the descriptors the codegen pipeline consumes:
//! equations, kernels, neighbor locators, and particle collections. All of
//! them are immutable value objects constructed once from static
//! configuration; the pipeline queries their code fragments repeatedly, so
//! every fragment query must be pure and repeatable.
//!
//! The concrete physics lives behind the [`Equation`] trait — the pipeline
//! only sees the fragment bundle each equation produces on demand.

pub mod equation;
pub mod equations;
pub mod fragment;
pub mod kernel;
pub mod locator;
pub mod particles;
pub mod variable;

pub use equation::{Equation, EquationSetItem, Group};
pub use equations::SummationDensity;
pub use fragment::Fragments;
pub use kernel::{CubicSpline, Gaussian, SphKernel, WendlandQuintic};
pub use locator::{AllPairLocator, Locator};
pub use particles::{ParticleCollection, RESERVED_PROPERTIES};
pub use variable::{Temporary, Variable};
