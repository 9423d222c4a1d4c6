//! Integration test harness for sphgen.
//!
//! Provides a convenient builder for end-to-end tests of the full
//! pipeline: equation set → normalize → group → check → resolve → emit.

use sphgen_codegen::{Generator, Result};
use sphgen_model::{
    AllPairLocator, CubicSpline, EquationSetItem, Locator, ParticleCollection, SphKernel,
};

/// Builder for a fully configured [`Generator`] with sensible defaults:
/// one `fluid` collection, the all-pair locator, and the cubic spline
/// kernel. Tests override the parts they exercise.
pub struct GenHarness {
    collections: Vec<ParticleCollection>,
    equations: Vec<EquationSetItem>,
    locator: Box<dyn Locator>,
    kernel: Box<dyn SphKernel>,
}

impl Default for GenHarness {
    fn default() -> Self {
        Self {
            collections: vec![ParticleCollection::new(
                "fluid",
                &["x", "y", "z", "h", "m", "rho", "tag", "group", "local", "pid"],
            )],
            equations: Vec::new(),
            locator: Box::new(AllPairLocator),
            kernel: Box::new(CubicSpline),
        }
    }
}

impl GenHarness {
    /// Harness with the default configuration and no equations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the collection list.
    pub fn with_collections(mut self, collections: Vec<ParticleCollection>) -> Self {
        self.collections = collections;
        self
    }

    /// Append an item to the equation set.
    pub fn with_item(mut self, item: EquationSetItem) -> Self {
        self.equations.push(item);
        self
    }

    /// Replace the kernel.
    pub fn with_kernel(mut self, kernel: impl SphKernel + 'static) -> Self {
        self.kernel = Box::new(kernel);
        self
    }

    /// Replace the locator.
    pub fn with_locator(mut self, locator: impl Locator + 'static) -> Self {
        self.locator = Box::new(locator);
        self
    }

    /// Build the generator and produce the document.
    pub fn generate(self) -> Result<String> {
        Generator::new(self.collections, self.equations, self.locator, self.kernel)?.generate()
    }
}
