//! Code emission orchestrator.
//!
//! [`Generator`] drives the full pipeline in two straight-line phases:
//! the helper phase (carray imports, kernel helper, equation helpers,
//! locator helper, particle-array wrapper) followed by the body phase
//! (the fused routine with its nested destination/source/neighbor loops).
//! Failure is all-or-nothing: an invariant violation aborts before any
//! text is returned.

use std::io;

use sphgen_model::{
    EquationSetItem, Group, Locator, ParticleCollection, SphKernel, RESERVED_PROPERTIES,
};
use tracing::debug;

use crate::check::{check_declarations, initialization_block, Declarations};
use crate::deps::{array_declarations, dest_array_setup, src_array_setup};
use crate::error::{Error, Result};
use crate::grouping::{build_dest_map, DestMap};
use crate::normalize::normalize;
use crate::source::SourceCode;
use crate::subst::substitute_kernel_macros;
use crate::wrapper::wrapper_declaration;

/// Imports for the flat numeric-array types the generated code uses.
const CARRAY_IMPORTS: [&str; 2] = [
    "from pysph.base.carray cimport DoubleArray, LongArray, IntArray, UIntArray",
    "from pysph.base.carray import DoubleArray, LongArray, IntArray, UIntArray",
];

/// Generates the fused compute routine for one equation set.
///
/// Construction normalizes the equation set and derives the per-group
/// destination/source structure; [`generate`] runs the declaration checks
/// and produces the complete document.
///
/// [`generate`]: Generator::generate
pub struct Generator {
    collections: Vec<ParticleCollection>,
    groups: Vec<Group>,
    dest_maps: Vec<DestMap>,
    locator: Box<dyn Locator>,
    kernel: Box<dyn SphKernel>,
}

impl Generator {
    /// Normalize the equation set and build the grouping structure.
    ///
    /// Fails with [`Error::MixedGroups`] when the list mixes bare
    /// equations and groups.
    pub fn new(
        collections: Vec<ParticleCollection>,
        equations: Vec<EquationSetItem>,
        locator: Box<dyn Locator>,
        kernel: Box<dyn SphKernel>,
    ) -> Result<Self> {
        let groups = normalize(equations)?;
        let dest_maps = groups.iter().map(build_dest_map).collect();
        debug!(
            groups = groups.len(),
            collections = collections.len(),
            kernel = kernel.kind(),
            locator = locator.kind(),
            "generator configured"
        );
        Ok(Self {
            collections,
            groups,
            dest_maps,
            locator,
            kernel,
        })
    }

    /// Generate the complete document: helper section, then body section.
    pub fn generate(&self) -> Result<String> {
        let declarations = check_declarations(&self.groups)?;
        let helpers = self.helper_section()?;
        let body = self.body_section(&declarations)?;
        debug!(bytes = helpers.len() + body.len(), "document generated");
        Ok(format!("{helpers}{body}"))
    }

    /// Generate and write the document to a sink in one shot.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<()> {
        let code = self.generate()?;
        out.write_all(code.as_bytes())?;
        Ok(())
    }

    /// Helper phase: one-time declarations emitted before the routine.
    fn helper_section(&self) -> Result<String> {
        let mut helpers: Vec<String> = CARRAY_IMPORTS.iter().map(|s| s.to_string()).collect();
        helpers.push(String::new());

        helpers.extend(attributed(self.kernel.kind(), self.kernel.fragments().helper));

        // Helpers are emitted once per equation instance, not per kind:
        // two instances of one kind may be configured differently.
        for equation in self.groups.iter().flat_map(|g| &g.equations) {
            helpers.extend(attributed(equation.kind(), equation.fragments().helper));
        }

        let locator_helper =
            self.require_locator_fragment(self.locator.fragments().helper, "helper")?;
        helpers.extend(attributed(self.locator.kind(), Some(locator_helper)));

        helpers.push(wrapper_declaration(&self.collections, &RESERVED_PROPERTIES));
        Ok(helpers.join("\n"))
    }

    /// Body phase: the fused routine with its nested loops.
    fn body_section(&self, declarations: &Declarations) -> Result<String> {
        let locator_setup =
            self.require_locator_fragment(self.locator.fragments().setup, "setup")?;

        let mut src = SourceCode::new();
        let names = self
            .collections
            .iter()
            .map(|pa| pa.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        src.push(format!(
            r#"cdef class SPHCalc:

    cdef public ParticleArrayWrapper {names}

    def __init__(self, *particle_arrays):
        for pa in particle_arrays:
            name = pa.name
            setattr(self, name, ParticleArrayWrapper(pa))

    cpdef void compute(self):
        cdef public long s_idx, d_idx, NP_SRC, NP_DEST
        cdef public LongArray nbrs

"#
        ));
        src.indent();
        src.indent();

        src.push(array_declarations(&self.groups));
        src.push(declarations.declaration_block());

        for (g_idx, dest_map) in self.dest_maps.iter().enumerate() {
            src.push(format!("# Group {g_idx}.\n"));
            for (dest, sources) in dest_map {
                src.push(format!("# Destination {dest}.\n"));
                src.push(dest_array_setup(dest, sources));
                for (source, equations) in sources {
                    src.push(format!("# Source {source}.\n"));
                    src.push(src_array_setup(source, equations));
                    src.push(locator_setup.clone());

                    src.push("for d_idx in range(NP_DEST):");
                    src.indent();
                    src.push(initialization_block(equations));
                    src.push(
                        "locator.get_neighbors(d_idx, nbrs)\n\
                         for nbr_idx in range(len(nbrs)):\n    \
                         s_idx = nbrs[nbr_idx]",
                    );
                    src.indent();
                    for equation in equations {
                        if let Some(body) = equation.fragments().loop_body {
                            src.push(format!("# Equation {}", equation.kind()));
                            src.push(substitute_kernel_macros(&body, self.kernel.as_ref()));
                        }
                    }
                    src.dedent();
                    for equation in equations {
                        if let Some(post) = equation.fragments().post {
                            src.push(post);
                        }
                    }
                    src.dedent();
                    src.push(format!("# Source {source} done.\n"));
                }
                src.push(format!("# Destination {dest} done.\n"));
            }
            src.push(format!("# Group {g_idx} done."));
        }

        Ok(src.render())
    }

    /// Unwrap a fragment the locator must provide.
    fn require_locator_fragment(
        &self,
        value: Option<String>,
        fragment: &'static str,
    ) -> Result<String> {
        value.ok_or_else(|| Error::MissingCapability {
            kind: self.locator.kind().to_string(),
            fragment,
        })
    }
}

/// Fragment text prefixed with its producer's kind, or nothing.
fn attributed(kind: &str, fragment: Option<String>) -> Vec<String> {
    match fragment {
        Some(code) => vec![format!("# From {kind}"), code],
        None => Vec::new(),
    }
}
