//! Array-pointer dependency resolution.
//!
//! Computes the minimal pointer-binding statements each destination and
//! source needs: the locator-required position/smoothing-length tokens
//! plus every array token declared by an equation active on that side,
//! deduplicated.

use std::sync::Arc;

use indexmap::IndexSet;
use sphgen_model::{Equation, Group};

use crate::grouping::SourceMap;

/// Destination-side tokens the locator needs bound before its setup runs.
pub const DEST_REQUIRED: [&str; 4] = ["d_x", "d_y", "d_z", "d_h"];

/// Source-side tokens the locator needs bound before its setup runs.
pub const SRC_REQUIRED: [&str; 4] = ["s_x", "s_y", "s_z", "s_h"];

/// Pointer declarations for every array token used anywhere in the
/// equation set, deduplicated with first-seen order preserved.
pub fn array_declarations(groups: &[Group]) -> String {
    let mut statements = IndexSet::new();
    for equation in groups.iter().flat_map(|g| &g.equations) {
        for array in equation.fragments().arrays {
            statements.insert(format!("cdef double* {array}"));
        }
    }
    statements.into_iter().collect::<Vec<_>>().join("\n")
}

/// Pointer-setup statements for one destination: the particle-count
/// binding plus one binding per distinct `d_`-prefixed token required by
/// the locator or by any equation active for this destination.
pub fn dest_array_setup(dest: &str, sources: &SourceMap) -> String {
    let mut names: IndexSet<String> = DEST_REQUIRED.iter().map(|n| n.to_string()).collect();
    for equation in sources.values().flatten() {
        for array in equation.fragments().arrays {
            if array.starts_with("d_") {
                names.insert(array);
            }
        }
    }
    let mut lines = vec![format!("NP_DEST = self.{dest}.size()")];
    lines.extend(names.iter().map(|name| binding(dest, name)));
    lines.join("\n")
}

/// Pointer-setup statements for one source under the current destination,
/// symmetric to [`dest_array_setup`] with `s_`-prefixed tokens.
pub fn src_array_setup(src: &str, equations: &[Arc<dyn Equation>]) -> String {
    let mut names: IndexSet<String> = SRC_REQUIRED.iter().map(|n| n.to_string()).collect();
    for equation in equations {
        for array in equation.fragments().arrays {
            if array.starts_with("s_") {
                names.insert(array);
            }
        }
    }
    let lines: Vec<String> = names.iter().map(|name| binding(src, name)).collect();
    lines.join("\n")
}

/// One pointer binding: `d_rho = self.fluid.rho.get_data_ptr()`.
fn binding(collection: &str, token: &str) -> String {
    format!(
        "{token} = self.{collection}.{}.get_data_ptr()",
        &token[2..]
    )
}
