//! Cross-equation declaration and naming consistency.
//!
//! Runs exactly once over every equation of every group, before any text
//! is emitted. Enforces the naming invariants:
//!
//! 1. No two equations declare a variable with the same name.
//! 2. Equations may share a temporary name only when the declarations are
//!    textually identical.
//! 3. No name is used as both a variable and a temporary.

use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use sphgen_model::{Equation, Group, Variable};
use tracing::debug;

use crate::error::{Error, Result};

/// Validated variables and temporaries collected from the equation set.
#[derive(Debug, Default)]
pub struct Declarations {
    variables: Vec<Variable>,
    temporaries: Vec<Variable>,
}

impl Declarations {
    /// Declaration statements, deduplicated by exact text with first-seen
    /// order preserved. Emitted once at the top of the generated routine.
    pub fn declaration_block(&self) -> String {
        let mut statements = IndexSet::new();
        for var in self.variables.iter().chain(&self.temporaries) {
            statements.insert(var.declare());
        }
        statements.into_iter().collect::<Vec<_>>().join("\n")
    }
}

/// Validate naming invariants across every equation of every group.
///
/// On violation, fails with a naming-conflict error naming the colliding
/// identifier and the offending equation kinds.
pub fn check_declarations(groups: &[Group]) -> Result<Declarations> {
    let mut variables = Vec::new();
    let mut temporaries = Vec::new();
    let mut var_owners: IndexMap<String, Vec<String>> = IndexMap::new();
    let mut tmp_owners: IndexMap<String, Vec<String>> = IndexMap::new();
    let mut tmp_declares: IndexMap<String, Vec<String>> = IndexMap::new();

    for equation in groups.iter().flat_map(|g| &g.equations) {
        let kind = equation.kind().to_string();
        let fragments = equation.fragments();
        for var in &fragments.variables {
            var_owners
                .entry(var.name.clone())
                .or_default()
                .push(kind.clone());
        }
        for tmp in &fragments.temporaries {
            tmp_owners
                .entry(tmp.name.clone())
                .or_default()
                .push(kind.clone());
            tmp_declares
                .entry(tmp.name.clone())
                .or_default()
                .push(tmp.declare());
        }
        variables.extend(fragments.variables);
        temporaries.extend(fragments.temporaries);
    }

    for (name, owners) in &var_owners {
        if owners.len() > 1 {
            return Err(Error::DuplicateVariable {
                name: name.clone(),
                equations: owners.clone(),
            });
        }
    }

    for (name, owners) in &tmp_owners {
        if let Some(var_eqs) = var_owners.get(name) {
            return Err(Error::TemporaryShadowsVariable {
                name: name.clone(),
                temporary_equations: owners.clone(),
                variable_equations: var_eqs.clone(),
            });
        }
    }

    for (name, declares) in &tmp_declares {
        if declares.windows(2).any(|pair| pair[0] != pair[1]) {
            return Err(Error::InconsistentTemporary {
                name: name.clone(),
                equations: tmp_owners[name].clone(),
            });
        }
    }

    debug!(
        variables = variables.len(),
        temporaries = temporaries.len(),
        "declarations validated"
    );
    Ok(Declarations {
        variables,
        temporaries,
    })
}

/// Per-loop initialization statements for the equations active on one
/// source, deduplicated by exact text with first-seen order preserved.
/// Variables without a default contribute nothing.
pub fn initialization_block(equations: &[Arc<dyn Equation>]) -> String {
    let mut statements = IndexSet::new();
    for equation in equations {
        let fragments = equation.fragments();
        for var in fragments.variables.iter().chain(&fragments.temporaries) {
            let init = var.initialize();
            if !init.is_empty() {
                statements.insert(init);
            }
        }
    }
    statements.into_iter().collect::<Vec<_>>().join("\n")
}
