//! Equation-set normalization into execution groups.

use sphgen_model::{EquationSetItem, Group};
use tracing::debug;

use crate::error::{Error, Result};

/// Lift a flat equation list into a list of execution groups.
///
/// A list of bare equations becomes one implicit group preserving the
/// original order; a list already composed of groups passes through
/// unchanged. Mixing the two shapes is a configuration error.
pub fn normalize(items: Vec<EquationSetItem>) -> Result<Vec<Group>> {
    let mut groups = Vec::new();
    let mut bare = Vec::new();
    for item in items {
        match item {
            EquationSetItem::Group(group) => groups.push(group),
            EquationSetItem::Equation(eq) => bare.push(eq),
        }
    }

    match (groups.is_empty(), bare.is_empty()) {
        (false, false) => Err(Error::MixedGroups),
        (true, _) => {
            debug!(equations = bare.len(), "wrapped flat equation list in implicit group");
            Ok(vec![Group::new(bare)])
        }
        (false, true) => {
            debug!(groups = groups.len(), "equation set already grouped");
            Ok(groups)
        }
    }
}
