//! Equation contract and execution groups.

use std::fmt;
use std::sync::Arc;

use crate::fragment::Fragments;

/// A fragment producer describing one pairwise update between a
/// destination collection and its source collections.
///
/// Implementations are immutable after construction. [`fragments`] is
/// queried several times during one generation run and must be pure and
/// repeatable.
///
/// [`fragments`]: Equation::fragments
pub trait Equation: Send + Sync {
    /// Concrete-kind identity, used in diagnostics and emitted comments.
    fn kind(&self) -> &'static str;

    /// Name of the destination collection.
    fn dest(&self) -> &str;

    /// Source collection names; empty for a source-independent update.
    fn sources(&self) -> &[String];

    /// The equation's code fragments.
    fn fragments(&self) -> Fragments;
}

/// One execution phase: its equations run together before the next group
/// begins. Groups execute strictly in the order supplied.
#[derive(Clone, Default)]
pub struct Group {
    /// Equations of this phase, in execution order
    pub equations: Vec<Arc<dyn Equation>>,
}

impl Group {
    /// Create a group from an ordered equation list.
    pub fn new(equations: Vec<Arc<dyn Equation>>) -> Self {
        Self { equations }
    }
}

impl fmt::Debug for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.equations.iter().map(|eq| eq.kind()))
            .finish()
    }
}

/// Element of the equation list handed to the generator.
///
/// A list must be homogeneous: either every item is a bare equation or
/// every item is a pre-formed group. The normalizer rejects mixed lists.
#[derive(Clone)]
pub enum EquationSetItem {
    /// A bare equation, implicitly grouped by the normalizer
    Equation(Arc<dyn Equation>),
    /// A pre-formed execution phase
    Group(Group),
}

impl EquationSetItem {
    /// Wrap a concrete equation.
    pub fn equation(eq: impl Equation + 'static) -> Self {
        Self::Equation(Arc::new(eq))
    }
}

impl From<Group> for EquationSetItem {
    fn from(group: Group) -> Self {
        Self::Group(group)
    }
}

impl fmt::Debug for EquationSetItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equation(eq) => write!(f, "Equation({})", eq.kind()),
            Self::Group(group) => write!(f, "Group({group:?})"),
        }
    }
}
