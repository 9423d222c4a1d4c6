//! Typed, optionally-defaulted named values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named, typed value scoped to one generated computation.
///
/// A variable name must be unique to the equation that declares it; use
/// [`Temporary`] for values intended to be shared verbatim across
/// equations. Declaration and initialization text are derived from the
/// type, name, and optional default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    /// Type token in the target language (e.g. `double`)
    pub ty: String,
    /// Identifier
    pub name: String,
    /// Default value carried into both declaration and initialization
    pub default: Option<String>,
}

/// A variable shared verbatim between equations declaring the same name.
///
/// All declarations under one name must be textually identical, and a
/// temporary name must never coincide with a variable name.
pub type Temporary = Variable;

impl Variable {
    /// Create a variable without a default.
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
            default: None,
        }
    }

    /// Create a variable with a default value.
    pub fn with_default(
        ty: impl Into<String>,
        name: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
            default: Some(default.into()),
        }
    }

    /// Declaration statement for the routine preamble.
    pub fn declare(&self) -> String {
        match &self.default {
            Some(default) => format!("cdef {} {} = {}", self.ty, self.name, default),
            None => format!("cdef {} {}", self.ty, self.name),
        }
    }

    /// Per-loop initialization statement; empty when no default is given.
    pub fn initialize(&self) -> String {
        match &self.default {
            Some(default) => format!("{} = {}", self.name, default),
            None => String::new(),
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.name)
    }
}
