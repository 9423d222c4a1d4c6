//! Generation errors

use thiserror::Error;

/// Generation result type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the generation pipeline.
///
/// Generation is a pure function of its inputs, so every variant is fatal
/// and none is retried: either a complete document is produced or nothing
/// is.
#[derive(Debug, Error)]
pub enum Error {
    /// The equation list mixes bare equations and groups
    #[error("equation list mixes bare equations and groups; wrap every equation in a group")]
    MixedGroups,

    /// Two equations declare a variable with the same name
    #[error("variable `{name}` declared in multiple equations: {equations:?}")]
    DuplicateVariable {
        /// Colliding identifier
        name: String,
        /// Kinds of the declaring equations
        equations: Vec<String>,
    },

    /// A temporary name is also used as a variable name
    #[error(
        "temporary `{name}` declared in {temporary_equations:?} \
         also declared as a variable in {variable_equations:?}"
    )]
    TemporaryShadowsVariable {
        /// Colliding identifier
        name: String,
        /// Kinds declaring the temporary
        temporary_equations: Vec<String>,
        /// Kinds declaring the variable
        variable_equations: Vec<String>,
    },

    /// Equations declare the same temporary with differing text
    #[error("temporary declarations for `{name}` differ between {equations:?}")]
    InconsistentTemporary {
        /// Colliding identifier
        name: String,
        /// Kinds of the declaring equations
        equations: Vec<String>,
    },

    /// A capability-polymorphic component did not provide a required fragment
    #[error("{kind} does not provide the required `{fragment}` fragment")]
    MissingCapability {
        /// Kind of the offending component
        kind: String,
        /// Name of the missing fragment
        fragment: &'static str,
    },

    /// Writing the generated document to a sink failed
    #[error("failed to write generated code: {0}")]
    Io(#[from] std::io::Error),
}
