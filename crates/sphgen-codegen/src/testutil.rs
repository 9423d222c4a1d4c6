//! Configurable stub equation shared by the pipeline tests.

use std::sync::Arc;

use sphgen_model::{Equation, Fragments, Variable};

/// Equation stub with every fragment field configurable.
#[derive(Debug, Clone, Default)]
pub struct StubEquation {
    pub kind: &'static str,
    pub dest: String,
    pub sources: Vec<String>,
    pub variables: Vec<Variable>,
    pub temporaries: Vec<Variable>,
    pub arrays: Vec<String>,
    pub loop_body: Option<String>,
    pub post: Option<String>,
    pub helper: Option<String>,
}

impl StubEquation {
    pub fn new(kind: &'static str, dest: &str, sources: &[&str]) -> Self {
        Self {
            kind,
            dest: dest.to_string(),
            sources: sources.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn with_variable(mut self, var: Variable) -> Self {
        self.variables.push(var);
        self
    }

    pub fn with_temporary(mut self, tmp: Variable) -> Self {
        self.temporaries.push(tmp);
        self
    }

    pub fn with_arrays(mut self, arrays: &[&str]) -> Self {
        self.arrays = arrays.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn shared(self) -> Arc<dyn Equation> {
        Arc::new(self)
    }
}

impl Equation for StubEquation {
    fn kind(&self) -> &'static str {
        self.kind
    }

    fn dest(&self) -> &str {
        &self.dest
    }

    fn sources(&self) -> &[String] {
        &self.sources
    }

    fn fragments(&self) -> Fragments {
        Fragments {
            variables: self.variables.clone(),
            temporaries: self.temporaries.clone(),
            arrays: self.arrays.clone(),
            loop_body: self.loop_body.clone(),
            post: self.post.clone(),
            helper: self.helper.clone(),
            setup: None,
        }
    }
}
