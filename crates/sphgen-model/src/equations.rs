//! Built-in equation library.

use crate::equation::Equation;
use crate::fragment::Fragments;
use crate::variable::Variable;

/// Classic summation density: `rho_a = sum_b m_b W_ab`.
#[derive(Debug, Clone)]
pub struct SummationDensity {
    dest: String,
    sources: Vec<String>,
}

impl SummationDensity {
    /// Summation density for `dest`, accumulating over `sources`.
    pub fn new(dest: impl Into<String>, sources: &[&str]) -> Self {
        Self {
            dest: dest.into(),
            sources: sources.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Equation for SummationDensity {
    fn kind(&self) -> &'static str {
        "SummationDensity"
    }

    fn dest(&self) -> &str {
        &self.dest
    }

    fn sources(&self) -> &[String] {
        &self.sources
    }

    fn fragments(&self) -> Fragments {
        Fragments {
            variables: vec![Variable::with_default("double", "rho_sum", "0.0")],
            temporaries: vec![Variable::with_default("double", "hab", "0.0")],
            arrays: ["s_h", "s_m", "s_x", "d_h", "d_x", "d_rho"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            loop_body: Some(
                "hab = 0.5*(s_h[s_idx] + d_h[d_idx])\n\
                 rho_sum += s_m[s_idx]*KERNEL(d_x[d_idx], s_x[s_idx], hab)\n"
                    .to_string(),
            ),
            post: Some("d_rho[d_idx] = rho_sum\n".to_string()),
            ..Fragments::default()
        }
    }
}
