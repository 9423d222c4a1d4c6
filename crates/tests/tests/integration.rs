//! Integration tests for end-to-end document generation.
//!
//! These tests verify the full pipeline:
//! equation set → normalize → group → check → resolve → emit

use sphgen_codegen::Error;
use sphgen_model::{
    Equation, EquationSetItem, Fragments, Gaussian, Group, ParticleCollection, SummationDensity,
    Variable, WendlandQuintic,
};
use sphgen_tests::GenHarness;

/// Minimal accumulation equation with a configurable variable name, so
/// several instances can coexist under the global uniqueness rule.
#[derive(Debug)]
struct Accumulator {
    kind: &'static str,
    dest: String,
    sources: Vec<String>,
    var: &'static str,
}

impl Accumulator {
    fn new(kind: &'static str, dest: &str, var: &'static str) -> Self {
        Self {
            kind,
            dest: dest.to_string(),
            sources: vec![dest.to_string()],
            var,
        }
    }
}

impl Equation for Accumulator {
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
            variables: vec![Variable::with_default("double", self.var, "0.0")],
            arrays: vec!["s_m".to_string(), "d_rho".to_string()],
            loop_body: Some(format!(
                "{} += s_m[s_idx]*KERNEL(d_x[d_idx], s_x[s_idx], d_h[d_idx])\n",
                self.var
            )),
            post: Some(format!("d_rho[d_idx] = {}\n", self.var)),
            ..Fragments::default()
        }
    }
}

/// One flat equation, default configuration: the document must contain
/// the helper section, the routine, both pointer-setup blocks for
/// `fluid`, the initialized particle loop, the substituted neighbor
/// fragment, and the finalization, in that order.
#[test]
fn test_single_equation_document() {
    let code = GenHarness::new()
        .with_item(EquationSetItem::equation(SummationDensity::new(
            "fluid",
            &["fluid"],
        )))
        .generate()
        .unwrap();

    let landmarks = [
        "cdef class ParticleArrayWrapper",
        "cdef class SPHCalc",
        "# Group 0.",
        "# Destination fluid.",
        "NP_DEST = self.fluid.size()",
        "# Source fluid.",
        "locator = AllPairLocator(s_x, s_h, d_x, d_h)",
        "for d_idx in range(NP_DEST):",
        "rho_sum = 0.0",
        "locator.get_neighbors(d_idx, nbrs)",
        "# Equation SummationDensity",
        "CubicSplineKernel(d_x[d_idx], s_x[s_idx], hab)",
        "d_rho[d_idx] = rho_sum",
        "# Group 0 done.",
    ];
    let mut last = 0;
    for landmark in landmarks {
        let pos = code[last..]
            .find(landmark)
            .unwrap_or_else(|| panic!("`{landmark}` missing or out of order"));
        last += pos;
    }
}

/// The kernel macro tokens must be fully rewritten for whichever kernel
/// is configured.
#[test]
fn test_kernel_selection_rewrites_macros() {
    for (kernel_name, code) in [
        ("GaussianKernel", kernel_doc_gaussian()),
        ("WendlandQuinticKernel", kernel_doc_wendland()),
    ] {
        assert!(code.contains(kernel_name), "missing {kernel_name}");
        assert!(!code.contains("KERNEL("), "unreplaced macro token");
    }
}

fn kernel_doc_gaussian() -> String {
    GenHarness::new()
        .with_kernel(Gaussian)
        .with_item(EquationSetItem::equation(SummationDensity::new(
            "fluid",
            &["fluid"],
        )))
        .generate()
        .unwrap()
}

fn kernel_doc_wendland() -> String {
    GenHarness::new()
        .with_kernel(WendlandQuintic)
        .with_item(EquationSetItem::equation(SummationDensity::new(
            "fluid",
            &["fluid"],
        )))
        .generate()
        .unwrap()
}

/// Pre-grouped equation sets keep their phase boundaries: each group gets
/// its own numbered block, in the supplied order. The two phases use
/// equations with distinct variable names, since variable names are
/// globally unique across the whole equation set.
#[test]
fn test_groups_emit_in_phase_order() {
    let code = GenHarness::new()
        .with_collections(vec![
            ParticleCollection::new("fluid", &["x", "y", "z", "h", "m", "rho"]),
            ParticleCollection::new("solid", &["x", "y", "z", "h", "m", "rho"]),
        ])
        .with_item(EquationSetItem::from(Group::new(vec![std::sync::Arc::new(
            Accumulator::new("DensityPhase", "fluid", "acc_a"),
        )])))
        .with_item(EquationSetItem::from(Group::new(vec![std::sync::Arc::new(
            Accumulator::new("ForcePhase", "solid", "acc_b"),
        )])))
        .generate()
        .unwrap();

    let g0 = code.find("# Group 0.").unwrap();
    let g0_done = code.find("# Group 0 done.").unwrap();
    let g1 = code.find("# Group 1.").unwrap();
    let g1_done = code.find("# Group 1 done.").unwrap();
    assert!(g0 < g0_done && g0_done < g1 && g1 < g1_done);

    // Each group's destination appears inside its own block.
    let dest_fluid = code.find("# Destination fluid.").unwrap();
    let dest_solid = code.find("# Destination solid.").unwrap();
    assert!(g0 < dest_fluid && dest_fluid < g0_done);
    assert!(g1 < dest_solid && dest_solid < g1_done);

    // So do the equations themselves.
    let eq_a = code.find("# Equation DensityPhase").unwrap();
    let eq_b = code.find("# Equation ForcePhase").unwrap();
    assert!(g0 < eq_a && eq_a < g0_done);
    assert!(g1 < eq_b && eq_b < g1_done);
}

/// A mixed list of bare equations and groups fails with a shape error and
/// yields no text.
#[test]
fn test_mixed_equation_set_fails() {
    let result = GenHarness::new()
        .with_item(EquationSetItem::equation(SummationDensity::new(
            "fluid",
            &["fluid"],
        )))
        .with_item(EquationSetItem::from(Group::new(vec![std::sync::Arc::new(
            SummationDensity::new("solid", &["solid"]),
        )])))
        .generate();
    assert!(matches!(result, Err(Error::MixedGroups)));
}

/// Generation is deterministic: the same configuration produces
/// byte-identical documents.
#[test]
fn test_generation_is_deterministic() {
    let build = || {
        GenHarness::new()
            .with_item(EquationSetItem::equation(SummationDensity::new(
                "fluid",
                &["fluid"],
            )))
            .generate()
            .unwrap()
    };
    assert_eq!(build(), build());
}

/// The wrapper's numeric fields exclude the reserved bookkeeping names
/// even when the collections declare them.
#[test]
fn test_wrapper_excludes_reserved_properties() {
    let code = GenHarness::new()
        .with_item(EquationSetItem::equation(SummationDensity::new(
            "fluid",
            &["fluid"],
        )))
        .generate()
        .unwrap();
    let field_line = code
        .lines()
        .find(|l| l.contains("cdef public DoubleArray"))
        .unwrap();
    for reserved in ["tag", "group", "local", "pid"] {
        assert!(
            !field_line.split(", ").any(|f| f.trim() == reserved),
            "reserved `{reserved}` leaked into wrapper fields"
        );
    }
}

/// Two equations fusing on the same destination and source share one
/// particle loop; the naming rules still hold across them.
#[test]
fn test_two_equations_fuse_into_one_loop() {
    #[derive(Debug)]
    struct PressureGradient {
        sources: Vec<String>,
    }
    impl Equation for PressureGradient {
        fn kind(&self) -> &'static str {
            "PressureGradient"
        }
        fn dest(&self) -> &str {
            "fluid"
        }
        fn sources(&self) -> &[String] {
            &self.sources
        }
        fn fragments(&self) -> Fragments {
            Fragments {
                variables: vec![Variable::with_default("double", "p_acc", "0.0")],
                arrays: vec!["s_p".to_string(), "d_au".to_string()],
                loop_body: Some("p_acc += s_p[s_idx]*GRADIENT(d_x[d_idx], s_x[s_idx], hab)\n".into()),
                post: Some("d_au[d_idx] = p_acc\n".into()),
                ..Fragments::default()
            }
        }
    }

    let code = GenHarness::new()
        .with_item(EquationSetItem::equation(SummationDensity::new(
            "fluid",
            &["fluid"],
        )))
        .with_item(EquationSetItem::equation(PressureGradient {
            sources: vec!["fluid".to_string()],
        }))
        .generate()
        .unwrap();

    // One fused destination loop, both equations inside it.
    assert_eq!(code.matches("for d_idx in range(NP_DEST):").count(), 1);
    let loop_start = code.find("for d_idx in range(NP_DEST):").unwrap();
    assert!(code[loop_start..].contains("# Equation SummationDensity"));
    assert!(code[loop_start..].contains("# Equation PressureGradient"));
    assert!(code[loop_start..].contains("CubicSplineGradient("));

    // Both initializations precede the neighbor retrieval.
    let retrieval = code.find("locator.get_neighbors").unwrap();
    assert!(code[loop_start..retrieval].contains("rho_sum = 0.0"));
    assert!(code[loop_start..retrieval].contains("p_acc = 0.0"));
}
