//! Weighting kernels and their derived macro substitution targets.

use crate::fragment::Fragments;

/// A weighting-kernel family.
///
/// The kernel's identity derives the two names substituted for the
/// `KERNEL` and `GRADIENT` macro tokens inside per-neighbor fragments. A
/// kernel may additionally supply a one-time `helper` fragment declaring
/// its evaluators.
pub trait SphKernel: Send + Sync {
    /// Concrete-kind identity.
    fn kind(&self) -> &'static str;

    /// One-time helper fragment; empty by default.
    fn fragments(&self) -> Fragments {
        Fragments::default()
    }

    /// Name substituted for the `KERNEL` macro token.
    fn kernel_name(&self) -> String {
        format!("{}Kernel", self.kind())
    }

    /// Name substituted for the `GRADIENT` macro token.
    fn gradient_name(&self) -> String {
        format!("{}Gradient", self.kind())
    }
}

/// Cubic B-spline kernel.
#[derive(Debug, Clone, Copy, Default)]
pub struct CubicSpline;

impl SphKernel for CubicSpline {
    fn kind(&self) -> &'static str {
        "CubicSpline"
    }

    fn fragments(&self) -> Fragments {
        Fragments {
            helper: Some(
                "double cdef CubicSplineKernel(double x, double y, double h):\n    return 1.0\n"
                    .to_string(),
            ),
            ..Fragments::default()
        }
    }
}

/// Gaussian kernel.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gaussian;

impl SphKernel for Gaussian {
    fn kind(&self) -> &'static str {
        "Gaussian"
    }
}

/// Wendland quintic (C2) kernel.
#[derive(Debug, Clone, Copy, Default)]
pub struct WendlandQuintic;

impl SphKernel for WendlandQuintic {
    fn kind(&self) -> &'static str {
        "WendlandQuintic"
    }
}
