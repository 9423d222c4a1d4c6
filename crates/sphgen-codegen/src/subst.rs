//! Kernel macro substitution.
//!
//! Per-neighbor fragments are written against the `KERNEL` and `GRADIENT`
//! macro tokens; this pass rewrites them against a concrete kernel. It is
//! pure text substitution, kept separate from emission so the contract
//! stays independently testable.

use sphgen_model::SphKernel;

/// Replace every `KERNEL`/`GRADIENT` token in `code` with the kernel's
/// derived evaluator names. No other text is altered.
pub fn substitute_kernel_macros(code: &str, kernel: &dyn SphKernel) -> String {
    code.replace("KERNEL", &kernel.kernel_name())
        .replace("GRADIENT", &kernel.gradient_name())
}
