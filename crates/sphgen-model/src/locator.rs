//! Neighbor-finding strategies.

use crate::fragment::Fragments;

/// The neighbor-search capability supplying candidate source indices for a
/// destination particle.
///
/// A locator contributes a `helper` fragment declaring its neighbor-index
/// structure and a `setup` fragment run once per destination/source pair.
/// Both are required: the emitter fails with a missing-capability error
/// when either is absent from the bundle.
pub trait Locator: Send + Sync {
    /// Concrete-kind identity.
    fn kind(&self) -> &'static str;

    /// The locator's code fragments (`helper` and `setup`).
    fn fragments(&self) -> Fragments;
}

/// Brute-force locator: every source particle is a neighbor of every
/// destination particle.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllPairLocator;

impl Locator for AllPairLocator {
    fn kind(&self) -> &'static str {
        "AllPairLocator"
    }

    fn fragments(&self) -> Fragments {
        Fragments {
            helper: Some(
                r#"cdef class AllPairLocator:
    cdef long N
    cdef LongArray nbrs
    def __init__(self, s_x, s_h, d_x, d_h):
        self.N = len(s_x)
        self.nbrs = LongArray(self.N)
        cdef long i
        for i in range(self.N):
            self.nbrs[i] = i

    def get_neighbors(long d_idx, LongArray nbr_array):
        nbr_array.resize(self.N)
        nbr_array.copy_values(self.nbrs)
"#
                .to_string(),
            ),
            setup: Some("locator = AllPairLocator(s_x, s_h, d_x, d_h)\n".to_string()),
            ..Fragments::default()
        }
    }
}
