//! Particle-array wrapper generation.
//!
//! The generated routine accesses collections through a wrapper class
//! exposing one typed carray field per numeric property. The field list is
//! the union of property names across every configured collection, minus
//! the reserved bookkeeping names, which the caller passes in explicitly.

use indexmap::IndexSet;
use sphgen_model::ParticleCollection;

/// Declaration of the wrapper class for the given collections.
///
/// Property union order follows collection order, first occurrence wins;
/// names listed in `reserved` are excluded from the numeric fields (they
/// are bound as bookkeeping arrays with their own types).
pub fn wrapper_declaration(collections: &[ParticleCollection], reserved: &[&str]) -> String {
    let mut props = IndexSet::new();
    for collection in collections {
        for prop in &collection.properties {
            if !reserved.contains(&prop.as_str()) {
                props.insert(prop.clone());
            }
        }
    }
    let array_code = props.into_iter().collect::<Vec<_>>().join(", ");

    format!(
        r#"from pysph.base.particle_array cimport ParticleArray
from pysph.base.particle_array import ParticleArray

cdef class ParticleArrayWrapper:
    cdef public ParticleArray array
    cdef public LongArray tag, group
    cdef public IntArray local, pid
    cdef public DoubleArray {array_code}

    def __init__(self, pa):
        self.array = pa
        props = set(pa.properties.keys())
        props = props.union(['tag', 'group', 'local', 'pid'])
        for prop in props:
            setattr(self, prop, pa.get_carray(prop))

    cpdef long size(self):
        return self.array.get_number_of_particles()


"#
    )
}
