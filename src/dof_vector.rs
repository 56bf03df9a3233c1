//! Per-axis storage with a compile-time-fixed or construction-time-fixed
//! degree-of-freedom count.
//!
//! Trajectory code is written once against [`DofVector`] and instantiated
//! either with an array (axis count known at compile time, stack-resident,
//! no allocation) or with a `Vec` (axis count known at run time, one heap
//! allocation at construction). The selection happens through generics and
//! monomorphization, never through a runtime branch or trait object, so the
//! fixed path keeps its zero-overhead access.

use std::ops::{Index, IndexMut};

/// Constant for indicating a dynamic (run-time settable) number of DOFs.
///
/// Higher-level generic types carry the axis count as a const parameter and
/// use this sentinel to select [`DynamicDofVector`] storage.
pub const DYNAMIC_DOFS: usize = 0;

/// Stack-resident storage for a compile-time axis count.
pub type FixedDofVector<T, const DOFS: usize> = [T; DOFS];

/// Stack-resident auxiliary storage reserving `SIZE >= DOFs` slots, for
/// per-axis bookkeeping that needs more than one entry per axis
/// (e.g. sub-segment durations).
pub type FixedSizeVector<T, const SIZE: usize> = [T; SIZE];

/// Heap-resident storage whose length is fixed once at construction.
pub type DynamicDofVector<T> = Vec<T>;

/// An ordered sequence of per-axis scalars, one entry per controlled axis.
///
/// The length is set exactly once: at compile time for fixed implementations,
/// at construction for dynamic ones. Nothing in this crate resizes a vector
/// after [`DofVector::filled`] returns it, and implementations must not
/// either. Out-of-range indexing panics with the standard slice message.
pub trait DofVector<T>: Index<usize, Output = T> + IndexMut<usize> {
    /// `Some(n)` when the axis count is part of the type, `None` when it is
    /// only known after construction.
    const COMPILE_TIME_DOFS: Option<usize>;

    /// Builds a vector with one `value` per axis.
    ///
    /// For fixed implementations `dofs` must equal the compile-time length;
    /// for dynamic ones it sizes the single allocation. `dofs == 0` yields a
    /// legal empty container.
    fn filled(dofs: usize, value: T) -> Self
    where
        Self: Sized;

    /// Number of axes stored.
    fn dofs(&self) -> usize;

    fn as_slice(&self) -> &[T];

    fn as_mut_slice(&mut self) -> &mut [T];
}

impl<T: Copy, const N: usize> DofVector<T> for [T; N] {
    const COMPILE_TIME_DOFS: Option<usize> = Some(N);

    fn filled(dofs: usize, value: T) -> Self {
        debug_assert_eq!(dofs, N, "fixed DOF vector constructed with wrong axis count");
        [value; N]
    }

    fn dofs(&self) -> usize {
        N
    }

    fn as_slice(&self) -> &[T] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

impl<T: Clone> DofVector<T> for Vec<T> {
    const COMPILE_TIME_DOFS: Option<usize> = None;

    fn filled(dofs: usize, value: T) -> Self {
        vec![value; dofs]
    }

    fn dofs(&self) -> usize {
        self.len()
    }

    fn as_slice(&self) -> &[T] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The kind of generic helper a planner writes once for both storages.
    fn accumulate<V: DofVector<f64>>(vector: &V) -> f64 {
        vector.as_slice().iter().sum()
    }

    #[test]
    fn fixed_length_is_known_without_construction() {
        assert_eq!(<FixedDofVector<f64, 6> as DofVector<f64>>::COMPILE_TIME_DOFS, Some(6));
        assert_eq!(<DynamicDofVector<f64> as DofVector<f64>>::COMPILE_TIME_DOFS, None);
    }

    #[test]
    fn fixed_construction() {
        let v: FixedDofVector<f64, 6> = DofVector::filled(6, 1.5);
        assert_eq!(v.dofs(), 6);
        assert!(v.as_slice().iter().all(|&x| x == 1.5));
    }

    #[test]
    fn dynamic_construction() {
        let dofs = 6;
        let v: DynamicDofVector<f64> = DofVector::filled(dofs, 0.0);
        assert_eq!(v.dofs(), 6);
    }

    #[test]
    fn dynamic_zero_dofs_is_a_legal_empty_container() {
        let v: DynamicDofVector<f64> = DofVector::filled(0, 0.0);
        assert_eq!(v.dofs(), 0);
        assert!(v.as_slice().is_empty());
    }

    #[test]
    #[should_panic]
    fn dynamic_out_of_range_indexing_panics() {
        let v: DynamicDofVector<f64> = DofVector::filled(3, 0.0);
        let _ = v[3];
    }

    #[test]
    fn oversized_auxiliary_storage() {
        // 3 axes, 7 slots of sub-segment durations per profile.
        let durations: FixedSizeVector<f64, 7> = DofVector::filled(7, 0.0);
        assert_eq!(durations.dofs(), 7);
    }

    #[test]
    fn generic_code_runs_on_both_representations() {
        let mut fixed: FixedDofVector<f64, 3> = DofVector::filled(3, 0.0);
        let mut dynamic: DynamicDofVector<f64> = DofVector::filled(3, 0.0);
        for i in 0..3 {
            fixed[i] = i as f64;
            dynamic[i] = i as f64;
        }
        assert_eq!(accumulate(&fixed), accumulate(&dynamic));
    }

    #[test]
    fn mutation_through_slices() {
        let mut v: FixedDofVector<f64, 2> = DofVector::filled(2, 0.0);
        v.as_mut_slice()[1] = 4.0;
        assert_eq!(v[1], 4.0);
    }
}
