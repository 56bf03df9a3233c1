//! [`DofVector`] implementations on top of nalgebra's vector types.
//!
//! With the `nalgebra` feature enabled, `SVector<T, N>` plays the fixed role
//! and `DVector<T>` the dynamic one, so trajectory code generic over
//! [`DofVector`] can swap std-based storage for nalgebra storage without any
//! call-site change.

use nalgebra::{DVector, SVector, Scalar};

use crate::dof_vector::DofVector;

impl<T: Scalar, const N: usize> DofVector<T> for SVector<T, N> {
    const COMPILE_TIME_DOFS: Option<usize> = Some(N);

    fn filled(dofs: usize, value: T) -> Self {
        debug_assert_eq!(dofs, N, "fixed DOF vector constructed with wrong axis count");
        SVector::repeat(value)
    }

    fn dofs(&self) -> usize {
        N
    }

    fn as_slice(&self) -> &[T] {
        self.as_slice()
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Scalar> DofVector<T> for DVector<T> {
    const COMPILE_TIME_DOFS: Option<usize> = None;

    fn filled(dofs: usize, value: T) -> Self {
        DVector::repeat(dofs, value)
    }

    fn dofs(&self) -> usize {
        self.len()
    }

    fn as_slice(&self) -> &[T] {
        self.as_slice()
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
