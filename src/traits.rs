use alloc::vec::Vec;
use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be used as sample elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point sample elements.
///
/// Required by every interpolation method: divided differences, spline
/// systems, and basis products all need `abs`, division, and ordered
/// comparison. Covers `f32` and `f64`.
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}

/// Trait for fitted interpolants, for a consistent API across all methods.
///
/// Implementors hold whatever precomputed state their method needs
/// (divided-difference coefficients, spline segments, …); evaluation
/// never fails and never reallocates.
pub trait Interpolant<T: FloatScalar> {
    /// Interpolated value at `x`.
    fn eval(&self, x: T) -> T;

    /// Interpolated value and first derivative at `x`, as `(value, slope)`.
    fn eval_derivative(&self, x: T) -> (T, T);

    /// Interpolated values at each query point, in order.
    fn eval_many(&self, xs: &[T]) -> Vec<T> {
        xs.iter().map(|&x| self.eval(x)).collect()
    }
}
