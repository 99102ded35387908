//! Shared input validation and segment lookup.

use crate::error::InterpError;
use crate::traits::FloatScalar;

/// Validate that `xs` and `ys` have the same length.
pub(crate) fn validate_same_len<T>(xs: &[T], ys: &[T]) -> Result<(), InterpError> {
    if xs.len() != ys.len() {
        return Err(InterpError::LengthMismatch);
    }
    Ok(())
}

/// Validate a minimum number of sample points.
pub(crate) fn validate_min_len<T>(xs: &[T], min: usize) -> Result<(), InterpError> {
    if xs.len() < min {
        return Err(InterpError::TooFewPoints);
    }
    Ok(())
}

/// Validate that a slice is strictly increasing.
pub(crate) fn validate_sorted<T: FloatScalar>(xs: &[T]) -> Result<(), InterpError> {
    for i in 1..xs.len() {
        if xs[i] <= xs[i - 1] {
            return Err(InterpError::NotSorted);
        }
    }
    Ok(())
}

/// Validate that all abscissas are pairwise distinct.
///
/// Exact comparison on purpose: the guarded failure is an exact zero
/// divisor in a basis or divided-difference denominator. Near-duplicates
/// are ill-conditioned but well-defined.
pub(crate) fn validate_distinct<T: FloatScalar>(xs: &[T]) -> Result<(), InterpError> {
    for i in 0..xs.len() {
        for j in (i + 1)..xs.len() {
            if xs[i] == xs[j] {
                return Err(InterpError::DegenerateNodes);
            }
        }
    }
    Ok(())
}

/// Binary search for the interval containing `x` in a sorted slice.
///
/// Returns index `i` such that `xs[i] <= x < xs[i+1]`, clamped to
/// `[0, xs.len() - 2]` for extrapolation beyond boundaries.
pub(crate) fn find_interval<T: FloatScalar>(xs: &[T], x: T) -> usize {
    debug_assert!(xs.len() >= 2);
    let n = xs.len();
    // Clamp to valid segment range
    if x <= xs[0] {
        return 0;
    }
    if x >= xs[n - 1] {
        return n - 2;
    }
    // Binary search
    let mut lo = 0;
    let mut hi = n - 1;
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if x < xs[mid] {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    lo
}
