//! Direct linear solvers backing the spline and fixed-cubic builders.

use alloc::vec::Vec;

use crate::error::InterpError;
use crate::traits::FloatScalar;

/// Solve a tridiagonal system `A·x = rhs` via the Thomas algorithm in O(n).
///
/// `sub` is the subdiagonal (length n − 1), `diag` the main diagonal
/// (length n), `sup` the superdiagonal (length n − 1). No pivoting; the
/// spline systems this serves are diagonally dominant.
///
/// Returns `InterpError::SingularSystem` if a forward-sweep pivot falls
/// below machine epsilon.
///
/// # Example
///
/// ```
/// use interpolant::linalg::solve_tridiagonal;
///
/// // [2 1 0]       [4]
/// // [1 2 1] · x = [8]   →   x = [1, 2, 3]
/// // [0 1 2]       [8]
/// let x = solve_tridiagonal(&[1.0_f64, 1.0], &[2.0, 2.0, 2.0], &[1.0, 1.0], &[4.0, 8.0, 8.0])
///     .unwrap();
/// assert!((x[0] - 1.0).abs() < 1e-12);
/// assert!((x[1] - 2.0).abs() < 1e-12);
/// assert!((x[2] - 3.0).abs() < 1e-12);
/// ```
pub fn solve_tridiagonal<T: FloatScalar>(
    sub: &[T],
    diag: &[T],
    sup: &[T],
    rhs: &[T],
) -> Result<Vec<T>, InterpError> {
    let n = diag.len();
    assert!(n >= 1, "tridiagonal system must have at least one row");
    assert_eq!(sub.len(), n - 1, "subdiagonal length must be n - 1");
    assert_eq!(sup.len(), n - 1, "superdiagonal length must be n - 1");
    assert_eq!(rhs.len(), n, "rhs length must match the diagonal");

    // Forward sweep: cp holds the modified superdiagonal, dp the modified RHS.
    let mut cp = alloc::vec![T::zero(); n - 1];
    let mut dp = alloc::vec![T::zero(); n];

    let mut denom = diag[0];
    if denom.abs() < T::epsilon() {
        return Err(InterpError::SingularSystem);
    }
    if n > 1 {
        cp[0] = sup[0] / denom;
    }
    dp[0] = rhs[0] / denom;

    for i in 1..n {
        denom = diag[i] - sub[i - 1] * cp[i - 1];
        if denom.abs() < T::epsilon() {
            return Err(InterpError::SingularSystem);
        }
        if i < n - 1 {
            cp[i] = sup[i] / denom;
        }
        dp[i] = (rhs[i] - sub[i - 1] * dp[i - 1]) / denom;
    }

    // Back substitution, reusing dp as the solution vector.
    let mut x = dp;
    for i in (0..n - 1).rev() {
        x[i] = x[i] - cp[i] * x[i + 1];
    }
    Ok(x)
}

/// Solve a small dense system `A·x = b` by LU with partial pivoting.
///
/// `a` is row-major and consumed as scratch. Sized for small `N` (the 4×4
/// Vandermonde solve) where the compiler fully unrolls all loops.
///
/// Returns `InterpError::SingularSystem` if a pivot's magnitude falls
/// below machine epsilon.
pub fn solve_small<T: FloatScalar, const N: usize>(
    mut a: [[T; N]; N],
    b: [T; N],
) -> Result<[T; N], InterpError> {
    let mut perm = [0usize; N];
    for i in 0..N {
        perm[i] = i;
    }

    for col in 0..N {
        // Partial pivoting: find the row with the largest magnitude in this column
        let mut max_row = col;
        let mut max_val = a[col][col].abs();
        for row in (col + 1)..N {
            let val = a[row][col].abs();
            if val > max_val {
                max_val = val;
                max_row = row;
            }
        }

        if max_val < T::epsilon() {
            return Err(InterpError::SingularSystem);
        }

        if max_row != col {
            a.swap(col, max_row);
            perm.swap(col, max_row);
        }

        // Eliminate below the pivot, packing L factors into the lower triangle
        let inv_pivot = T::one() / a[col][col];
        for row in (col + 1)..N {
            let factor = a[row][col] * inv_pivot;
            a[row][col] = factor;
            for j in (col + 1)..N {
                a[row][j] = a[row][j] - factor * a[col][j];
            }
        }
    }

    // Forward substitution: solve Ly = Pb
    let mut x = [T::zero(); N];
    for i in 0..N {
        let mut sum = b[perm[i]];
        for j in 0..i {
            sum = sum - a[i][j] * x[j];
        }
        x[i] = sum;
    }

    // Back substitution: solve Ux = y
    for i in (0..N).rev() {
        let mut sum = x[i];
        for j in (i + 1)..N {
            sum = sum - a[i][j] * x[j];
        }
        x[i] = sum / a[i][i];
    }

    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tridiagonal_3x3() {
        let x = solve_tridiagonal(
            &[1.0_f64, 1.0],
            &[2.0, 2.0, 2.0],
            &[1.0, 1.0],
            &[4.0, 8.0, 8.0],
        )
        .unwrap();
        assert!((x[0] - 1.0).abs() < 1e-12);
        assert!((x[1] - 2.0).abs() < 1e-12);
        assert!((x[2] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn tridiagonal_residual_4x4() {
        let sub = [1.0_f64, 2.0, 3.0];
        let diag = [4.0_f64, 5.0, 6.0, 7.0];
        let sup = [1.0_f64, 1.0, 2.0];
        let rhs = [1.0_f64, 2.0, 3.0, 4.0];
        let x = solve_tridiagonal(&sub, &diag, &sup, &rhs).unwrap();

        // Check each row: sub·x[i-1] + diag·x[i] + sup·x[i+1] == rhs[i]
        for i in 0..4 {
            let mut row_sum = diag[i] * x[i];
            if i > 0 {
                row_sum += sub[i - 1] * x[i - 1];
            }
            if i < 3 {
                row_sum += sup[i] * x[i + 1];
            }
            assert!(
                (row_sum - rhs[i]).abs() < 1e-12,
                "residual[{}] = {}",
                i,
                row_sum - rhs[i]
            );
        }
    }

    #[test]
    fn tridiagonal_single_row() {
        let x = solve_tridiagonal::<f64>(&[], &[4.0], &[], &[8.0]).unwrap();
        assert!((x[0] - 2.0).abs() < 1e-14);
    }

    #[test]
    fn tridiagonal_singular() {
        let err = solve_tridiagonal(&[1.0_f64], &[0.0, 1.0], &[1.0], &[1.0, 1.0]).unwrap_err();
        assert_eq!(err, InterpError::SingularSystem);
    }

    #[test]
    fn small_solve_3x3() {
        // 2x + y - z = 8, -3x - y + 2z = -11, -2x + y + 2z = -3
        let a = [[2.0_f64, 1.0, -1.0], [-3.0, -1.0, 2.0], [-2.0, 1.0, 2.0]];
        let x = solve_small(a, [8.0, -11.0, -3.0]).unwrap();
        assert!((x[0] - 2.0).abs() < 1e-12);
        assert!((x[1] - 3.0).abs() < 1e-12);
        assert!((x[2] - (-1.0)).abs() < 1e-12);
    }

    #[test]
    fn small_solve_vandermonde_4x4() {
        // Rows [1, x, x², x³] at x = 0, 1, 2, 3; cubic through
        // (0,1), (1,2), (2,0), (3,4) is 1 + 5.5x - 6x² + 1.5x³.
        let a = [
            [1.0_f64, 0.0, 0.0, 0.0],
            [1.0, 1.0, 1.0, 1.0],
            [1.0, 2.0, 4.0, 8.0],
            [1.0, 3.0, 9.0, 27.0],
        ];
        let x = solve_small(a, [1.0, 2.0, 0.0, 4.0]).unwrap();
        assert!((x[0] - 1.0).abs() < 1e-12);
        assert!((x[1] - 5.5).abs() < 1e-12);
        assert!((x[2] - (-6.0)).abs() < 1e-12);
        assert!((x[3] - 1.5).abs() < 1e-12);
    }

    #[test]
    fn small_solve_singular() {
        let a = [[1.0_f64, 2.0], [2.0, 4.0]];
        let err = solve_small(a, [1.0, 2.0]).unwrap_err();
        assert_eq!(err, InterpError::SingularSystem);
    }

    #[test]
    fn small_solve_f32() {
        let a = [[3.0_f32, 2.0], [1.0, 4.0]];
        let x = solve_small(a, [7.0, 9.0]).unwrap();
        assert!((x[0] - 1.0).abs() < 1e-5);
        assert!((x[1] - 2.0).abs() < 1e-5);
    }
}
