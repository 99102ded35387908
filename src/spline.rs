use alloc::vec::Vec;

use crate::error::InterpError;
use crate::linalg::solve_tridiagonal;
use crate::traits::{FloatScalar, Interpolant};
use crate::util::{find_interval, validate_min_len, validate_same_len, validate_sorted};

/// Boundary condition for cubic spline construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Boundary<T> {
    /// Zero second derivative at both endpoints: S''(x₀) = S''(x_{n−1}) = 0.
    Natural,
    /// Prescribed first derivatives at the endpoints.
    Clamped {
        /// S'(x₀)
        left: T,
        /// S'(x_{n−1})
        right: T,
    },
}

/// Piecewise-cubic spline interpolant with C² continuity at the knots.
///
/// Each segment stores coefficients `[a, b, c, d]` for
/// `S_i(x) = a + b·(x − xᵢ) + c·(x − xᵢ)² + d·(x − xᵢ)³`,
/// where `c` is half the second derivative at the left knot. The
/// tridiagonal system for the `c` values is solved via the Thomas
/// algorithm in O(n).
///
/// Out-of-range queries evaluate the nearest boundary segment's cubic;
/// treat such results as extrapolation.
///
/// # Example
///
/// ```
/// use interpolant::CubicSpline;
///
/// let s = CubicSpline::natural(vec![0.0_f64, 1.0, 2.0, 3.0, 4.0], vec![0.0, 0.5, 2.0, 1.5, 1.0])
///     .unwrap();
///
/// // Passes through knots exactly; natural ends have zero curvature
/// assert!((s.eval(2.0) - 2.0).abs() < 1e-12);
/// assert!(s.eval_second_derivative(0.0).abs() < 1e-12);
/// assert!(s.eval_second_derivative(4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct CubicSpline<T> {
    xs: Vec<T>,
    coeffs: Vec<[T; 4]>,
}

impl<T: FloatScalar> CubicSpline<T> {
    /// Construct a natural cubic spline (zero endpoint curvature).
    ///
    /// Requires at least 3 strictly increasing knots.
    pub fn natural(xs: Vec<T>, ys: Vec<T>) -> Result<Self, InterpError> {
        Self::with_boundary(xs, ys, Boundary::Natural)
    }

    /// Construct a clamped cubic spline with prescribed endpoint slopes.
    ///
    /// Requires at least 2 strictly increasing knots.
    ///
    /// # Example
    ///
    /// ```
    /// use interpolant::CubicSpline;
    ///
    /// // Two knots with flat clamped ends give the smoothstep cubic
    /// let s = CubicSpline::clamped(vec![0.0_f64, 1.0], vec![0.0, 1.0], 0.0, 0.0).unwrap();
    /// assert!((s.eval(0.5) - 0.5).abs() < 1e-12);
    /// assert!(s.eval_derivative(0.0).1.abs() < 1e-12);
    /// assert!(s.eval_derivative(1.0).1.abs() < 1e-12);
    /// ```
    pub fn clamped(xs: Vec<T>, ys: Vec<T>, left: T, right: T) -> Result<Self, InterpError> {
        Self::with_boundary(xs, ys, Boundary::Clamped { left, right })
    }

    /// Construct a cubic spline with the given boundary condition.
    ///
    /// Returns `InterpError::LengthMismatch` if `xs` and `ys` differ in
    /// length, `InterpError::TooFewPoints` below the boundary condition's
    /// minimum (3 natural, 2 clamped), `InterpError::NotSorted` unless
    /// `xs` is strictly increasing, and `InterpError::SingularSystem` if
    /// the tridiagonal solve hits a vanishing pivot.
    pub fn with_boundary(
        xs: Vec<T>,
        ys: Vec<T>,
        boundary: Boundary<T>,
    ) -> Result<Self, InterpError> {
        validate_same_len(&xs, &ys)?;
        let min = match boundary {
            Boundary::Natural => 3,
            Boundary::Clamped { .. } => 2,
        };
        validate_min_len(&xs, min)?;
        validate_sorted(&xs)?;

        let n = xs.len();
        let two = T::one() + T::one();
        let three = two + T::one();

        // h[i] = x[i+1] - x[i], delta[i] = (y[i+1] - y[i]) / h[i]
        let mut h = alloc::vec![T::zero(); n - 1];
        let mut delta = alloc::vec![T::zero(); n - 1];
        for i in 0..n - 1 {
            h[i] = xs[i + 1] - xs[i];
            delta[i] = (ys[i + 1] - ys[i]) / h[i];
        }

        // Tridiagonal system for c_i = S''(x_i)/2.
        // Interior row i: h_{i−1}·c_{i−1} + 2(h_{i−1}+h_i)·c_i + h_i·c_{i+1} = 3(δ_i − δ_{i−1})
        let mut sub = alloc::vec![T::zero(); n - 1];
        let mut diag = alloc::vec![T::zero(); n];
        let mut sup = alloc::vec![T::zero(); n - 1];
        let mut rhs = alloc::vec![T::zero(); n];

        for i in 1..n - 1 {
            sub[i - 1] = h[i - 1];
            diag[i] = two * (h[i - 1] + h[i]);
            sup[i] = h[i];
            rhs[i] = three * (delta[i] - delta[i - 1]);
        }

        match boundary {
            Boundary::Natural => {
                // c_0 = 0 and c_{n−1} = 0
                diag[0] = T::one();
                sup[0] = T::zero();
                rhs[0] = T::zero();
                diag[n - 1] = T::one();
                sub[n - 2] = T::zero();
                rhs[n - 1] = T::zero();
            }
            Boundary::Clamped { left, right } => {
                // 2h_0·c_0 + h_0·c_1 = 3(δ_0 − left)
                diag[0] = two * h[0];
                sup[0] = h[0];
                rhs[0] = three * (delta[0] - left);
                // h_{n−2}·c_{n−2} + 2h_{n−2}·c_{n−1} = 3(right − δ_{n−2})
                diag[n - 1] = two * h[n - 2];
                sub[n - 2] = h[n - 2];
                rhs[n - 1] = three * (right - delta[n - 2]);
            }
        }

        let c = solve_tridiagonal(&sub, &diag, &sup, &rhs)?;

        let mut coeffs = alloc::vec![[T::zero(); 4]; n - 1];
        for i in 0..n - 1 {
            let a = ys[i];
            let b = delta[i] - h[i] * (two * c[i] + c[i + 1]) / three;
            let d = (c[i + 1] - c[i]) / (three * h[i]);
            coeffs[i] = [a, b, c[i], d];
        }

        Ok(Self { xs, coeffs })
    }

    /// Evaluate the spline at `x`.
    pub fn eval(&self, x: T) -> T {
        let i = find_interval(&self.xs, x);
        let dx = x - self.xs[i];
        let [a, b, c, d] = self.coeffs[i];
        // Horner form: a + dx·(b + dx·(c + dx·d))
        a + dx * (b + dx * (c + dx * d))
    }

    /// Evaluate the spline and its first derivative at `x`.
    pub fn eval_derivative(&self, x: T) -> (T, T) {
        let i = find_interval(&self.xs, x);
        let dx = x - self.xs[i];
        let [a, b, c, d] = self.coeffs[i];
        let two = T::one() + T::one();
        let three = two + T::one();
        let val = a + dx * (b + dx * (c + dx * d));
        let dval = b + dx * (two * c + three * d * dx);
        (val, dval)
    }

    /// Evaluate the spline's second derivative at `x`.
    pub fn eval_second_derivative(&self, x: T) -> T {
        let i = find_interval(&self.xs, x);
        let dx = x - self.xs[i];
        let [_, _, c, d] = self.coeffs[i];
        let two = T::one() + T::one();
        let six = two + two + two;
        two * c + six * d * dx
    }

    /// The knot x-values.
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Per-segment coefficients `[a, b, c, d]`, one entry per knot interval.
    pub fn coeffs(&self) -> &[[T; 4]] {
        &self.coeffs
    }
}

impl<T: FloatScalar> Interpolant<T> for CubicSpline<T> {
    fn eval(&self, x: T) -> T {
        CubicSpline::eval(self, x)
    }

    fn eval_derivative(&self, x: T) -> (T, T) {
        CubicSpline::eval_derivative(self, x)
    }
}
