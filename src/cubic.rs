use crate::error::InterpError;
use crate::linalg::solve_small;
use crate::traits::{FloatScalar, Interpolant};
use crate::util::validate_distinct;

/// The unique cubic through exactly four points, in standard form.
///
/// Solves the 4×4 Vandermonde system `[1, x, x², x³]·a = y` directly and
/// stores `a₀ + a₁x + a₂x² + a₃x³`. Nodes may be in any order but must be
/// pairwise distinct. The polynomial is defined on all of ℝ; accuracy
/// degrades away from the node range.
///
/// # Example
///
/// ```
/// use interpolant::FixedCubic;
///
/// let p = FixedCubic::new(&[0.0_f64, 1.0, 2.0, 3.0], &[1.0, 2.0, 0.0, 4.0]).unwrap();
/// let [a0, a1, a2, a3] = p.coefficients();
/// assert!((a0 - 1.0).abs() < 1e-12);
/// assert!((a1 - 5.5).abs() < 1e-12);
/// assert!((a2 - (-6.0)).abs() < 1e-12);
/// assert!((a3 - 1.5).abs() < 1e-12);
/// assert!((p.eval(1.5) - 0.8125).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedCubic<T> {
    coeffs: [T; 4],
}

impl<T: FloatScalar> FixedCubic<T> {
    /// Fit the cubic through four sample points.
    ///
    /// Returns `InterpError::LengthMismatch` if `xs` and `ys` differ in
    /// length, `InterpError::WrongPointCount` unless both hold exactly 4
    /// points, `InterpError::DegenerateNodes` if any two abscissas
    /// coincide, and `InterpError::SingularSystem` if the Vandermonde
    /// solve hits a vanishing pivot.
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpError> {
        if xs.len() != ys.len() {
            return Err(InterpError::LengthMismatch);
        }
        if xs.len() != 4 {
            return Err(InterpError::WrongPointCount);
        }
        validate_distinct(xs)?;

        let mut a = [[T::zero(); 4]; 4];
        let mut b = [T::zero(); 4];
        for i in 0..4 {
            let x = xs[i];
            a[i] = [T::one(), x, x * x, x * x * x];
            b[i] = ys[i];
        }
        let coeffs = solve_small(a, b)?;
        Ok(Self { coeffs })
    }

    /// Standard-form coefficients `[a₀, a₁, a₂, a₃]`, lowest degree first.
    pub fn coefficients(&self) -> [T; 4] {
        self.coeffs
    }

    /// Evaluate the cubic at `x`.
    pub fn eval(&self, x: T) -> T {
        let [a0, a1, a2, a3] = self.coeffs;
        a0 + x * (a1 + x * (a2 + x * a3))
    }

    /// Evaluate the cubic and its first derivative at `x`.
    pub fn eval_derivative(&self, x: T) -> (T, T) {
        let [a0, a1, a2, a3] = self.coeffs;
        let two = T::one() + T::one();
        let three = two + T::one();
        let val = a0 + x * (a1 + x * (a2 + x * a3));
        let dval = a1 + x * (two * a2 + three * a3 * x);
        (val, dval)
    }

    /// Evaluate the cubic's second derivative at `x`.
    pub fn eval_second_derivative(&self, x: T) -> T {
        let [_, _, a2, a3] = self.coeffs;
        let two = T::one() + T::one();
        let six = two + two + two;
        two * a2 + six * a3 * x
    }
}

impl<T: FloatScalar> Interpolant<T> for FixedCubic<T> {
    fn eval(&self, x: T) -> T {
        FixedCubic::eval(self, x)
    }

    fn eval_derivative(&self, x: T) -> (T, T) {
        FixedCubic::eval_derivative(self, x)
    }
}
