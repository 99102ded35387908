use alloc::vec::Vec;

use crate::error::InterpError;
use crate::traits::{FloatScalar, Interpolant};
use crate::util::{validate_distinct, validate_min_len, validate_same_len};

/// Lagrange interpolating polynomial in classical basis form.
///
/// Stores the sample points as-is and evaluates
/// `P(x) = Σ yᵢ·Lᵢ(x)` with `Lᵢ(x) = Π_{j≠i} (x − xⱼ)/(xᵢ − xⱼ)`,
/// O(n²) per query. Nodes may be in any order but must be pairwise
/// distinct. Adding a point means rebuilding; see
/// [`NewtonPoly`](crate::NewtonPoly) for the incremental form.
///
/// # Example
///
/// ```
/// use interpolant::LagrangePoly;
///
/// let p = LagrangePoly::new(vec![0.0_f64, 1.0, 2.0, 3.0], vec![1.0, 2.0, 0.0, 4.0]).unwrap();
/// assert!((p.eval(2.0) - 0.0).abs() < 1e-12);
/// assert!((p.eval(1.5) - 0.8125).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LagrangePoly<T> {
    xs: Vec<T>,
    ys: Vec<T>,
}

impl<T: FloatScalar> LagrangePoly<T> {
    /// Construct from sample points.
    ///
    /// Returns `InterpError::LengthMismatch` if `xs` and `ys` differ in
    /// length, `InterpError::TooFewPoints` for fewer than 2 points, and
    /// `InterpError::DegenerateNodes` if any two abscissas coincide.
    pub fn new(xs: Vec<T>, ys: Vec<T>) -> Result<Self, InterpError> {
        validate_same_len(&xs, &ys)?;
        validate_min_len(&xs, 2)?;
        validate_distinct(&xs)?;
        Ok(Self { xs, ys })
    }

    /// The i-th basis polynomial `Lᵢ(x) = Π_{j≠i} (x − xⱼ)/(xᵢ − xⱼ)`.
    ///
    /// `Lᵢ(xᵢ) = 1` and `Lᵢ(xⱼ) = 0` for j ≠ i.
    pub fn basis(&self, i: usize, x: T) -> T {
        let mut prod = T::one();
        for j in 0..self.xs.len() {
            if j != i {
                prod = prod * (x - self.xs[j]) / (self.xs[i] - self.xs[j]);
            }
        }
        prod
    }

    /// Evaluate the polynomial at `x`.
    pub fn eval(&self, x: T) -> T {
        let mut sum = T::zero();
        for i in 0..self.xs.len() {
            sum = sum + self.ys[i] * self.basis(i, x);
        }
        sum
    }

    /// Evaluate the polynomial and its first derivative at `x`.
    ///
    /// Accumulates each basis product together with its derivative, so no
    /// factor is ever divided back out and node abscissas are safe inputs.
    pub fn eval_derivative(&self, x: T) -> (T, T) {
        let n = self.xs.len();
        let mut val = T::zero();
        let mut dval = T::zero();
        for i in 0..n {
            let mut denom = T::one();
            let mut p = T::one();
            let mut dp = T::zero();
            for j in 0..n {
                if j != i {
                    denom = denom * (self.xs[i] - self.xs[j]);
                    // Product rule, one factor at a time
                    dp = dp * (x - self.xs[j]) + p;
                    p = p * (x - self.xs[j]);
                }
            }
            val = val + self.ys[i] * p / denom;
            dval = dval + self.ys[i] * dp / denom;
        }
        (val, dval)
    }

    /// Standard-form coefficients `[a₀, a₁, …, a_{n−1}]`, lowest degree
    /// first, so `P(x) = a₀ + a₁x + … + a_{n−1}x^{n−1}`.
    ///
    /// Expands each scaled basis product by convolution. Intended for
    /// displaying the polynomial; for large n the expanded form is less
    /// stable than evaluating the basis sum directly.
    ///
    /// # Example
    ///
    /// ```
    /// use interpolant::LagrangePoly;
    ///
    /// let p = LagrangePoly::new(vec![0.0_f64, 1.0, 2.0, 3.0], vec![1.0, 2.0, 0.0, 4.0]).unwrap();
    /// let a = p.coefficients();
    /// // 1 + 5.5x - 6x² + 1.5x³
    /// assert!((a[0] - 1.0).abs() < 1e-12);
    /// assert!((a[1] - 5.5).abs() < 1e-12);
    /// assert!((a[2] - (-6.0)).abs() < 1e-12);
    /// assert!((a[3] - 1.5).abs() < 1e-12);
    /// ```
    pub fn coefficients(&self) -> Vec<T> {
        let n = self.xs.len();
        let mut coeffs = alloc::vec![T::zero(); n];
        for i in 0..n {
            // Expand Π_{j≠i} (x − xⱼ) in place, lowest degree first
            let mut poly = alloc::vec![T::zero(); n];
            poly[0] = T::one();
            let mut deg = 0;
            let mut denom = T::one();
            for j in 0..n {
                if j != i {
                    denom = denom * (self.xs[i] - self.xs[j]);
                    deg += 1;
                    for k in (1..=deg).rev() {
                        poly[k] = poly[k - 1] - self.xs[j] * poly[k];
                    }
                    poly[0] = -(self.xs[j] * poly[0]);
                }
            }
            let scale = self.ys[i] / denom;
            for k in 0..n {
                coeffs[k] = coeffs[k] + scale * poly[k];
            }
        }
        coeffs
    }
}

impl<T: FloatScalar> Interpolant<T> for LagrangePoly<T> {
    fn eval(&self, x: T) -> T {
        LagrangePoly::eval(self, x)
    }

    fn eval_derivative(&self, x: T) -> (T, T) {
        LagrangePoly::eval_derivative(self, x)
    }
}
