use alloc::vec::Vec;

use crate::error::InterpError;
use crate::traits::{FloatScalar, Interpolant};
use crate::util::{validate_distinct, validate_min_len, validate_same_len};

/// Hermite interpolating polynomial matching values and first derivatives.
///
/// Built as a divided-difference polynomial over the node list with every
/// node duplicated: the first-order difference inside a duplicated pair is
/// the supplied derivative, higher orders follow the standard recurrence.
/// Degree ≤ 2n − 1 for n sample points.
///
/// # Example
///
/// ```
/// use interpolant::HermitePoly;
///
/// // Two points with slopes taken from x³ reproduce x³ exactly.
/// let h = HermitePoly::new(vec![0.0_f64, 1.0], vec![0.0, 1.0], vec![0.0, 3.0]).unwrap();
/// let (v, d) = h.eval_derivative(0.5);
/// assert!((v - 0.125).abs() < 1e-12);
/// assert!((d - 0.75).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct HermitePoly<T> {
    // Duplicated node list z[2i] = z[2i+1] = xs[i]
    zs: Vec<T>,
    // coeffs[j] = f[z₀, …, z_j]
    coeffs: Vec<T>,
}

impl<T: FloatScalar> HermitePoly<T> {
    /// Construct from sample points and their first derivatives.
    ///
    /// Returns `InterpError::LengthMismatch` if the three slices differ in
    /// length, `InterpError::TooFewPoints` for fewer than 2 points, and
    /// `InterpError::DegenerateNodes` if any two abscissas coincide.
    pub fn new(xs: Vec<T>, ys: Vec<T>, dys: Vec<T>) -> Result<Self, InterpError> {
        validate_same_len(&xs, &ys)?;
        validate_same_len(&xs, &dys)?;
        validate_min_len(&xs, 2)?;
        validate_distinct(&xs)?;

        let n = xs.len();
        let m = 2 * n;
        let mut zs = Vec::with_capacity(m);
        let mut c = Vec::with_capacity(m);
        for i in 0..n {
            zs.push(xs[i]);
            zs.push(xs[i]);
            c.push(ys[i]);
            c.push(ys[i]);
        }

        // In-place difference passes, descending so the entry below is
        // still one order behind. After pass j, c[i] for i < j is final.
        //
        // Order 1: a duplicated pair's difference is the supplied slope.
        for i in (1..m).rev() {
            c[i] = if i % 2 == 1 {
                dys[i / 2]
            } else {
                (c[i] - c[i - 1]) / (zs[i] - zs[i - 1])
            };
        }
        // Orders ≥ 2 always span two distinct nodes, so the divisor is
        // nonzero even with the duplicated list.
        for j in 2..m {
            for i in (j..m).rev() {
                c[i] = (c[i] - c[i - 1]) / (zs[i] - zs[i - j]);
            }
        }

        Ok(Self { zs, coeffs: c })
    }

    /// Newton-form coefficients over the duplicated node list, `f[z₀], f[z₀,z₁], …`.
    pub fn coeffs(&self) -> &[T] {
        &self.coeffs
    }

    /// Evaluate the polynomial at `x` via the running node product.
    pub fn eval(&self, x: T) -> T {
        let mut sum = self.coeffs[0];
        let mut prod = T::one();
        for i in 1..self.coeffs.len() {
            prod = prod * (x - self.zs[i - 1]);
            sum = sum + self.coeffs[i] * prod;
        }
        sum
    }

    /// Evaluate the polynomial and its first derivative at `x`.
    pub fn eval_derivative(&self, x: T) -> (T, T) {
        let mut val = self.coeffs[0];
        let mut dval = T::zero();
        let mut prod = T::one();
        let mut dprod = T::zero();
        for i in 1..self.coeffs.len() {
            let f = x - self.zs[i - 1];
            dprod = dprod * f + prod;
            prod = prod * f;
            val = val + self.coeffs[i] * prod;
            dval = dval + self.coeffs[i] * dprod;
        }
        (val, dval)
    }
}

impl<T: FloatScalar> Interpolant<T> for HermitePoly<T> {
    fn eval(&self, x: T) -> T {
        HermitePoly::eval(self, x)
    }

    fn eval_derivative(&self, x: T) -> (T, T) {
        HermitePoly::eval_derivative(self, x)
    }
}
