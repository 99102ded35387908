use alloc::vec::Vec;

use crate::error::InterpError;
use crate::traits::{FloatScalar, Interpolant};
use crate::util::{validate_distinct, validate_min_len, validate_same_len};

/// Full divided-difference table for the samples.
///
/// Row `i` has length `n − i`; entry `[i][j]` is the j-th order difference
/// `f[xᵢ, …, x_{i+j}]`. Row 0 holds the Newton-form coefficients
/// `f[x₀], f[x₀,x₁], …, f[x₀,…,x_{n−1}]`.
///
/// # Example
///
/// ```
/// use interpolant::divided_differences;
///
/// // Collinear points: all first-order differences are the slope,
/// // higher orders vanish.
/// let t = divided_differences(&[1.0_f64, 2.0, 4.0], &[0.0, 3.0, 9.0]).unwrap();
/// assert!((t[0][1] - 3.0).abs() < 1e-14);
/// assert!((t[1][1] - 3.0).abs() < 1e-14);
/// assert!(t[0][2].abs() < 1e-14);
/// ```
pub fn divided_differences<T: FloatScalar>(
    xs: &[T],
    ys: &[T],
) -> Result<Vec<Vec<T>>, InterpError> {
    validate_same_len(xs, ys)?;
    validate_min_len(xs, 2)?;
    validate_distinct(xs)?;

    let n = xs.len();
    let mut table: Vec<Vec<T>> = Vec::with_capacity(n);
    for i in 0..n {
        let mut row = Vec::with_capacity(n - i);
        row.push(ys[i]);
        table.push(row);
    }
    for j in 1..n {
        for i in 0..n - j {
            let d = (table[i + 1][j - 1] - table[i][j - 1]) / (xs[i + j] - xs[i]);
            table[i].push(d);
        }
    }
    Ok(table)
}

/// Newton divided-difference interpolating polynomial.
///
/// Algebraically identical to [`LagrangePoly`](crate::LagrangePoly) over
/// the same samples, but evaluation is O(n) once built and [`push`]
/// appends a sample point in O(n) without touching the existing
/// coefficients. Alongside the coefficients it keeps the trailing
/// anti-diagonal of the difference table, which is exactly the state the
/// append recurrence needs.
///
/// [`push`]: NewtonPoly::push
///
/// # Example
///
/// ```
/// use interpolant::NewtonPoly;
///
/// let mut p = NewtonPoly::new(vec![0.0_f64, 1.0, 2.0, 3.0], vec![1.0, 2.0, 0.0, 4.0]).unwrap();
/// assert!((p.eval(1.5) - 0.8125).abs() < 1e-12);
///
/// // The samples lie on 1 + 5.5x - 6x² + 1.5x³, so a fifth point from the
/// // same cubic adds a vanishing fourth-order coefficient.
/// p.push(4.0, 23.0).unwrap();
/// assert!(p.coeffs()[4].abs() < 1e-12);
/// assert!((p.eval(1.5) - 0.8125).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonPoly<T> {
    xs: Vec<T>,
    // coeffs[k] = f[x₀, …, x_k], the difference table's top row
    coeffs: Vec<T>,
    // tail[k] = f[x_{n−1−k}, …, x_{n−1}], the table's trailing anti-diagonal
    tail: Vec<T>,
}

impl<T: FloatScalar> NewtonPoly<T> {
    /// Construct from sample points by repeated [`push`](NewtonPoly::push).
    ///
    /// Returns `InterpError::LengthMismatch` if `xs` and `ys` differ in
    /// length, `InterpError::TooFewPoints` for fewer than 2 points, and
    /// `InterpError::DegenerateNodes` if any two abscissas coincide.
    pub fn new(xs: Vec<T>, ys: Vec<T>) -> Result<Self, InterpError> {
        validate_same_len(&xs, &ys)?;
        validate_min_len(&xs, 2)?;
        let mut poly = Self {
            xs: Vec::with_capacity(xs.len()),
            coeffs: Vec::with_capacity(xs.len()),
            tail: Vec::new(),
        };
        for (&x, &y) in xs.iter().zip(ys.iter()) {
            poly.push(x, y)?;
        }
        Ok(poly)
    }

    /// Append one sample point in O(n).
    ///
    /// Extends the trailing anti-diagonal by the standard recurrence and
    /// pushes its new highest-order entry onto the coefficients; existing
    /// coefficients are untouched, so the result is identical to a full
    /// rebuild over all points.
    ///
    /// Returns `InterpError::DegenerateNodes` if `x` equals an existing
    /// node; the polynomial is unchanged on error.
    pub fn push(&mut self, x: T, y: T) -> Result<(), InterpError> {
        for &xi in &self.xs {
            if xi == x {
                return Err(InterpError::DegenerateNodes);
            }
        }
        let n = self.xs.len();
        let mut new_tail = Vec::with_capacity(n + 1);
        new_tail.push(y);
        for k in 1..=n {
            // f[x_{n−k}, …, x_n] from the two differences one order down
            let d = (new_tail[k - 1] - self.tail[k - 1]) / (x - self.xs[n - k]);
            new_tail.push(d);
        }
        self.coeffs.push(new_tail[n]);
        self.tail = new_tail;
        self.xs.push(x);
        Ok(())
    }

    /// Newton-form coefficients `f[x₀], f[x₀,x₁], …`, one per sample point.
    pub fn coeffs(&self) -> &[T] {
        &self.coeffs
    }

    /// The node x-values, in insertion order.
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Evaluate the polynomial at `x` via the running node product.
    pub fn eval(&self, x: T) -> T {
        let mut sum = self.coeffs[0];
        let mut prod = T::one();
        for i in 1..self.coeffs.len() {
            prod = prod * (x - self.xs[i - 1]);
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
            let f = x - self.xs[i - 1];
            // Product rule on the running product
            dprod = dprod * f + prod;
            prod = prod * f;
            val = val + self.coeffs[i] * prod;
            dval = dval + self.coeffs[i] * dprod;
        }
        (val, dval)
    }
}

impl<T: FloatScalar> Interpolant<T> for NewtonPoly<T> {
    fn eval(&self, x: T) -> T {
        NewtonPoly::eval(self, x)
    }

    fn eval_derivative(&self, x: T) -> (T, T) {
        NewtonPoly::eval_derivative(self, x)
    }
}
