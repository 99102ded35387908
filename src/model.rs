use alloc::vec::Vec;

use crate::cubic::FixedCubic;
use crate::error::InterpError;
use crate::hermite::HermitePoly;
use crate::lagrange::LagrangePoly;
use crate::newton::NewtonPoly;
use crate::spline::CubicSpline;
use crate::traits::{FloatScalar, Interpolant};

/// The interpolation methods this crate implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Classical-basis Lagrange polynomial.
    Lagrange,
    /// Newton divided-difference polynomial.
    Newton,
    /// Hermite polynomial (needs [`Extra::derivatives`]).
    Hermite,
    /// Natural cubic spline.
    SplineNatural,
    /// Clamped cubic spline (needs [`Extra::endpoint_slopes`]).
    SplineClamped,
    /// Exact cubic through four points.
    FixedCubic,
}

impl Method {
    /// Human-readable method name.
    pub fn name(&self) -> &'static str {
        match self {
            Method::Lagrange => "lagrange",
            Method::Newton => "newton",
            Method::Hermite => "hermite",
            Method::SplineNatural => "natural spline",
            Method::SplineClamped => "clamped spline",
            Method::FixedCubic => "fixed cubic",
        }
    }
}

impl core::fmt::Display for Method {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Optional per-method data passed to [`Model::fit`].
///
/// Methods that consume nothing extra ignore it; methods that require
/// their field return `InterpError::MissingDerivatives` when it is absent.
#[derive(Debug, Clone, Copy)]
pub struct Extra<'a, T> {
    /// First derivatives at every node, for [`Method::Hermite`].
    pub dys: Option<&'a [T]>,
    /// Endpoint slopes `(left, right)`, for [`Method::SplineClamped`].
    pub clamped: Option<(T, T)>,
}

impl<'a, T> Extra<'a, T> {
    /// No extra data.
    pub fn none() -> Self {
        Self { dys: None, clamped: None }
    }

    /// Per-node first derivatives for Hermite fitting.
    pub fn derivatives(dys: &'a [T]) -> Self {
        Self { dys: Some(dys), clamped: None }
    }

    /// Endpoint slopes for clamped-spline fitting.
    pub fn endpoint_slopes(left: T, right: T) -> Self {
        Self { dys: None, clamped: Some((left, right)) }
    }
}

impl<'a, T> Default for Extra<'a, T> {
    fn default() -> Self {
        Self::none()
    }
}

/// A fitted interpolant of any method, for a consistent API across all
/// methods.
///
/// # Example
///
/// ```
/// use interpolant::{Extra, Method, Model};
///
/// let xs = [0.0_f64, 1.0, 2.0, 3.0];
/// let ys = [1.0, 2.0, 0.0, 4.0];
/// let m = Model::fit(Method::Newton, &xs, &ys, Extra::none()).unwrap();
/// assert!((m.eval(1.5) - 0.8125).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub enum Model<T> {
    Lagrange(LagrangePoly<T>),
    Newton(NewtonPoly<T>),
    Hermite(HermitePoly<T>),
    SplineNatural(CubicSpline<T>),
    SplineClamped(CubicSpline<T>),
    FixedCubic(FixedCubic<T>),
}

impl<T: FloatScalar> Model<T> {
    /// Fit `method` to the sample points.
    ///
    /// Copies the samples into the fitted model; the slices are only
    /// borrowed for the call. Errors are the underlying constructor's,
    /// plus `InterpError::MissingDerivatives` when `extra` lacks data the
    /// method requires.
    pub fn fit(
        method: Method,
        xs: &[T],
        ys: &[T],
        extra: Extra<'_, T>,
    ) -> Result<Self, InterpError> {
        match method {
            Method::Lagrange => Ok(Model::Lagrange(LagrangePoly::new(xs.to_vec(), ys.to_vec())?)),
            Method::Newton => Ok(Model::Newton(NewtonPoly::new(xs.to_vec(), ys.to_vec())?)),
            Method::Hermite => {
                let dys = extra.dys.ok_or(InterpError::MissingDerivatives)?;
                Ok(Model::Hermite(HermitePoly::new(
                    xs.to_vec(),
                    ys.to_vec(),
                    dys.to_vec(),
                )?))
            }
            Method::SplineNatural => Ok(Model::SplineNatural(CubicSpline::natural(
                xs.to_vec(),
                ys.to_vec(),
            )?)),
            Method::SplineClamped => {
                let (left, right) = extra.clamped.ok_or(InterpError::MissingDerivatives)?;
                Ok(Model::SplineClamped(CubicSpline::clamped(
                    xs.to_vec(),
                    ys.to_vec(),
                    left,
                    right,
                )?))
            }
            Method::FixedCubic => Ok(Model::FixedCubic(FixedCubic::new(xs, ys)?)),
        }
    }

    /// Which method this model was fitted with.
    pub fn method(&self) -> Method {
        match self {
            Model::Lagrange(_) => Method::Lagrange,
            Model::Newton(_) => Method::Newton,
            Model::Hermite(_) => Method::Hermite,
            Model::SplineNatural(_) => Method::SplineNatural,
            Model::SplineClamped(_) => Method::SplineClamped,
            Model::FixedCubic(_) => Method::FixedCubic,
        }
    }

    /// Evaluate the fitted model at `x`.
    pub fn eval(&self, x: T) -> T {
        match self {
            Model::Lagrange(p) => p.eval(x),
            Model::Newton(p) => p.eval(x),
            Model::Hermite(p) => p.eval(x),
            Model::SplineNatural(s) | Model::SplineClamped(s) => s.eval(x),
            Model::FixedCubic(p) => p.eval(x),
        }
    }

    /// Evaluate the fitted model and its first derivative at `x`.
    pub fn eval_derivative(&self, x: T) -> (T, T) {
        match self {
            Model::Lagrange(p) => p.eval_derivative(x),
            Model::Newton(p) => p.eval_derivative(x),
            Model::Hermite(p) => p.eval_derivative(x),
            Model::SplineNatural(s) | Model::SplineClamped(s) => s.eval_derivative(x),
            Model::FixedCubic(p) => p.eval_derivative(x),
        }
    }
}

impl<T: FloatScalar> Interpolant<T> for Model<T> {
    fn eval(&self, x: T) -> T {
        Model::eval(self, x)
    }

    fn eval_derivative(&self, x: T) -> (T, T) {
        Model::eval_derivative(self, x)
    }
}

/// Fit `method` and evaluate at a single query point.
///
/// # Example
///
/// ```
/// use interpolant::{interpolate, Extra, Method};
///
/// let xs = [0.0_f64, 1.0, 2.0, 3.0];
/// let ys = [1.0, 2.0, 0.0, 4.0];
/// let v = interpolate(Method::Lagrange, &xs, &ys, 1.5, Extra::none()).unwrap();
/// assert!((v - 0.8125).abs() < 1e-12);
/// ```
pub fn interpolate<T: FloatScalar>(
    method: Method,
    xs: &[T],
    ys: &[T],
    x: T,
    extra: Extra<'_, T>,
) -> Result<T, InterpError> {
    Ok(Model::fit(method, xs, ys, extra)?.eval(x))
}

/// Fit `method` once and evaluate at each query point.
pub fn interpolate_many<T: FloatScalar>(
    method: Method,
    xs: &[T],
    ys: &[T],
    queries: &[T],
    extra: Extra<'_, T>,
) -> Result<Vec<T>, InterpError> {
    Ok(Model::fit(method, xs, ys, extra)?.eval_many(queries))
}
