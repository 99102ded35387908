//! # interpolant
//!
//! Pure-Rust polynomial and cubic-spline interpolation, no-std compatible
//! (heap required). Fits Lagrange, Newton divided-difference, Hermite,
//! cubic-spline, and exact-cubic models over in-memory samples, and picks
//! the best method for a data set by leave-one-out cross-validation.
//!
//! ## Quick start
//!
//! ```
//! use interpolant::{predict, select_best};
//!
//! // Hourly sensor readings
//! let xs = [0.0_f64, 1.0, 2.0, 3.0, 4.0];
//! let ys = [19.9, 18.4, 17.2, 18.0, 16.3];
//!
//! let sel = select_best(&xs, &ys).unwrap();
//! let v = predict(&xs, &ys, 2.5, sel.best).unwrap();
//! assert!((v - 17.5).abs() < 1.0);
//! ```
//!
//! ## Methods
//!
//! | Method | Type | Notes |
//! |---|---|---|
//! | Lagrange | [`LagrangePoly`] | Classical basis form; standard-form [`coefficients`](LagrangePoly::coefficients) |
//! | Newton | [`NewtonPoly`] | O(n) evaluation; O(n) incremental [`push`](NewtonPoly::push) |
//! | Hermite | [`HermitePoly`] | Matches values and first derivatives, degree ≤ 2n − 1 |
//! | Cubic spline | [`CubicSpline`] | Natural or clamped [`Boundary`], C² at the knots |
//! | Fixed cubic | [`FixedCubic`] | The unique cubic through exactly 4 points |
//!
//! All of them implement [`Interpolant`]; [`Model`] wraps any of them
//! behind the [`Method`] enum for runtime dispatch, and
//! [`select_best`] / [`predict`] drive the cross-validated workflow.
//! [`linalg`] exposes the Thomas and small-LU solvers the builders use.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Hardware float via system libm |
//! | `libm`  | no      | Pure-Rust software float fallback for no-std builds |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod cubic;
mod error;
mod hermite;
mod lagrange;
pub mod linalg;
mod model;
mod newton;
mod select;
mod spline;
pub mod traits;
mod util;


pub use cubic::FixedCubic;
pub use error::InterpError;
pub use hermite::HermitePoly;
pub use lagrange::LagrangePoly;
pub use model::{interpolate, interpolate_many, Extra, Method, Model};
pub use newton::{divided_differences, NewtonPoly};
pub use select::{evaluate_all, predict, select_best, MethodScore, Selection};
pub use spline::{Boundary, CubicSpline};
pub use traits::{FloatScalar, Interpolant, Scalar};
