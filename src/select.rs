use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::error::InterpError;
use crate::model::{interpolate, Extra, Method, Model};
use crate::traits::FloatScalar;
use crate::util::{validate_min_len, validate_same_len, validate_sorted};

/// Candidate methods for [`select_best`], in tie-break priority order.
const CANDIDATES: [Method; 3] = [Method::Lagrange, Method::Newton, Method::SplineNatural];

/// One candidate's cross-validation score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MethodScore<T> {
    pub method: Method,
    /// Mean absolute hold-out error, or `None` if the method was
    /// disqualified (some fold failed to fit, or the score was not finite).
    pub mean_abs_err: Option<T>,
}

/// Outcome of [`select_best`]: the winning method plus every candidate's
/// score, for reporting alongside the choice.
#[derive(Debug, Clone)]
pub struct Selection<T> {
    pub best: Method,
    pub scores: Vec<MethodScore<T>>,
}

/// Pick the interpolation method that best fits the samples by
/// leave-one-out cross-validation.
///
/// Each point is held out once; each candidate is refit on the remaining
/// points and scored by the mean absolute error of its hold-out
/// predictions. The smallest score wins, with ties going to the earlier
/// candidate (Lagrange, then Newton, then natural spline). A candidate
/// that fails on any fold is disqualified rather than aborting the
/// selection; the natural spline is therefore disqualified below 4 points
/// (a fold would leave it fewer than 3).
///
/// Fully deterministic: no randomness, so repeated calls on the same
/// samples return the same selection.
///
/// Returns `InterpError::NotSorted` unless `xs` is strictly increasing,
/// `InterpError::TooFewPoints` below 3 points, and
/// `InterpError::AllMethodsFailed` if no candidate survives.
///
/// # Example
///
/// ```
/// use interpolant::select_best;
///
/// // Collinear samples: every candidate reproduces the line almost
/// // exactly, so all three score near zero.
/// let xs = [0.0_f64, 1.0, 2.0, 3.0, 4.0];
/// let ys = [1.0, 3.0, 5.0, 7.0, 9.0];
/// let sel = select_best(&xs, &ys).unwrap();
/// assert_eq!(sel.scores.len(), 3);
/// assert!(sel.scores.iter().all(|s| s.mean_abs_err.unwrap() < 1e-9));
/// ```
pub fn select_best<T: FloatScalar>(xs: &[T], ys: &[T]) -> Result<Selection<T>, InterpError> {
    validate_same_len(xs, ys)?;
    validate_min_len(xs, 3)?;
    validate_sorted(xs)?;

    let n = xs.len();
    let mut scores = Vec::with_capacity(CANDIDATES.len());

    for &method in CANDIDATES.iter() {
        let mut total = T::zero();
        let mut count = T::zero();
        let mut ok = true;

        for hold in 0..n {
            let mut tx = Vec::with_capacity(n - 1);
            let mut ty = Vec::with_capacity(n - 1);
            for i in 0..n {
                if i != hold {
                    tx.push(xs[i]);
                    ty.push(ys[i]);
                }
            }
            match Model::fit(method, &tx, &ty, Extra::none()) {
                Ok(m) => {
                    total = total + (ys[hold] - m.eval(xs[hold])).abs();
                    count = count + T::one();
                }
                Err(_) => {
                    ok = false;
                    break;
                }
            }
        }

        let mean_abs_err = if ok {
            let mean = total / count;
            if mean.is_finite() {
                Some(mean)
            } else {
                None
            }
        } else {
            None
        };
        scores.push(MethodScore { method, mean_abs_err });
    }

    // min_by keeps the first of equal elements, so candidate order is the
    // tie-break priority
    let best = scores
        .iter()
        .filter_map(|s| s.mean_abs_err.map(|e| (s.method, e)))
        .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(Ordering::Equal))
        .map(|(method, _)| method);

    match best {
        Some(best) => Ok(Selection { best, scores }),
        None => Err(InterpError::AllMethodsFailed),
    }
}

/// Refit `method` on the full sample set and evaluate at `x`.
///
/// The usual follow-up to [`select_best`]: selection scores come from
/// hold-out fits, predictions from the full fit. `x` may lie outside the
/// node range; such results are extrapolation and weaken with distance.
///
/// # Example
///
/// ```
/// use interpolant::{predict, select_best};
///
/// let xs = [0.0_f64, 1.0, 2.0, 3.0, 4.0];
/// let ys = [1.0, 3.0, 5.0, 7.0, 9.0];
/// let sel = select_best(&xs, &ys).unwrap();
/// let v = predict(&xs, &ys, 2.5, sel.best).unwrap();
/// assert!((v - 6.0).abs() < 1e-9);
/// ```
pub fn predict<T: FloatScalar>(xs: &[T], ys: &[T], x: T, method: Method) -> Result<T, InterpError> {
    interpolate(method, xs, ys, x, Extra::none())
}

/// Fit every selector candidate on the full sample set and evaluate each
/// at `x`, pairing methods with their values for side-by-side comparison.
/// Candidates that fail to fit are skipped.
pub fn evaluate_all<T: FloatScalar>(xs: &[T], ys: &[T], x: T) -> Vec<(Method, T)> {
    CANDIDATES
        .iter()
        .filter_map(|&method| {
            Model::fit(method, xs, ys, Extra::none())
                .ok()
                .map(|m| (method, m.eval(x)))
        })
        .collect()
}
