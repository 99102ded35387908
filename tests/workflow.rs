use interpolant::{
    interpolate, predict, select_best, CubicSpline, Extra, InterpError, Method, Model, NewtonPoly,
};

const TOL: f64 = 1e-9;

/// Ten noisy-ish readings over a morning, nodes ascending.
fn readings() -> (Vec<f64>, Vec<f64>) {
    (
        vec![0.0, 0.9, 2.1, 3.0, 3.8, 5.2, 6.0, 7.1, 8.0, 9.0],
        vec![18.2, 18.9, 20.4, 21.7, 22.9, 24.1, 24.6, 24.2, 23.1, 21.4],
    )
}

// ── Selection to prediction ──────────────────────────────────────────

#[test]
fn select_then_predict() {
    let (xs, ys) = readings();
    let sel = select_best(&xs, &ys).unwrap();

    // The report covers every candidate, qualified or not
    assert_eq!(sel.scores.len(), 3);
    assert!(sel.scores.iter().any(|s| s.method == sel.best));

    // Prediction refits on the full sample set, so node queries are exact
    for i in [0, 4, 9] {
        let v = predict(&xs, &ys, xs[i], sel.best).unwrap();
        assert!((v - ys[i]).abs() < 1e-7, "node {i}: {v}");
    }

    // Interior query lands between the surrounding readings' ballpark
    let v = predict(&xs, &ys, 4.5, sel.best).unwrap();
    assert!(v > 20.0 && v < 26.0, "mid-morning estimate: {v}");
}

#[test]
fn selection_report_is_reusable() {
    let (xs, ys) = readings();
    let sel = select_best(&xs, &ys).unwrap();

    // Any qualified method from the report can be refit independently
    for s in sel.scores.iter().filter(|s| s.mean_abs_err.is_some()) {
        let v = predict(&xs, &ys, 2.5, s.method).unwrap();
        assert!(v.is_finite(), "{}: {v}", s.method);
    }
}

// ── Streaming appends ────────────────────────────────────────────────

#[test]
fn streamed_points_match_batch_fit() {
    let (xs, ys) = readings();

    let mut streamed = NewtonPoly::new(xs[..4].to_vec(), ys[..4].to_vec()).unwrap();
    for i in 4..xs.len() {
        streamed.push(xs[i], ys[i]).unwrap();
    }
    let batch = NewtonPoly::new(xs, ys).unwrap();

    assert_eq!(streamed.coeffs(), batch.coeffs());
    assert_eq!(streamed.eval(4.5), batch.eval(4.5));
}

// ── Derivative-aware methods through the model layer ─────────────────

#[test]
fn derivative_data_flows_through_extra() {
    let xs = [0.0_f64, 1.0, 2.0, 3.0];
    let ys = [0.0, 1.0, 8.0, 27.0];
    let dys = [0.0, 3.0, 12.0, 27.0];

    // Without the data the fit is refused, with it both methods
    // reproduce the cubic the samples came from
    let r = Model::fit(Method::Hermite, &xs, &ys, Extra::none());
    assert_eq!(r.unwrap_err(), InterpError::MissingDerivatives);

    let hermite = interpolate(Method::Hermite, &xs, &ys, 1.5, Extra::derivatives(&dys)).unwrap();
    assert!((hermite - 3.375).abs() < TOL);

    let clamped = interpolate(
        Method::SplineClamped,
        &xs,
        &ys,
        1.5,
        Extra::endpoint_slopes(dys[0], dys[3]),
    )
    .unwrap();
    assert!((clamped - 3.375).abs() < TOL);
}

// ── Spline curvature reporting ───────────────────────────────────────

#[test]
fn spline_curvature_profile() {
    let (xs, ys) = readings();
    let s = CubicSpline::natural(xs.clone(), ys).unwrap();

    // Natural ends are flat in curvature; the interior peak near x ≈ 6
    // shows up as negative curvature there
    assert!(s.eval_second_derivative(xs[0]).abs() < TOL);
    assert!(s.eval_second_derivative(xs[9]).abs() < TOL);
    assert!(s.eval_second_derivative(6.0) < 0.0);
}
