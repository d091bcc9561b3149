use crate::foundation::error::{CrestError, CrestResult};

#[derive(Clone, Debug, PartialEq)]
/// The two Bezier control sequences of a solved cubic spline.
///
/// For `n + 1` input knots, `p1` and `p2` each hold `n` scalars; segment `i`
/// runs from knot `i` to knot `i + 1` with control scalars `p1[i]`, `p2[i]`.
pub struct ControlPoints {
    /// First control scalar per segment.
    pub p1: Vec<f64>,
    /// Second control scalar per segment.
    pub p2: Vec<f64>,
}

/// Solve for the control points of a cubic spline through `knots`.
///
/// The spline passes through every knot with matched slope and curvature at
/// interior knots; the two boundary segments use a relaxed end condition
/// tuned for the overall wave shape. The solve is a tridiagonal linear
/// system over `p1` (Thomas algorithm: forward elimination, then back
/// substitution), with `p2` derived algebraically from `p1`.
///
/// Run once per coordinate axis; the x and y results recombine index-wise
/// when building curve segments.
///
/// At least two knots are required.
pub fn compute_control_points(knots: &[f64]) -> CrestResult<ControlPoints> {
    if knots.len() < 2 {
        return Err(CrestError::geometry("spline requires at least 2 knots"));
    }
    let n = knots.len() - 1;

    let mut a = vec![0.0; n];
    let mut b = vec![0.0; n];
    let mut c = vec![0.0; n];
    let mut r = vec![0.0; n];

    a[0] = 0.0;
    b[0] = 2.0;
    c[0] = 1.0;
    r[0] = knots[0] + 2.0 * knots[1];

    for i in 1..n.saturating_sub(1) {
        a[i] = 1.0;
        b[i] = 4.0;
        c[i] = 1.0;
        r[i] = 4.0 * knots[i] + 2.0 * knots[i + 1];
    }

    // Assigned last: for n == 1 this row replaces row 0, keeping b[0] == 7
    // so the single-segment solve never divides by zero.
    a[n - 1] = 2.0;
    b[n - 1] = 7.0;
    c[n - 1] = 0.0;
    r[n - 1] = 8.0 * knots[n - 1] + knots[n];

    for i in 1..n {
        let m = a[i] / b[i - 1];
        b[i] -= m * c[i - 1];
        r[i] -= m * r[i - 1];
    }

    let mut p1 = vec![0.0; n];
    p1[n - 1] = r[n - 1] / b[n - 1];
    for i in (0..n.saturating_sub(1)).rev() {
        p1[i] = (r[i] - c[i] * p1[i + 1]) / b[i];
    }

    let mut p2 = vec![0.0; n];
    for i in 0..n - 1 {
        p2[i] = 2.0 * knots[i + 1] - p1[i + 1];
    }
    p2[n - 1] = 0.5 * (knots[n] + p1[n - 1]);

    Ok(ControlPoints { p1, p2 })
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/spline.rs"]
mod tests;
