use kurbo::Point;

use crate::{
    foundation::error::{CrestError, CrestResult},
    geometry::spline::ControlPoints,
};

/// Serialize one layer as a closed SVG path.
///
/// The path moves to the left corner anchor, lines to the first sample
/// point, follows one cubic segment per consecutive sample pair (control
/// points recombined index-wise from the per-axis solves), lines to the
/// right corner anchor, lines back to the left one, and closes. The top edge
/// is the smooth spline; the bottom edge is the flat canvas baseline.
///
/// `ctrl_x` and `ctrl_y` must be the solved control points for the x and y
/// coordinate sequences of `points`, so their length is `points.len() - 1`.
pub fn serialize_closed_path(
    points: &[Point],
    ctrl_x: &ControlPoints,
    ctrl_y: &ControlPoints,
    left_corner: Point,
    right_corner: Point,
) -> CrestResult<String> {
    let segments = points.len().saturating_sub(1);
    if segments == 0 {
        return Err(CrestError::geometry("path requires at least 2 points"));
    }
    if [&ctrl_x.p1, &ctrl_x.p2, &ctrl_y.p1, &ctrl_y.p2]
        .iter()
        .any(|v| v.len() != segments)
    {
        return Err(CrestError::geometry(
            "control point count must match point count - 1",
        ));
    }

    let mut d = String::new();
    d.push_str(&format!("M {},{} ", left_corner.x, left_corner.y));
    d.push_str(&format!("L {},{} ", points[0].x, points[0].y));

    for i in 0..segments {
        d.push_str(&format!(
            "C {},{} {},{} {},{} ",
            ctrl_x.p1[i],
            ctrl_y.p1[i],
            ctrl_x.p2[i],
            ctrl_y.p2[i],
            points[i + 1].x,
            points[i + 1].y,
        ));
    }

    d.push_str(&format!(
        "L {},{} L {},{} Z",
        right_corner.x, right_corner.y, left_corner.x, left_corner.y,
    ));

    Ok(d)
}

#[cfg(test)]
#[path = "../../tests/unit/render/path.rs"]
mod tests;
