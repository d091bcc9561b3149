#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// One color stop of a linear gradient.
pub struct GradientStop {
    /// Stop offset as a percentage of the gradient axis.
    pub offset_pct: f64,
    /// Stop color, passed through verbatim.
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// A shared linear gradient with endpoints on the centered 100% square.
pub struct LinearGradient {
    /// Start point x, integer percent.
    pub x1_pct: i64,
    /// Start point y, integer percent.
    pub y1_pct: i64,
    /// End point x, integer percent.
    pub x2_pct: i64,
    /// End point y, integer percent.
    pub y2_pct: i64,
    /// Ordered color stops.
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    /// Build a gradient whose axis points along `angle_deg`.
    ///
    /// The start point is the angle projected from the center onto the 100%
    /// square, the end point its antipode, both rounded to whole percents.
    pub fn from_angle(angle_deg: f64, stops: Vec<GradientStop>) -> Self {
        let angle = angle_deg.to_radians();
        let project = |a: f64| -> (i64, i64) {
            (
                (50.0 + a.sin() * 50.0).round() as i64,
                (50.0 + a.cos() * 50.0).round() as i64,
            )
        };
        let (x1_pct, y1_pct) = project(angle);
        let (x2_pct, y2_pct) = project(angle + std::f64::consts::PI);
        Self {
            x1_pct,
            y1_pct,
            x2_pct,
            y2_pct,
            stops,
        }
    }
}

/// Distribute one stop per color, evenly spaced across `[range_from, range_to]`.
///
/// Input order is preserved; the first stop sits at `range_from`, the last
/// at `range_to`. Fewer than two colors yield no stops.
pub fn distribute_stops(colors: &[String], range_from: f64, range_to: f64) -> Vec<GradientStop> {
    if colors.len() < 2 {
        return Vec::new();
    }
    let step = (range_to - range_from) / (colors.len() - 1) as f64;
    colors
        .iter()
        .enumerate()
        .map(|(i, color)| GradientStop {
            offset_pct: range_from + i as f64 * step,
            color: color.clone(),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/render/gradient.rs"]
mod tests;
