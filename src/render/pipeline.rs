use kurbo::Point;

use crate::{
    composition::model::WaveConfig,
    foundation::error::CrestResult,
    foundation::rng::SinRng,
    geometry::points::generate_layers,
    geometry::spline::compute_control_points,
    render::gradient::{LinearGradient, distribute_stops},
    render::path::serialize_closed_path,
    render::svg::{PathElement, SVG_NS, SvgDocument},
};

/// Fill opacity per layer, bottom to top; the topmost layers take the last
/// entries so the front wave is fully opaque.
const LAYER_OPACITY: [f64; 4] = [0.265, 0.4, 0.53, 1.0];

/// Gradient stop range in percent.
const GRADIENT_STOP_RANGE: (f64, f64) = (5.0, 95.0);

#[tracing::instrument(skip(config))]
/// Render a configuration into a wave image description.
///
/// Validates the configuration, then runs the whole pipeline to completion:
/// sample points, per-axis spline solves, path serialization, opacity and
/// gradient assignment. The run owns a fresh [`SinRng`] initialized from the
/// configured seed, so identical configurations produce identical documents.
pub fn render_document(config: &WaveConfig) -> CrestResult<SvgDocument> {
    config.validate()?;

    let mut rng = SinRng::new(config.seed);
    let layers = generate_layers(config, &mut rng);
    tracing::debug!(layers = layers.len(), segments = config.segments, "sampled layer points");

    let left_corner = Point::new(0.0, config.height);
    let right_corner = Point::new(config.width, config.height);

    let mut path_data = Vec::with_capacity(layers.len());
    for row in &layers {
        let xs: Vec<f64> = row.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = row.iter().map(|p| p.y).collect();
        let ctrl_x = compute_control_points(&xs)?;
        let ctrl_y = compute_control_points(&ys)?;
        path_data.push(serialize_closed_path(
            row,
            &ctrl_x,
            &ctrl_y,
            left_corner,
            right_corner,
        )?);
    }

    let gradient_active = config.gradient && config.gradient_colors.len() >= 2;
    let gradient = gradient_active.then(|| {
        let (from, to) = GRADIENT_STOP_RANGE;
        LinearGradient::from_angle(
            config.gradient_angle_deg,
            distribute_stops(&config.gradient_colors, from, to),
        )
    });

    // The last min(n, 4) table entries are assigned in order starting at the
    // bottom layer, so the topmost layer always lands on 1.0; with more than
    // four layers the extras stay fully opaque.
    let opacity_tail = &LAYER_OPACITY[LAYER_OPACITY.len().saturating_sub(path_data.len())..];

    let paths = path_data
        .into_iter()
        .enumerate()
        .map(|(index, d)| PathElement {
            d,
            fill: if gradient_active {
                "url(#gradient)".to_string()
            } else {
                config.fill.clone()
            },
            fill_opacity: opacity_tail.get(index).copied().unwrap_or(1.0),
            stroke: config.stroke.clone(),
            stroke_width: config.stroke_width,
        })
        .collect();

    Ok(SvgDocument {
        width: config.width,
        height: config.height,
        xmlns: SVG_NS,
        gradient,
        paths,
    })
}

/// Render a configuration straight to SVG markup.
pub fn render(config: &WaveConfig) -> CrestResult<String> {
    Ok(render_document(config)?.to_svg_string())
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
