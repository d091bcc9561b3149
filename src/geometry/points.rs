use kurbo::Point;

use crate::{composition::model::WaveConfig, foundation::rng::SinRng};

/// Vertical drop applied per step in the chair modes, in user units.
const CHAIR_STEP_PX: f64 = 75.0;

/// Generate the jittered sample grid for every layer of a drawing.
///
/// Returns one point row per layer, each of length `segments + 1`: an exact
/// left anchor at `x = 0`, `segments - 1` jittered interior points, and an
/// exact right anchor at `x = width`. Layer index order corresponds to
/// increasing vertical offset.
///
/// Exactly two values are drawn from `rng` per interior point — the y jitter
/// first, then the x jitter. The draw order is part of the deterministic
/// contract: replaying the same seed must reproduce the same drawing
/// bit-for-bit.
///
/// The caller is expected to pass a validated config (positive dimensions,
/// at least one layer and segment).
pub fn generate_layers(config: &WaveConfig, rng: &mut SinRng) -> Vec<Vec<Point>> {
    let cell_w = config.width / f64::from(config.segments);
    let cell_h = config.height / f64::from(config.layers + 1);
    let move_limit_x = cell_w * config.variance * 0.5;
    let move_limit_y = cell_h * config.variance;

    let mut layers = Vec::with_capacity(config.layers as usize);
    for layer_index in 0..config.layers {
        let mut baseline = move_limit_y + cell_h * f64::from(layer_index);
        if config.mode.is_chair() {
            baseline += f64::from(layer_index) * CHAIR_STEP_PX;
        }

        let mut level = 0.0;
        let mut row = Vec::with_capacity(config.segments as usize + 1);
        row.push(Point::new(0.0, baseline));

        for column in 1..config.segments {
            let x = cell_w * f64::from(column);
            let r_y = rng.next_f64_01();
            let r_x = rng.next_f64_01();
            let jittered_y = baseline - move_limit_y / 2.0 + r_y * move_limit_y + level;
            let jittered_x = x - move_limit_x / 2.0 + r_x * move_limit_x;
            row.push(Point::new(jittered_x, jittered_y));

            if config.mode.is_chair() {
                level += CHAIR_STEP_PX;
            }
        }

        row.push(Point::new(config.width, baseline + level));
        layers.push(row);
    }

    layers
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/points.rs"]
mod tests;
