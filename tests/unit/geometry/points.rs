use super::*;
use crate::composition::model::WaveMode;

fn config(layers: u32, segments: u32, variance: f64, mode: WaveMode) -> WaveConfig {
    WaveConfig {
        width: 100.0,
        height: 50.0,
        layers,
        segments,
        variance,
        mode,
        ..WaveConfig::default()
    }
}

#[test]
fn each_layer_has_segments_plus_one_points() {
    for segments in [1, 2, 3, 10, 37] {
        let cfg = config(3, segments, 0.75, WaveMode::Classic);
        let mut rng = SinRng::new(0);
        let layers = generate_layers(&cfg, &mut rng);
        assert_eq!(layers.len(), 3);
        for row in &layers {
            assert_eq!(row.len(), segments as usize + 1);
        }
    }
}

#[test]
fn anchors_are_exact_and_x_is_non_decreasing() {
    let cfg = config(4, 12, 0.75, WaveMode::Classic);
    let mut rng = SinRng::new(9);
    let layers = generate_layers(&cfg, &mut rng);

    for row in &layers {
        assert_eq!(row.first().unwrap().x, 0.0);
        assert_eq!(row.last().unwrap().x, cfg.width);
        for pair in row.windows(2) {
            assert!(pair[1].x >= pair[0].x, "x went backwards: {pair:?}");
        }
    }
}

#[test]
fn layer_baselines_grow_with_index() {
    let cfg = config(4, 6, 0.75, WaveMode::Classic);
    let mut rng = SinRng::new(0);
    let layers = generate_layers(&cfg, &mut rng);

    let cell_h = cfg.height / f64::from(cfg.layers + 1);
    let move_limit_y = cell_h * cfg.variance;
    for (index, row) in layers.iter().enumerate() {
        let baseline = move_limit_y + cell_h * index as f64;
        assert_eq!(row.first().unwrap().y, baseline);
        assert_eq!(row.last().unwrap().y, baseline);
    }
}

#[test]
fn zero_variance_removes_all_jitter() {
    let cfg = config(1, 4, 0.0, WaveMode::Classic);
    let mut rng = SinRng::new(0);
    let layers = generate_layers(&cfg, &mut rng);

    let row = &layers[0];
    for (i, point) in row.iter().enumerate() {
        assert_eq!(point.x, 25.0 * i as f64);
        assert_eq!(point.y, 0.0);
    }
}

#[test]
fn jitter_draws_y_first_then_x() {
    let cfg = config(1, 3, 1.0, WaveMode::Classic);
    let mut rng = SinRng::new(5);
    let layers = generate_layers(&cfg, &mut rng);

    let cell_w = cfg.width / f64::from(cfg.segments);
    let cell_h = cfg.height / f64::from(cfg.layers + 1);
    let move_limit_x = cell_w * cfg.variance * 0.5;
    let move_limit_y = cell_h * cfg.variance;
    let baseline = move_limit_y;

    let mut replay = SinRng::new(5);
    let row = &layers[0];
    for (column, point) in row[1..row.len() - 1].iter().enumerate() {
        let x = cell_w * (column + 1) as f64;
        let r_y = replay.next_f64_01();
        let r_x = replay.next_f64_01();
        assert_eq!(point.y, baseline - move_limit_y / 2.0 + r_y * move_limit_y);
        assert_eq!(point.x, x - move_limit_x / 2.0 + r_x * move_limit_x);
    }
}

#[test]
fn chair_modes_step_down_and_offset_baselines() {
    for mode in [WaveMode::ChairLeft, WaveMode::ChairRight] {
        let cfg = config(2, 4, 0.0, mode);
        let mut rng = SinRng::new(0);
        let layers = generate_layers(&cfg, &mut rng);

        let cell_h = cfg.height / f64::from(cfg.layers + 1);
        for (index, row) in layers.iter().enumerate() {
            let baseline = cell_h * index as f64 + 75.0 * index as f64;
            assert_eq!(row.first().unwrap().y, baseline);
            // Interior point k carries (k - 1) accumulated steps.
            for (k, point) in row[1..row.len() - 1].iter().enumerate() {
                assert_eq!(point.y, baseline + 75.0 * k as f64);
            }
            // The right anchor carries every accumulated step.
            assert_eq!(
                row.last().unwrap().y,
                baseline + 75.0 * f64::from(cfg.segments - 1)
            );
        }
    }
}

#[test]
fn same_seed_reproduces_the_same_drawing() {
    let cfg = config(3, 8, 0.75, WaveMode::Classic);
    let mut a = SinRng::new(11);
    let mut b = SinRng::new(11);
    assert_eq!(generate_layers(&cfg, &mut a), generate_layers(&cfg, &mut b));
}
