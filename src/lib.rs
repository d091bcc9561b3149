//! Crest generates decorative, wave-shaped vector images as SVG.
//!
//! A drawing is a stack of horizontal layers. Each layer is a jittered row of
//! sample points turned into one smooth closed curve by a cubic-spline
//! control-point solver, then serialized as an SVG path. Layers share a
//! canvas-bottom baseline, so the composite reads as overlapping waves.
//!
//! # Pipeline overview
//!
//! 1. **Configure**: [`WaveConfig`] (plain serde data, defaulted + validated)
//! 2. **Sample**: `WaveConfig + SinRng -> Vec<Vec<Point>>` (jittered grid per layer)
//! 3. **Solve**: per-axis knot sequences -> [`ControlPoints`] (tridiagonal system)
//! 4. **Serialize**: samples + control points -> closed SVG path strings
//! 5. **Assemble**: paths + opacity + optional gradient -> [`SvgDocument`]
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: one render call owns one [`SinRng`] seeded
//!   from the config; identical configs produce byte-identical documents.
//! - **No IO in the engine**: the library builds strings and values only; the
//!   `crest` binary is the only place that touches the filesystem.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod composition;
mod foundation;
mod geometry;
mod render;

pub use kurbo::Point;

pub use composition::model::{WaveConfig, WaveMode};
pub use foundation::error::{CrestError, CrestResult};
pub use foundation::rng::SinRng;
pub use geometry::points::generate_layers;
pub use geometry::spline::{ControlPoints, compute_control_points};
pub use render::gradient::{GradientStop, LinearGradient, distribute_stops};
pub use render::path::serialize_closed_path;
pub use render::pipeline::{render, render_document};
pub use render::svg::{PathElement, SVG_NS, SvgDocument};
