use crate::foundation::error::{CrestError, CrestResult};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A complete wave drawing configuration.
///
/// The configuration is a pure data model that can be:
/// - built programmatically (start from [`WaveConfig::default`])
/// - serialized/deserialized via Serde (JSON); absent fields take their
///   documented defaults
///
/// Rendering a configuration is performed by [`crate::render()`] /
/// [`crate::render_document()`].
pub struct WaveConfig {
    /// Drawing width in user units. Default 100.
    #[serde(default = "default_width")]
    pub width: f64,
    /// Drawing height in user units. Default 50.
    #[serde(default = "default_height")]
    pub height: f64,
    /// Number of stacked wave layers. Default 2.
    #[serde(default = "default_layers")]
    pub layers: u32,
    /// Number of horizontal grid segments per layer. Default 10.
    #[serde(default = "default_segments")]
    pub segments: u32,
    /// Jitter magnitude multiplier applied to the sample grid. Default 0.75.
    #[serde(default = "default_variance")]
    pub variance: f64,
    /// Starting value of the deterministic sequence counter. Default 0.
    #[serde(default)]
    pub seed: u64,
    /// Layer layout mode. Default [`WaveMode::Classic`].
    #[serde(default)]
    pub mode: WaveMode,
    /// Flat fill color for the layers. Default `#000000`.
    #[serde(default = "default_fill")]
    pub fill: String,
    /// Stroke color for the layers. Default `none`.
    #[serde(default = "default_stroke")]
    pub stroke: String,
    /// Stroke width in user units. Default 0.
    #[serde(default)]
    pub stroke_width: f64,
    /// Fill the layers with a shared linear gradient instead of `fill`.
    /// Only takes effect with at least two gradient colors. Default false.
    #[serde(default)]
    pub gradient: bool,
    /// Gradient direction in degrees. Default 270.
    #[serde(default = "default_gradient_angle_deg")]
    pub gradient_angle_deg: f64,
    /// Ordered gradient colors. Default `["#F78DA7", "#8ED1FC"]`.
    #[serde(default = "default_gradient_colors")]
    pub gradient_colors: Vec<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Layer layout mode consumed by the point generator's offset rules.
pub enum WaveMode {
    /// Evenly stacked layers with no step offset.
    #[default]
    Classic,
    /// Stepped layers descending toward the left edge.
    ChairLeft,
    /// Stepped layers descending toward the right edge.
    ChairRight,
}

impl WaveMode {
    /// Whether this mode applies the stepped "chair" offsets.
    pub fn is_chair(self) -> bool {
        matches!(self, Self::ChairLeft | Self::ChairRight)
    }
}

fn default_width() -> f64 {
    100.0
}

fn default_height() -> f64 {
    50.0
}

fn default_layers() -> u32 {
    2
}

fn default_segments() -> u32 {
    10
}

fn default_variance() -> f64 {
    0.75
}

fn default_fill() -> String {
    "#000000".to_string()
}

fn default_stroke() -> String {
    "none".to_string()
}

fn default_gradient_angle_deg() -> f64 {
    270.0
}

fn default_gradient_colors() -> Vec<String> {
    vec!["#F78DA7".to_string(), "#8ED1FC".to_string()]
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            layers: default_layers(),
            segments: default_segments(),
            variance: default_variance(),
            seed: 0,
            mode: WaveMode::default(),
            fill: default_fill(),
            stroke: default_stroke(),
            stroke_width: 0.0,
            gradient: false,
            gradient_angle_deg: default_gradient_angle_deg(),
            gradient_colors: default_gradient_colors(),
        }
    }
}

impl WaveConfig {
    /// Parse a configuration from a JSON string; absent fields take defaults.
    pub fn from_json_str(s: &str) -> CrestResult<Self> {
        serde_json::from_str(s).map_err(|e| CrestError::serde(e.to_string()))
    }

    /// Validate configuration invariants before any geometry runs.
    pub fn validate(&self) -> CrestResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(CrestError::validation("width must be finite and > 0"));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(CrestError::validation("height must be finite and > 0"));
        }
        if self.layers == 0 {
            return Err(CrestError::validation("layers must be > 0"));
        }
        if self.segments == 0 {
            return Err(CrestError::validation("segments must be > 0"));
        }
        if !self.variance.is_finite() || self.variance < 0.0 {
            return Err(CrestError::validation("variance must be finite and >= 0"));
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(CrestError::validation(
                "stroke_width must be finite and >= 0",
            ));
        }
        if !self.gradient_angle_deg.is_finite() {
            return Err(CrestError::validation("gradient_angle_deg must be finite"));
        }
        if self.fill.trim().is_empty() {
            return Err(CrestError::validation("fill must be non-empty"));
        }
        if self.stroke.trim().is_empty() {
            return Err(CrestError::validation("stroke must be non-empty"));
        }
        for color in &self.gradient_colors {
            if color.trim().is_empty() {
                return Err(CrestError::validation(
                    "gradient colors must be non-empty strings",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
