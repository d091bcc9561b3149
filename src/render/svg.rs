use crate::render::gradient::LinearGradient;

/// The SVG namespace identifier embedded in every document.
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// One rendered layer: a closed path plus its paint attributes.
pub struct PathElement {
    /// Closed-curve path data (`d` attribute).
    pub d: String,
    /// Fill paint: a flat color or a reference to the shared gradient.
    pub fill: String,
    /// Fill opacity in `[0, 1]`.
    pub fill_opacity: f64,
    /// Stroke color (`none` disables stroking).
    pub stroke: String,
    /// Stroke width in user units.
    pub stroke_width: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// A complete wave image description, serializable to SVG markup.
pub struct SvgDocument {
    /// Drawing width in user units.
    pub width: f64,
    /// Drawing height in user units.
    pub height: f64,
    /// XML namespace identifier.
    pub xmlns: &'static str,
    /// Shared linear gradient, present when gradient fill is active.
    pub gradient: Option<LinearGradient>,
    /// Rendered layers in stacking order (bottom layer first).
    pub paths: Vec<PathElement>,
}

impl SvgDocument {
    /// Assemble the document into SVG markup.
    ///
    /// String concatenation only; all geometry is already serialized in the
    /// path elements.
    pub fn to_svg_string(&self) -> String {
        let mut content = String::new();

        if let Some(g) = &self.gradient {
            content.push_str("<defs>");
            content.push_str(&format!(
                "<linearGradient id='gradient' x1='{}%' y1='{}%' x2='{}%' y2='{}%'>",
                g.x1_pct, g.y1_pct, g.x2_pct, g.y2_pct,
            ));
            for stop in &g.stops {
                content.push_str(&format!(
                    "<stop offset='{}%' stop-color='{}' />",
                    stop.offset_pct, stop.color,
                ));
            }
            content.push_str("</linearGradient></defs>");
        }

        for p in &self.paths {
            content.push_str(&format!(
                "<path d='{}' stroke='{}' stroke-width='{}' fill='{}' fill-opacity='{}'></path>",
                p.d, p.stroke, p.stroke_width, p.fill, p.fill_opacity,
            ));
        }

        format!(
            "<svg id='svg' viewBox='0 0 {} {}' xmlns='{}'>{}</svg>",
            self.width, self.height, self.xmlns, content,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
