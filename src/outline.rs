use kurbo::{BezPath, Shape};

use crate::curves::write_path_data;
use crate::error::ScrollworkError;
use crate::models::BoundingRegion;

/// Padding added to every side of the outline's tight bounding box.
const REGION_PADDING: f64 = 20.0;

/// The closed region the ornamentation is confined within.
///
/// The engine treats the path as opaque: the only geometry query it ever
/// makes is the bounding box, computed analytically from the path commands
/// once at construction and cached for the outline's lifetime. Clipping to
/// the outline itself is delegated to the renderer via an even-odd
/// `clipPath`, never computed here.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    path: BezPath,
    region: BoundingRegion,
}

impl Outline {
    /// Parse SVG path data (`d` attribute grammar: move/line/cubic/quad/
    /// arc, absolute or relative; arcs are lowered to cubics). Multiple
    /// subpaths are kept, so outlines with holes work under the even-odd
    /// fill rule downstream.
    pub fn from_path_data(data: &str) -> Result<Self, ScrollworkError> {
        let path = BezPath::from_svg(data)
            .map_err(|e| ScrollworkError::InvalidBoundary(format!("unparseable path data: {e}")))?;
        if path.elements().is_empty() {
            return Err(ScrollworkError::InvalidBoundary(
                "path data contains no commands".to_string(),
            ));
        }

        let bbox = path.bounding_box();
        if !(bbox.x0.is_finite() && bbox.y0.is_finite() && bbox.x1.is_finite() && bbox.y1.is_finite()) {
            return Err(ScrollworkError::InvalidBoundary(
                "path bounding box is not finite".to_string(),
            ));
        }

        let region = BoundingRegion {
            min_x: bbox.x0 - REGION_PADDING,
            min_y: bbox.y0 - REGION_PADDING,
            width: bbox.width() + REGION_PADDING * 2.0,
            height: bbox.height() + REGION_PADDING * 2.0,
        };
        Ok(Self { path, region })
    }

    /// Load an outline from an SVG document: the first `<path>` element's
    /// `d` attribute is the boundary, everything else is ignored.
    pub fn from_svg_document(svg_text: &str) -> Result<Self, ScrollworkError> {
        let data = extract_first_path_data(svg_text)?;
        Self::from_path_data(data)
    }

    /// The padded bounding box, resolved once at construction.
    pub fn region(&self) -> BoundingRegion {
        self.region
    }

    /// The boundary in SVG path grammar, same serialization as motif curves.
    pub fn to_path_data(&self) -> String {
        write_path_data(self.path.elements())
    }
}

/// Pull the `d` attribute out of the first `<path>` element of an SVG
/// document. Attribute-level scan only; the outline grammar itself is
/// handled by the path parser.
fn extract_first_path_data(svg_text: &str) -> Result<&str, ScrollworkError> {
    let start = svg_text
        .find("<path")
        .ok_or_else(|| ScrollworkError::InvalidBoundary("SVG contains no <path> element".to_string()))?;
    let element = &svg_text[start..];
    let end = element
        .find('>')
        .ok_or_else(|| ScrollworkError::InvalidBoundary("unterminated <path> element".to_string()))?;
    let element = &element[..end];

    for quote in ['"', '\''] {
        let needle = format!("d={quote}");
        for (pos, _) in element.match_indices(&needle) {
            // Require leading whitespace so `id="..."` does not match.
            if pos == 0 || !element.as_bytes()[pos - 1].is_ascii_whitespace() {
                continue;
            }
            let value = &element[pos + needle.len()..];
            if let Some(close) = value.find(quote) {
                return Ok(&value[..close]);
            }
        }
    }
    Err(ScrollworkError::InvalidBoundary(
        "<path> element has no d attribute".to_string(),
    ))
}
