use std::fmt::Write as _;

use crate::models::{Config, Motif};
use crate::outline::Outline;

/// Stroke width of the outline itself, before the thickness multiplier.
const OUTLINE_STROKE_WIDTH: f64 = 2.4;

/// Leaf strokes are drawn slightly lighter than the spiral stroke.
const LEAF_STROKE_RATIO: f64 = 0.8;

/// Compose the full SVG document: the bounding region as viewBox, the
/// outline as an even-odd clip path, motifs painted in generation order
/// inside the clip group, and the outline stroked on top.
///
/// Clipping is done by the rendering surface via `clip-path`; no geometric
/// clipping is computed here.
pub fn generate_svg(outline: &Outline, config: &Config, motifs: &[Motif]) -> String {
    let region = outline.region();
    let outline_d = outline.to_path_data();
    let style = config.style.profile();

    let (fill, outline_stroke) = if config.invert { ("#000", "#fff") } else { ("#fff", "#000") };
    let outline_width = OUTLINE_STROKE_WIDTH * config.thickness;
    let spiral_width = style.stroke_width * config.thickness;
    let leaf_width = style.stroke_width * LEAF_STROKE_RATIO * config.thickness;

    let mut body = String::new();
    for motif in motifs {
        body.push_str("    <g>\n");
        let _ = writeln!(
            body,
            r#"      <path d="{}" stroke="{}" fill="none" stroke-width="{}" stroke-linecap="round"/>"#,
            motif.spiral.to_path_data(),
            style.stroke_color,
            spiral_width
        );
        for leaf in &motif.leaves {
            let _ = writeln!(
                body,
                r#"      <path d="{}" stroke="{}" fill="none" stroke-width="{}" stroke-linecap="round"/>"#,
                leaf.to_path_data(),
                style.stroke_color,
                leaf_width
            );
        }
        body.push_str("    </g>\n");
    }

    format!(
        r##"<svg viewBox="{} {} {} {}" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <clipPath id="clipOutline" clipPathUnits="userSpaceOnUse">
      <path d="{outline_d}" fill="#000" fill-rule="evenodd"/>
    </clipPath>
  </defs>
  <path d="{outline_d}" fill="{fill}" fill-rule="evenodd" stroke="#000" stroke-width="{outline_width}"/>
  <g clip-path="url(#clipOutline)">
{body}  </g>
  <path d="{outline_d}" fill="none" stroke="{outline_stroke}" stroke-width="{outline_width}"/>
</svg>"##,
        region.min_x, region.min_y, region.width, region.height
    )
}
