//! SVG markup for a balloon's geometry.

use crate::geometry::{BalloonGeometry, Layer, FILL_COLOR, STROKE_COLOR};
use crate::types::PLANE_SIZE;

impl BalloonGeometry {
    /// `<path>`/`<circle>` elements in draw order, styled like the editor.
    pub fn to_svg_fragment(&self) -> String {
        let width = self.stroke.width;
        let mut out = String::new();
        for layer in self.layers() {
            let element = match layer {
                Layer::Body(path) => {
                    let mut attrs = vec![
                        format!(r##"d="{}""##, path.to_svg()),
                        format!(r##"fill="{}""##, FILL_COLOR),
                        format!(r##"stroke="{}""##, STROKE_COLOR),
                        format!(r##"stroke-width="{}""##, width),
                    ];
                    if let Some([dash, gap]) = self.stroke.dash {
                        attrs.push(format!(r##"stroke-dasharray="{},{}""##, dash, gap));
                    }
                    attrs.push(r##"stroke-linejoin="round""##.to_string());
                    attrs.push(r##"stroke-linecap="round""##.to_string());
                    attrs.push(r##"vector-effect="non-scaling-stroke""##.to_string());
                    format!("<path {} />", attrs.join(" "))
                }
                Layer::Patch(path) => format!(
                    r##"<path d="{}" fill="{}" stroke="none" />"##,
                    path.to_svg(),
                    FILL_COLOR
                ),
                Layer::Tail(path) => format!(
                    r##"<path d="{}" fill="{}" stroke="{}" stroke-width="{}" stroke-linejoin="round" />"##,
                    path.to_svg(),
                    FILL_COLOR,
                    STROKE_COLOR,
                    width
                ),
                Layer::Circle(circle) => format!(
                    r##"<circle cx="{}" cy="{}" r="{}" fill="{}" stroke="{}" stroke-width="{}" />"##,
                    circle.center.x, circle.center.y, circle.radius, FILL_COLOR, STROKE_COLOR, width
                ),
            };
            out.push_str(&element);
        }
        out
    }

    /// Standalone document over the whole normalized plane, stretched to
    /// whatever box the consumer lays it out in.
    pub fn to_svg_document(&self) -> String {
        format!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {size} {size}" preserveAspectRatio="none" overflow="visible">{}</svg>"##,
            self.to_svg_fragment(),
            size = PLANE_SIZE
        )
    }
}
