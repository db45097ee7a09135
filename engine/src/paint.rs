//! Canvas painter for browser hosts.

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Path2d};

use crate::geometry::{BalloonGeometry, Layer, FILL_COLOR, STROKE_COLOR};
use crate::types::PLANE_SIZE;

/// Draws `geometry` onto a canvas of `width` x `height` pixels, mapping the
/// normalized plane onto the full canvas. Line widths stay in screen pixels
/// whatever the scale.
pub fn paint_geometry(
    ctx: &CanvasRenderingContext2d,
    geometry: &BalloonGeometry,
    width: f64,
    height: f64,
) -> Result<(), JsValue> {
    let sx = width / PLANE_SIZE;
    let sy = height / PLANE_SIZE;
    let unit = (sx * sy).sqrt();
    let line_width = geometry.stroke.width / unit;

    ctx.save();
    ctx.scale(sx, sy)?;
    ctx.set_fill_style_str(FILL_COLOR);
    ctx.set_stroke_style_str(STROKE_COLOR);
    ctx.set_line_width(line_width);
    ctx.set_line_join("round");

    let solid = js_sys::Array::new();
    for layer in geometry.layers() {
        match layer {
            Layer::Body(path) => {
                let p = Path2d::new_with_path_string(&path.to_svg())?;
                ctx.set_line_cap("round");
                if let Some(dash) = geometry.stroke.dash {
                    let dash_array = js_sys::Array::new();
                    for d in dash {
                        dash_array.push(&JsValue::from_f64(d / unit));
                    }
                    ctx.set_line_dash(&dash_array)?;
                }
                ctx.fill_with_path_2d(&p);
                ctx.stroke_with_path(&p);
                ctx.set_line_dash(&solid)?;
                ctx.set_line_cap("butt");
            }
            Layer::Patch(path) => {
                let p = Path2d::new_with_path_string(&path.to_svg())?;
                ctx.fill_with_path_2d(&p);
            }
            Layer::Tail(path) => {
                let p = Path2d::new_with_path_string(&path.to_svg())?;
                ctx.fill_with_path_2d(&p);
                ctx.stroke_with_path(&p);
            }
            Layer::Circle(circle) => {
                ctx.begin_path();
                ctx.arc(circle.center.x, circle.center.y, circle.radius, 0.0, std::f64::consts::PI * 2.0)?;
                ctx.fill();
                ctx.stroke();
            }
        }
    }

    ctx.restore();
    Ok(())
}
