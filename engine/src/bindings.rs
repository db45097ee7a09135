//! wasm entry points. String APIs answer errors with an `{"error": ...}`
//! body; `JsValue` APIs reject.

use kurbo::Vec2;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use crate::detection::{balloons_from_detections, Detection, ImageSize};
use crate::error::BalloonError;
use crate::interaction::{resize_box, ResizeHandle};
use crate::paint::paint_geometry;
use crate::types::{Balloon, BoundingBox};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

fn balloon_from_js(record: JsValue) -> Result<Balloon, BalloonError> {
    let balloon: Balloon = serde_wasm_bindgen::from_value(record)?;
    balloon.validate()?;
    Ok(balloon)
}

fn box_from_vec(box_2d: Vec<f64>) -> Result<BoundingBox, BalloonError> {
    let coords: [f64; 4] = box_2d.try_into().map_err(|v: Vec<f64>| BalloonError::BoxArity(v.len()))?;
    Ok(BoundingBox::from(coords))
}

fn error_json(err: &BalloonError) -> String {
    serde_json::json!({ "error": err.to_string() }).to_string()
}

#[wasm_bindgen(js_name = balloonGeometry)]
pub fn balloon_geometry_js(record: JsValue) -> Result<JsValue, JsValue> {
    let geometry = balloon_from_js(record)?.geometry();
    Ok(serde_wasm_bindgen::to_value(&geometry).map_err(BalloonError::from)?)
}

#[wasm_bindgen(js_name = balloonGeometryJson)]
pub fn balloon_geometry_json(record_json: &str) -> String {
    match Balloon::from_json(record_json) {
        Ok(balloon) => serde_json::to_string(&balloon.geometry()).unwrap_or_else(|e| error_json(&BalloonError::from(e))),
        Err(e) => error_json(&e),
    }
}

#[wasm_bindgen(js_name = balloonSvg)]
pub fn balloon_svg(record_json: &str) -> String {
    match Balloon::from_json(record_json) {
        Ok(balloon) => balloon.geometry().to_svg_fragment(),
        Err(e) => error_json(&e),
    }
}

#[wasm_bindgen(js_name = paintBalloon)]
pub fn paint_balloon(ctx: &CanvasRenderingContext2d, record: JsValue, width: f64, height: f64) -> Result<(), JsValue> {
    let balloon = balloon_from_js(record)?;
    paint_geometry(ctx, &balloon.geometry(), width, height)
}

/// `box_2d` in, `box_2d` out; the minimum extent is applied.
#[wasm_bindgen(js_name = resizeBox)]
pub fn resize_box_js(box_2d: Vec<f64>, handle: &str, dx: f64, dy: f64) -> Result<Vec<f64>, JsValue> {
    let start = box_from_vec(box_2d)?;
    let handle: ResizeHandle = handle.parse()?;
    let resized = resize_box(&start, handle, Vec2::new(dx, dy));
    Ok(resized.to_array().to_vec())
}

#[wasm_bindgen(js_name = importDetections)]
pub fn import_detections(detections: JsValue, image_width: f64, image_height: f64) -> Result<JsValue, JsValue> {
    let detections: Vec<Detection> = serde_wasm_bindgen::from_value(detections).map_err(BalloonError::from)?;
    // Unusable image sizes or boxes are dropped rather than sent back as NaN.
    let balloons = balloons_from_detections(&detections, ImageSize { w: image_width, h: image_height });
    Ok(serde_wasm_bindgen::to_value(&balloons).map_err(BalloonError::from)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    const SPEECH: &str = r#"{
        "id": "b1",
        "box_2d": [400, 400, 600, 600],
        "shape": "rectangle",
        "type": "speech",
        "tailTip": { "x": 700, "y": 700 }
    }"#;

    #[test]
    fn test_geometry_json_for_valid_record() {
        let json: Value = serde_json::from_str(&balloon_geometry_json(SPEECH)).unwrap();
        assert!(json.get("error").is_none());
        assert_eq!(json["body"][0]["cmd"], "move_to");
        assert_eq!(json["tail"]["kind"], "pointer");
        assert_eq!(json["stroke"]["width"], 3.0);
    }

    #[test]
    fn test_geometry_json_reports_errors() {
        let malformed: Value = serde_json::from_str(&balloon_geometry_json("{")).unwrap();
        assert!(malformed["error"].as_str().unwrap().starts_with("Invalid balloon record"));

        let degenerate: Value =
            serde_json::from_str(&balloon_geometry_json(r#"{"box_2d": [100, 100, 100, 300]}"#)).unwrap();
        assert!(degenerate["error"].as_str().unwrap().contains("degenerate"));
    }

    #[test]
    fn test_svg_for_valid_record() {
        let svg = balloon_svg(SPEECH);
        assert!(svg.starts_with("<path"));
        assert_eq!(svg.matches("<path").count(), 3);

        let err: Value = serde_json::from_str(&balloon_svg(r#"{"box_2d": [1, 2]}"#)).unwrap();
        assert!(err.get("error").is_some());
    }

    #[test]
    fn test_box_from_vec_needs_four_numbers() {
        assert!(matches!(box_from_vec(vec![1.0, 2.0, 3.0]), Err(BalloonError::BoxArity(3))));
        assert!(matches!(box_from_vec(vec![0.0; 5]), Err(BalloonError::BoxArity(5))));
        assert_eq!(
            box_from_vec(vec![400.0, 400.0, 600.0, 600.0]).unwrap(),
            BoundingBox::new(400.0, 400.0, 600.0, 600.0)
        );
    }

    #[test]
    fn test_resize_box_applies_handle() {
        let resized = resize_box_js(vec![400.0, 400.0, 600.0, 600.0], "se", -250.0, 10.0).unwrap();
        assert_eq!(resized, vec![400.0, 400.0, 610.0, 420.0]);
    }
}
