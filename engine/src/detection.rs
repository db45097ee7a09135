//! Turns balloon detector output into editable balloons.

use serde::{Deserialize, Serialize};

use crate::types::{Balloon, BoundingBox, PLANE_SIZE};

/// A detector hit, `[x, y, w, h]` in image pixels.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Detection {
    #[serde(rename = "box")]
    pub bbox: [f64; 4],
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ImageSize {
    pub w: f64,
    pub h: f64,
}

/// Maps each detection into the normalized plane as a plain speech
/// rectangle with the manual-balloon style. Detections that do not map to
/// a valid box (zero-sized image, empty or non-finite box) are skipped.
pub fn balloons_from_detections(detections: &[Detection], image: ImageSize) -> Vec<Balloon> {
    let scale_x = PLANE_SIZE / image.w;
    let scale_y = PLANE_SIZE / image.h;

    detections
        .iter()
        .enumerate()
        .map(|(index, detection)| {
            let [x, y, w, h] = detection.bbox;
            let bbox = BoundingBox::new(y * scale_y, x * scale_x, (y + h) * scale_y, (x + w) * scale_x);
            Balloon {
                text: detection.text.clone().unwrap_or_default(),
                bbox,
                ..Balloon::manual(format!("detected-{}", index))
            }
        })
        .filter(|balloon| balloon.validate().is_ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BubbleType, ShapeFamily};

    #[test]
    fn test_detections_map_into_plane() {
        let detections: Vec<Detection> = serde_json::from_str(
            r#"[
                { "box": [100, 50, 200, 100], "text": "HEY!", "confidence": 0.9 },
                { "box": [0, 0, 2000, 500] }
            ]"#,
        )
        .unwrap();
        let balloons = balloons_from_detections(&detections, ImageSize { w: 2000.0, h: 1000.0 });

        assert_eq!(balloons.len(), 2);
        assert_eq!(balloons[0].bbox.to_array(), [50.0, 50.0, 150.0, 150.0]);
        assert_eq!(balloons[0].text, "HEY!");
        assert_eq!(balloons[0].id, "detected-0");
        assert_eq!(balloons[0].shape, ShapeFamily::Rectangle);
        assert_eq!(balloons[0].kind, BubbleType::Speech);
        assert!(balloons[0].tail_tip.is_none());

        assert_eq!(balloons[1].bbox.to_array(), [0.0, 0.0, 500.0, 1000.0]);
        assert_eq!(balloons[1].text, "");
    }

    #[test]
    fn test_unmappable_detections_are_skipped() {
        let detections = vec![
            Detection { bbox: [10.0, 10.0, 50.0, 50.0], text: None },
            Detection { bbox: [f64::NAN, 10.0, 50.0, 50.0], text: None },
            Detection { bbox: [10.0, 10.0, 0.0, 50.0], text: None },
        ];
        let balloons = balloons_from_detections(&detections, ImageSize { w: 100.0, h: 100.0 });
        assert_eq!(balloons.len(), 1);
        assert_eq!(balloons[0].id, "detected-0");
        assert!(balloons.iter().all(|b| b.validate().is_ok()));

        assert!(balloons_from_detections(&detections, ImageSize { w: 0.0, h: 100.0 }).is_empty());
    }
}
