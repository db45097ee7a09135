//! Tails: the pointer triangle with its seam patch, or the thought-bubble
//! circle chain.

use kurbo::{Circle, Point, Rect, Shape, Vec2};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

use crate::path::OutlinePath;
use crate::types::{BoundingBox, BubbleType, ShapeFamily, StyleParameters};

/// How far inside the body the patch reaches, along the tail direction.
pub const PATCH_INSET: f64 = 8.0;
/// Positions of the thought circles, from the tip (0) toward the center (1).
pub const THOUGHT_STEPS: [f64; 3] = [0.2, 0.45, 0.75];
pub const THOUGHT_BASE_RADIUS: f64 = 15.0;
pub const THOUGHT_RADIUS_STEP: f64 = 10.0;

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TailGeometry {
    Pointer(PointerTail),
    Thought { circles: Vec<ThoughtCircle> },
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct PointerTail {
    pub angle: f64,
    pub anchor: Point,
    pub base: [Point; 2],
    pub tip: Point,
    /// Open polyline `base[0] -> tip -> base[1]`.
    pub outline: OutlinePath,
    /// Filled triangle hiding the body stroke under the tail base.
    pub patch: OutlinePath,
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
pub struct ThoughtCircle {
    pub center: Point,
    pub radius: f64,
}

impl ThoughtCircle {
    pub fn bounding_box(&self) -> Rect {
        Circle::new(self.center, self.radius).bounding_box()
    }
}

impl TailGeometry {
    pub fn bounding_box(&self) -> Option<Rect> {
        match self {
            TailGeometry::Pointer(tail) => {
                Some(tail.outline.bounding_box().union(tail.patch.bounding_box()))
            }
            TailGeometry::Thought { circles } => circles
                .iter()
                .map(ThoughtCircle::bounding_box)
                .reduce(|a, b| a.union(b)),
        }
    }
}

pub fn build_tail(
    bbox: &BoundingBox,
    family: ShapeFamily,
    kind: BubbleType,
    style: &StyleParameters,
    tip: Option<Point>,
) -> Option<TailGeometry> {
    let tip = tip?;
    Some(match kind {
        BubbleType::Thought => TailGeometry::Thought { circles: thought_chain(bbox, tip) },
        BubbleType::Speech | BubbleType::Whisper => {
            TailGeometry::Pointer(pointer_tail(bbox, family, style, tip))
        }
    })
}

/// Direction from the box center toward `tip`; 0 when they coincide.
pub fn tail_angle(bbox: &BoundingBox, tip: Point) -> f64 {
    let d = tip - bbox.center();
    if d == Vec2::ZERO {
        tracing::debug!(x = tip.x, y = tip.y, "tail tip on box center, pointing east");
    }
    d.y.atan2(d.x)
}

/// Point on the body boundary where a tail at `angle` starts.
pub fn tail_anchor(bbox: &BoundingBox, family: ShapeFamily, angle: f64) -> Point {
    bbox.center() + family.intersection_model().intersect(angle, bbox.width(), bbox.height())
}

pub fn pointer_tail(bbox: &BoundingBox, family: ShapeFamily, style: &StyleParameters, tip: Point) -> PointerTail {
    let angle = tail_angle(bbox, tip);
    let anchor = tail_anchor(bbox, family, angle);

    let half_base = Vec2::from_angle(angle + FRAC_PI_2) * (style.tail_width / 2.0);
    let base = [anchor + half_base, anchor - half_base];

    let mut outline = OutlinePath::new();
    outline.move_to(base[0]);
    outline.line_to(tip);
    outline.line_to(base[1]);

    let inner = anchor - Vec2::from_angle(angle) * PATCH_INSET;
    let mut patch = OutlinePath::new();
    patch.move_to(base[0]);
    patch.line_to(base[1]);
    patch.line_to(inner);
    patch.close_path();

    tracing::trace!(angle, anchor_x = anchor.x, anchor_y = anchor.y, "pointer tail built");

    PointerTail { angle, anchor, base, tip, outline, patch }
}

/// Three circles stepping from the tip toward the body, growing as they go.
pub fn thought_chain(bbox: &BoundingBox, tip: Point) -> Vec<ThoughtCircle> {
    let center = bbox.center();
    THOUGHT_STEPS
        .iter()
        .enumerate()
        .map(|(i, &t)| ThoughtCircle {
            center: Point::new(tip.x + (center.x - tip.x) * t, tip.y + (center.y - tip.y) * t),
            radius: THOUGHT_BASE_RADIUS + i as f64 * THOUGHT_RADIUS_STEP,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathCommand;

    const EPS: f64 = 1e-9;

    fn square() -> BoundingBox {
        BoundingBox::new(400.0, 400.0, 600.0, 600.0)
    }

    fn pointer(tail: Option<TailGeometry>) -> PointerTail {
        match tail {
            Some(TailGeometry::Pointer(tail)) => tail,
            other => panic!("expected pointer tail, got {:?}", other),
        }
    }

    #[test]
    fn test_no_tip_no_tail() {
        let style = StyleParameters::default();
        for kind in [BubbleType::Speech, BubbleType::Thought, BubbleType::Whisper] {
            assert!(build_tail(&square(), ShapeFamily::Ellipse, kind, &style, None).is_none());
        }
    }

    #[test]
    fn test_tail_is_open_polyline() {
        let tail = pointer(build_tail(
            &square(),
            ShapeFamily::Rectangle,
            BubbleType::Whisper,
            &StyleParameters::default(),
            Some(Point::new(500.0, 900.0)),
        ));
        assert_eq!(tail.outline.line_segment_count(), 2);
        assert!(!tail.outline.is_closed());
        assert!(!tail.outline.commands().contains(&PathCommand::Close));
        assert_eq!(tail.outline.start(), Some(tail.base[0]));
        assert_eq!(tail.outline.end(), Some(tail.base[1]));
    }

    #[test]
    fn test_tail_straight_down_from_rectangle() {
        let tail = pointer_tail(
            &square(),
            ShapeFamily::Rectangle,
            &StyleParameters::default(),
            Point::new(500.0, 900.0),
        );
        assert!((tail.angle - FRAC_PI_2).abs() < EPS);
        assert!((tail.anchor - Point::new(500.0, 600.0)).hypot() < EPS);
        // Base straddles the anchor across the tail direction, 40 wide.
        assert!((tail.base[0] - Point::new(480.0, 600.0)).hypot() < EPS);
        assert!((tail.base[1] - Point::new(520.0, 600.0)).hypot() < EPS);
    }

    #[test]
    fn test_patch_reaches_inside_body() {
        let tail = pointer_tail(
            &square(),
            ShapeFamily::Ellipse,
            &StyleParameters::default(),
            Point::new(900.0, 500.0),
        );
        assert!((tail.anchor - Point::new(600.0, 500.0)).hypot() < EPS);
        assert!(tail.patch.is_closed());
        assert_eq!(tail.patch.line_segment_count(), 2);
        assert!((tail.patch.end().unwrap() - Point::new(592.0, 500.0)).hypot() < EPS);
    }

    #[test]
    fn test_tail_width_controls_base() {
        let style = StyleParameters { tail_width: 100.0, ..StyleParameters::default() };
        let tail = pointer_tail(&square(), ShapeFamily::Cloud, &style, Point::new(123.0, 45.0));
        assert!(((tail.base[0] - tail.base[1]).hypot() - 100.0).abs() < EPS);
        let mid = tail.base[0].midpoint(tail.base[1]);
        assert!((mid - tail.anchor).hypot() < EPS);
    }

    #[test]
    fn test_tip_on_center_points_east() {
        let bbox = square();
        let tail = pointer(build_tail(
            &bbox,
            ShapeFamily::Rectangle,
            BubbleType::Speech,
            &StyleParameters::default(),
            Some(bbox.center()),
        ));
        assert_eq!(tail.angle, 0.0);
        assert!((tail.anchor - Point::new(600.0, 500.0)).hypot() < EPS);
        assert_eq!(tail.outline.line_segment_count(), 2);
        assert!(tail.base.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn test_thought_chain() {
        let tip = Point::new(100.0, 100.0);
        let tail = build_tail(
            &square(),
            ShapeFamily::Cloud,
            BubbleType::Thought,
            &StyleParameters::default(),
            Some(tip),
        );
        let circles = match tail {
            Some(TailGeometry::Thought { circles }) => circles,
            other => panic!("expected thought chain, got {:?}", other),
        };
        let radii: Vec<f64> = circles.iter().map(|c| c.radius).collect();
        assert_eq!(radii, vec![15.0, 25.0, 35.0]);
        for (circle, t) in circles.iter().zip(THOUGHT_STEPS) {
            let expected = tip.lerp(Point::new(500.0, 500.0), t);
            assert!((circle.center - expected).hypot() < EPS);
        }
    }
}
