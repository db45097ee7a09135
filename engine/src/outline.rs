//! Body outlines for the four shape families.
//!
//! The procedural constants below define the look of clouds and screams;
//! changing any of them changes every existing page.

use kurbo::{Point, Vec2};
use std::f64::consts::PI;

use crate::path::OutlinePath;
use crate::types::{BoundingBox, ShapeFamily, StyleParameters};

pub const CLOUD_SEGMENTS: usize = 12;
/// Control points sit this far out on the base ellipse (times roughness).
pub const CLOUD_BUMP: f64 = 1.3;
pub const SCREAM_SEGMENTS: usize = 30;
/// Push of odd scream vertices (times roughness), split per axis by the ray direction.
pub const SCREAM_SPIKE: f64 = 40.0;

pub fn generate_outline(bbox: &BoundingBox, family: ShapeFamily, style: &StyleParameters) -> OutlinePath {
    match family {
        ShapeFamily::Rectangle => rounded_rectangle(bbox, style.border_radius),
        ShapeFamily::Ellipse => ellipse(bbox),
        ShapeFamily::Cloud => cloud(bbox, style.roughness),
        ShapeFamily::Scream => scream(bbox, style.roughness),
    }
}

/// Corner radius actually drawn: never more than half the shorter side,
/// otherwise opposite arcs cross each other.
pub fn effective_corner_radius(bbox: &BoundingBox, border_radius: f64) -> f64 {
    border_radius
        .min(bbox.width() / 2.0)
        .min(bbox.height() / 2.0)
        .max(0.0)
}

/// Clockwise from the top edge, four edges joined by quarter arcs.
fn rounded_rectangle(bbox: &BoundingBox, border_radius: f64) -> OutlinePath {
    let r = effective_corner_radius(bbox, border_radius);
    let radii = Vec2::new(r, r);
    let BoundingBox { ymin, xmin, ymax, xmax } = *bbox;

    let mut path = OutlinePath::new();
    path.move_to(Point::new(xmin + r, ymin));
    path.line_to(Point::new(xmax - r, ymin));
    path.arc_to(radii, false, true, Point::new(xmax, ymin + r));
    path.line_to(Point::new(xmax, ymax - r));
    path.arc_to(radii, false, true, Point::new(xmax - r, ymax));
    path.line_to(Point::new(xmin + r, ymax));
    path.arc_to(radii, false, true, Point::new(xmin, ymax - r));
    path.line_to(Point::new(xmin, ymin + r));
    path.arc_to(radii, false, true, Point::new(xmin + r, ymin));
    path.close_path();
    path
}

fn ellipse(bbox: &BoundingBox) -> OutlinePath {
    let radii = bbox.radii();
    let cy = bbox.center().y;

    let mut path = OutlinePath::new();
    path.move_to(Point::new(bbox.xmin, cy));
    path.arc_to(radii, true, false, Point::new(bbox.xmax, cy));
    path.arc_to(radii, true, false, Point::new(bbox.xmin, cy));
    path.close_path();
    path
}

fn segment_angle(i: usize, segments: usize) -> f64 {
    (i as f64 / segments as f64) * PI * 2.0
}

fn on_ellipse(center: Point, radii: Vec2, angle: f64, scale: f64) -> Point {
    Point::new(
        center.x + radii.x * angle.cos() * scale,
        center.y + radii.y * angle.sin() * scale,
    )
}

/// Scalloped outline: quadratic segments between points on the base
/// ellipse, each pulled outward by a control point at the mid angle.
fn cloud(bbox: &BoundingBox, roughness: f64) -> OutlinePath {
    let center = bbox.center();
    let radii = bbox.radii();
    let bump = CLOUD_BUMP * roughness;

    let mut path = OutlinePath::new();
    path.move_to(Point::new(center.x + radii.x, center.y));
    for i in 1..=CLOUD_SEGMENTS {
        let angle = segment_angle(i, CLOUD_SEGMENTS);
        let mid_angle = (angle + segment_angle(i - 1, CLOUD_SEGMENTS)) / 2.0;
        path.quad_to(
            on_ellipse(center, radii, mid_angle, bump),
            on_ellipse(center, radii, angle, 1.0),
        );
    }
    path.close_path();
    path
}

/// Jagged burst: straight segments alternating between the base ellipse
/// and spikes. A spike grows each axis radius by its share of the ray
/// direction, so spikes on the negative-x and negative-y sides pull in.
fn scream(bbox: &BoundingBox, roughness: f64) -> OutlinePath {
    let center = bbox.center();
    let radii = bbox.radii();

    let points: Vec<Point> = (0..=SCREAM_SEGMENTS)
        .map(|i| {
            let angle = segment_angle(i, SCREAM_SEGMENTS);
            let spike = (i % 2) as f64 * SCREAM_SPIKE * roughness;
            let local_radii = radii + Vec2::new(angle.cos(), angle.sin()) * spike;
            on_ellipse(center, local_radii, angle, 1.0)
        })
        .collect();

    let mut path = OutlinePath::new();
    path.move_to(points[0]);
    for p in &points[1..] {
        path.line_to(*p);
    }
    path.close_path();
    path
}
