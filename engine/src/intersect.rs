//! Ray/boundary intersection from a shape's center.
//!
//! Every solver returns an offset from the center, not an absolute point.

use kurbo::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum IntersectionModel {
    Box,
    Ellipse,
}

impl IntersectionModel {
    /// Where a ray at `angle` leaves a shape of full width `w` and height `h`.
    pub fn intersect(self, angle: f64, w: f64, h: f64) -> Vec2 {
        match self {
            IntersectionModel::Box => box_intersection(angle, w, h),
            IntersectionModel::Ellipse => ellipse_intersection(angle, w, h),
        }
    }
}

pub fn box_intersection(angle: f64, w: f64, h: f64) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    let through_vertical_edge = cos.abs() * h > sin.abs() * w;
    // A tie with sin == 0 only happens on an empty box; the vertical edge
    // keeps the division away from zero.
    if through_vertical_edge || sin == 0.0 {
        if !through_vertical_edge {
            tracing::debug!(angle, w, h, "box intersection tie resolved on vertical edge");
        }
        let x = cos.signum() * w / 2.0;
        Vec2::new(x, x * (sin / cos))
    } else {
        let y = sin.signum() * h / 2.0;
        Vec2::new(y * (cos / sin), y)
    }
}

/// Returns NaN on a box with a zero axis; callers validate boxes first.
pub fn ellipse_intersection(angle: f64, w: f64, h: f64) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    let a = w / 2.0;
    let b = h / 2.0;
    let r = 1.0 / ((cos * cos) / (a * a) + (sin * sin) / (b * b)).sqrt();
    Vec2::new(r * cos, r * sin)
}
