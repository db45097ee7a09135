//! Box and tail math for pointer drags.
//!
//! These run in the editor's event handlers, before geometry is requested;
//! the minimum extent is enforced here and nowhere else.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::BalloonError;
use crate::types::{BoundingBox, PLANE_SIZE};

/// Smallest width or height a resize may leave.
pub const MIN_EXTENT: f64 = 20.0;

/// Where a freshly added tail points, relative to the box.
const DEFAULT_TAIL_OFFSET: Vec2 = Vec2::new(50.0, 100.0);

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ResizeHandle {
    #[serde(rename = "nw")]
    NorthWest,
    #[serde(rename = "ne")]
    NorthEast,
    #[serde(rename = "sw")]
    SouthWest,
    #[serde(rename = "se")]
    SouthEast,
}

impl ResizeHandle {
    fn north(self) -> bool {
        matches!(self, ResizeHandle::NorthWest | ResizeHandle::NorthEast)
    }

    fn west(self) -> bool {
        matches!(self, ResizeHandle::NorthWest | ResizeHandle::SouthWest)
    }
}

impl FromStr for ResizeHandle {
    type Err = BalloonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nw" => Ok(ResizeHandle::NorthWest),
            "ne" => Ok(ResizeHandle::NorthEast),
            "sw" => Ok(ResizeHandle::SouthWest),
            "se" => Ok(ResizeHandle::SouthEast),
            _ => Err(BalloonError::UnknownHandle(s.to_string())),
        }
    }
}

/// Converts a screen-pixel drag into plane units for a viewport of the given size.
pub fn plane_delta(screen_dx: f64, screen_dy: f64, viewport_width: f64, viewport_height: f64) -> Vec2 {
    Vec2::new(
        screen_dx * (PLANE_SIZE / viewport_width),
        screen_dy * (PLANE_SIZE / viewport_height),
    )
}

pub fn move_box(start: &BoundingBox, delta: Vec2) -> BoundingBox {
    BoundingBox::new(
        start.ymin + delta.y,
        start.xmin + delta.x,
        start.ymax + delta.y,
        start.xmax + delta.x,
    )
}

/// Drags the corner named by `handle`. When the box would get thinner than
/// [`MIN_EXTENT`], the bottom or right edge is pushed back out.
pub fn resize_box(start: &BoundingBox, handle: ResizeHandle, delta: Vec2) -> BoundingBox {
    let mut b = *start;
    if handle.north() {
        b.ymin += delta.y;
    } else {
        b.ymax += delta.y;
    }
    if handle.west() {
        b.xmin += delta.x;
    } else {
        b.xmax += delta.x;
    }

    if b.height() < MIN_EXTENT {
        b.ymax = b.ymin + MIN_EXTENT;
    }
    if b.width() < MIN_EXTENT {
        b.xmax = b.xmin + MIN_EXTENT;
    }
    b
}

pub fn move_tail(start: Point, delta: Vec2) -> Point {
    start + delta
}

/// Below the box, a little right of center.
pub fn default_tail_tip(bbox: &BoundingBox) -> Point {
    Point::new(bbox.center().x + DEFAULT_TAIL_OFFSET.x, bbox.ymax + DEFAULT_TAIL_OFFSET.y)
}
