//! Everything a renderer needs for one balloon, in draw order.

use kurbo::Rect;
use serde::{Deserialize, Serialize};

use crate::outline::generate_outline;
use crate::path::OutlinePath;
use crate::tail::{build_tail, ThoughtCircle, TailGeometry};
use crate::types::{Balloon, BubbleType, StyleParameters};

pub const WHISPER_DASH: [f64; 2] = [10.0, 10.0];
pub const FILL_COLOR: &str = "white";
pub const STROKE_COLOR: &str = "black";

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
pub struct StrokeStyle {
    pub width: f64,
    pub dash: Option<[f64; 2]>,
}

impl StrokeStyle {
    pub fn for_balloon(kind: BubbleType, style: &StyleParameters) -> Self {
        StrokeStyle {
            width: style.border_width,
            dash: match kind {
                BubbleType::Whisper => Some(WHISPER_DASH),
                BubbleType::Speech | BubbleType::Thought => None,
            },
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct BalloonGeometry {
    pub body: OutlinePath,
    pub stroke: StrokeStyle,
    pub tail: Option<TailGeometry>,
}

/// One drawable item. Body and tail get fill and stroke, the patch only fill.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Layer<'a> {
    Body(&'a OutlinePath),
    Patch(&'a OutlinePath),
    Tail(&'a OutlinePath),
    Circle(&'a ThoughtCircle),
}

impl BalloonGeometry {
    /// Draw order: body, then the seam patch, then the tail on top.
    /// Thought circles follow the body.
    pub fn layers(&self) -> Vec<Layer<'_>> {
        let mut layers = vec![Layer::Body(&self.body)];
        match &self.tail {
            Some(TailGeometry::Pointer(tail)) => {
                layers.push(Layer::Patch(&tail.patch));
                layers.push(Layer::Tail(&tail.outline));
            }
            Some(TailGeometry::Thought { circles }) => {
                layers.extend(circles.iter().map(Layer::Circle));
            }
            None => {}
        }
        layers
    }

    /// Union of body and tail bounds, stroke width not included.
    pub fn bounding_box(&self) -> Rect {
        let body = self.body.bounding_box();
        match self.tail.as_ref().and_then(TailGeometry::bounding_box) {
            Some(tail) => body.union(tail),
            None => body,
        }
    }
}

pub fn balloon_geometry(balloon: &Balloon) -> BalloonGeometry {
    tracing::trace!(id = %balloon.id, shape = ?balloon.shape, kind = ?balloon.kind, "building balloon geometry");
    BalloonGeometry {
        body: generate_outline(&balloon.bbox, balloon.shape, &balloon.style),
        stroke: StrokeStyle::for_balloon(balloon.kind, &balloon.style),
        tail: build_tail(&balloon.bbox, balloon.shape, balloon.kind, &balloon.style, balloon.tail_tip),
    }
}

impl Balloon {
    pub fn geometry(&self) -> BalloonGeometry {
        balloon_geometry(self)
    }
}
