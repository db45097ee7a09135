use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

use crate::error::BalloonError;
use crate::intersect::IntersectionModel;

/// Side length of the normalized plane every coordinate lives in.
pub const PLANE_SIZE: f64 = 1000.0;

/// Axis-aligned box in the normalized plane, serialized in the editor's
/// `[ymin, xmin, ymax, xmax]` order.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct BoundingBox {
    pub ymin: f64,
    pub xmin: f64,
    pub ymax: f64,
    pub xmax: f64,
}

impl From<[f64; 4]> for BoundingBox {
    fn from([ymin, xmin, ymax, xmax]: [f64; 4]) -> Self {
        BoundingBox { ymin, xmin, ymax, xmax }
    }
}

impl From<BoundingBox> for [f64; 4] {
    fn from(b: BoundingBox) -> Self {
        [b.ymin, b.xmin, b.ymax, b.xmax]
    }
}

impl BoundingBox {
    pub fn new(ymin: f64, xmin: f64, ymax: f64, xmax: f64) -> Self {
        BoundingBox { ymin, xmin, ymax, xmax }
    }

    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    pub fn center(&self) -> Point {
        Point::new(self.xmin + self.width() / 2.0, self.ymin + self.height() / 2.0)
    }

    /// Radii of the inscribed ellipse (half width, half height).
    pub fn radii(&self) -> Vec2 {
        Vec2::new(self.width() / 2.0, self.height() / 2.0)
    }

    pub fn to_array(self) -> [f64; 4] {
        self.into()
    }

    /// Checks the invariant callers must hold before asking for geometry.
    ///
    /// The geometry functions never call this; it belongs to whoever hands
    /// records to the engine.
    pub fn validate(&self) -> Result<(), BalloonError> {
        let coords = self.to_array();
        if coords.iter().any(|c| !c.is_finite()) {
            return Err(BalloonError::NonFiniteBox(coords));
        }
        let (width, height) = (self.width(), self.height());
        if width <= 0.0 || height <= 0.0 {
            return Err(BalloonError::DegenerateBox { bbox: coords, width, height });
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShapeFamily {
    #[default]
    Rectangle,
    Ellipse,
    Cloud,
    Scream,
}

impl ShapeFamily {
    /// Cloud and scream outlines are procedural, but tails anchor on their
    /// base ellipse rather than on the bumps or spikes.
    pub fn approximate_as_ellipse_for_tail(self) -> bool {
        match self {
            ShapeFamily::Rectangle => false,
            ShapeFamily::Ellipse | ShapeFamily::Cloud | ShapeFamily::Scream => true,
        }
    }

    pub fn intersection_model(self) -> IntersectionModel {
        if self.approximate_as_ellipse_for_tail() {
            IntersectionModel::Ellipse
        } else {
            IntersectionModel::Box
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum BubbleType {
    #[default]
    Speech,
    Thought,
    Whisper,
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleParameters {
    pub border_radius: f64, // rectangle corners, clamped at render time
    pub roughness: f64,     // bump / spike multiplier, unclamped
    pub border_width: f64,
    pub tail_width: f64, // tail base width at the anchor
}

impl Default for StyleParameters {
    fn default() -> Self {
        StyleParameters {
            border_radius: 20.0,
            roughness: 1.0,
            border_width: 3.0,
            tail_width: 40.0,
        }
    }
}

/// A balloon record as the editor stores it.
///
/// Fields the geometry does not read (font size, tail curve, ...) are
/// accepted and dropped.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Balloon {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(rename = "box_2d")]
    pub bbox: BoundingBox,
    #[serde(default)]
    pub shape: ShapeFamily,
    #[serde(rename = "type", default)]
    pub kind: BubbleType,
    #[serde(flatten)]
    pub style: StyleParameters,
    #[serde(rename = "tailTip", default)]
    pub tail_tip: Option<Point>,
}

impl Balloon {
    pub fn new(bbox: BoundingBox, shape: ShapeFamily, kind: BubbleType) -> Self {
        Balloon {
            id: String::new(),
            text: String::new(),
            bbox,
            shape,
            kind,
            style: StyleParameters::default(),
            tail_tip: None,
        }
    }

    /// The balloon the editor drops in when the user adds one by hand:
    /// a 200x200 rounded rectangle in the middle of the page, no tail.
    pub fn manual(id: impl Into<String>) -> Self {
        Balloon {
            id: id.into(),
            style: StyleParameters { border_width: 1.0, ..StyleParameters::default() },
            ..Balloon::new(
                BoundingBox::new(400.0, 400.0, 600.0, 600.0),
                ShapeFamily::Rectangle,
                BubbleType::Speech,
            )
        }
    }

    pub fn with_tail(mut self, tip: Point) -> Self {
        self.tail_tip = Some(tip);
        self
    }

    /// Decodes and validates a record coming from outside the crate.
    pub fn from_json(json: &str) -> Result<Self, BalloonError> {
        let balloon: Balloon = serde_json::from_str(json)?;
        balloon.validate()?;
        Ok(balloon)
    }

    pub fn validate(&self) -> Result<(), BalloonError> {
        if let Err(err) = self.bbox.validate() {
            tracing::warn!(id = %self.id, %err, "rejecting balloon record");
            return Err(err);
        }
        if let Some(tip) = self.tail_tip {
            if !tip.x.is_finite() || !tip.y.is_finite() {
                tracing::warn!(id = %self.id, "rejecting balloon record with non-finite tail");
                return Err(BalloonError::NonFiniteTail { x: tip.x, y: tip.y });
            }
        }
        Ok(())
    }
}
