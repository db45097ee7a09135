//! Speech-balloon geometry for the comic page editor.
//!
//! A [`Balloon`] record goes in; a [`BalloonGeometry`] comes out, holding
//! the body outline, the tail (pointer triangle plus seam patch, or a chain
//! of thought circles) and the stroke style, all in the 1000x1000
//! normalized page plane. Every function here is pure and cheap enough to
//! call on each pointer move.

pub mod types;
pub mod error;
pub mod path;
pub mod outline;
pub mod intersect;
pub mod tail;
pub mod geometry;
pub mod svg;
pub mod paint;
pub mod interaction;
pub mod detection;
pub mod bindings;

pub use error::BalloonError;
pub use geometry::{balloon_geometry, BalloonGeometry, Layer, StrokeStyle};
pub use intersect::IntersectionModel;
pub use outline::generate_outline;
pub use path::{OutlinePath, PathCommand};
pub use tail::{build_tail, PointerTail, TailGeometry, ThoughtCircle};
pub use types::*;
