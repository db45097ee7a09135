//! Error type for the record-decoding boundary.
//!
//! The geometry functions themselves are total and never return these.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised while turning caller data into a [`crate::Balloon`].
#[derive(Error, Debug)]
pub enum BalloonError {
    /// The JSON record could not be decoded
    #[error("Invalid balloon record: {0}")]
    Decode(#[from] serde_json::Error),

    /// A JS value could not be converted to or from a record
    #[error("Invalid balloon value: {0}")]
    Binding(#[from] serde_wasm_bindgen::Error),

    /// A box coordinate is NaN or infinite
    #[error("Box {0:?} has a non-finite coordinate")]
    NonFiniteBox([f64; 4]),

    /// The box has no area
    #[error("Box {bbox:?} is degenerate: width {width} and height {height} must both be positive")]
    DegenerateBox {
        bbox: [f64; 4],
        width: f64,
        height: f64,
    },

    /// The tail tip is NaN or infinite
    #[error("Tail tip ({x}, {y}) is not finite")]
    NonFiniteTail { x: f64, y: f64 },

    /// A `box_2d` array without exactly four numbers
    #[error("box_2d needs 4 numbers, got {0}")]
    BoxArity(usize),

    #[error("Unknown resize handle: {0}")]
    UnknownHandle(String),
}

impl From<BalloonError> for JsValue {
    fn from(err: BalloonError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
