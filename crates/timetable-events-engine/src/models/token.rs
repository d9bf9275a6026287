use serde::{Deserialize, Serialize};

/// An anchor position in the source page layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A text fragment as emitted by the upstream document reader.
///
/// The upstream extractor names its fields `S`, `X` and `Y`; both spellings
/// are accepted when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedToken {
    #[serde(alias = "S")]
    pub text: String,
    #[serde(alias = "X")]
    pub x: f64,
    #[serde(alias = "Y")]
    pub y: f64,
}

impl PositionedToken {
    pub fn new(text: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            text: text.into(),
            x,
            y,
        }
    }

    /// Get the anchor position of this token
    pub fn position(&self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }
}
