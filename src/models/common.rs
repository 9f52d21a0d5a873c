use serde::{Deserialize, Serialize};

/// Specifies a unit of length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Unit {
    /// An English Metric Unit (EMU). 1 EMU = 1/914400 inch.
    Emu,
    /// A point (pt). 1 pt = 1/72 inch.
    Pt,
}

/// A magnitude in a specific unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimension {
    pub magnitude: f64,
    pub unit: Unit,
}

impl Dimension {
    pub fn emu(magnitude: i64) -> Self {
        Self {
            magnitude: magnitude as f64,
            unit: Unit::Emu,
        }
    }

    pub fn pt(magnitude: u32) -> Self {
        Self {
            magnitude: magnitude as f64,
            unit: Unit::Pt,
        }
    }
}

/// A width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Size {
    pub width: Dimension,
    pub height: Dimension,
}

impl Size {
    pub fn emu(width: i64, height: i64) -> Self {
        Self {
            width: Dimension::emu(width),
            height: Dimension::emu(height),
        }
    }
}

/// Position of an element's top-left corner on the slide.
///
/// Elements are placed without scaling or shearing, so only the translation is stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffineTransform {
    pub translate_x: f64,
    pub translate_y: f64,
    /// The units for the translation elements.
    pub unit: Unit,
}

impl AffineTransform {
    pub fn translate_emu(x: i64, y: i64) -> Self {
        Self {
            translate_x: x as f64,
            translate_y: y as f64,
            unit: Unit::Emu,
        }
    }
}
