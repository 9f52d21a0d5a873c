use serde::{Deserialize, Serialize};

/// An RGB color with each component in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RgbColor {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl RgbColor {
    pub const BLACK: RgbColor = RgbColor {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
    };
}
