use serde::{Deserialize, Serialize};

use crate::models::colors::RgbColor;
use crate::models::common::Dimension;

/// Horizontal alignment of a paragraph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Alignment {
    /// Left-aligned for left-to-right text.
    #[default]
    Start,
    Center,
    /// Right-aligned for left-to-right text.
    End,
}

/// Character styling shared by every run of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// The size of the text's font, in points.
    pub font_size: Dimension,
    pub bold: bool,
    /// Unset means the renderer's default text color.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub foreground_color: Option<RgbColor>,
}

/// Paragraph-level styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphStyle {
    pub alignment: Alignment,
}
