use serde::{Deserialize, Serialize};

use crate::models::text::TextContent;

/// The type of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShapeType {
    /// Text box shape.
    TextBox,
}

/// A PageElement kind representing a shape with text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    pub shape_type: ShapeType,
    pub text: TextContent,
}
