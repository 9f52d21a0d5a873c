use serde::{Deserialize, Serialize};

use crate::models::properties::{ParagraphStyle, TextStyle};

/// One line of a text box, drawn as its own paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    pub content: String,
    pub style: TextStyle,
    pub paragraph_style: ParagraphStyle,
}

/// The text of a shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextContent {
    pub paragraphs: Vec<Paragraph>,
    /// Whether the renderer may wrap lines that overflow the box.
    pub word_wrap: bool,
}

impl TextContent {
    /// The paragraphs joined with newlines.
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
