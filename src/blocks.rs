use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Ordered mapping from an image's logical name to its local file path.
/// Insertion order decides which `[image]` marker consumes which image.
pub type ImageSet = IndexMap<String, PathBuf>;

/// An image attached to a body block. The name doubles as the caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub name: String,
    pub path: PathBuf,
}

impl ImageRef {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// One semantically distinct unit of parsed input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// The deck title.
    Title { text: String },
    /// A top-level numbered section header (`1 Intro`).
    SectionHeader { text: String },
    /// Body text under the current section or sub-header title.
    Body { title: Option<String>, text: String },
    /// Body text accompanied by an image.
    ImageBody {
        title: Option<String>,
        text: String,
        image: ImageRef,
    },
}

impl ContentBlock {
    /// Short name of the variant, used in log lines and edit errors.
    pub fn kind(&self) -> &'static str {
        match self {
            ContentBlock::Title { .. } => "title",
            ContentBlock::SectionHeader { .. } => "section_header",
            ContentBlock::Body { .. } => "body",
            ContentBlock::ImageBody { .. } => "image_body",
        }
    }

    /// The heading shown on the block's slides, if any.
    pub fn title(&self) -> Option<&str> {
        match self {
            ContentBlock::Title { text } | ContentBlock::SectionHeader { text } => Some(text),
            ContentBlock::Body { title, .. } | ContentBlock::ImageBody { title, .. } => {
                title.as_deref()
            }
        }
    }
}
