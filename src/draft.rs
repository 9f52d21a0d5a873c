//! Immutable editing of a parsed deck.
//!
//! A [`DeckDraft`] is an ordered list of blocks. Every edit consumes nothing and returns
//! a new draft, so an interactive editor can hand the previous value back on each request
//! instead of keeping mutable session state.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::blocks::{ContentBlock, ImageRef, ImageSet};
use crate::errors::{DeckError, Result};
use crate::parser::parse_content;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckDraft {
    blocks: Vec<ContentBlock>,
}

impl From<Vec<ContentBlock>> for DeckDraft {
    fn from(blocks: Vec<ContentBlock>) -> Self {
        Self { blocks }
    }
}

impl DeckDraft {
    /// Parses raw deck text into a first draft.
    pub fn from_text(raw: &str, images: &ImageSet) -> Result<Self> {
        Ok(Self::from(parse_content(raw, images)?))
    }

    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn into_blocks(self) -> Vec<ContentBlock> {
        self.blocks
    }

    fn block(&self, index: usize) -> Result<&ContentBlock> {
        self.blocks.get(index).ok_or_else(|| {
            DeckError::InvalidEdit(format!(
                "Block index {} is out of range for a draft of {} block(s)",
                index,
                self.blocks.len()
            ))
        })
    }

    fn with_block(&self, index: usize, block: ContentBlock) -> Self {
        debug!("Draft edit: block {} is now {}", index, block.kind());
        let mut blocks = self.blocks.clone();
        blocks[index] = block;
        Self { blocks }
    }

    /// Inserts `block` before position `index`. `index == len()` appends.
    pub fn insert_block(&self, index: usize, block: ContentBlock) -> Result<Self> {
        if index > self.blocks.len() {
            return Err(DeckError::InvalidEdit(format!(
                "Cannot insert at {} in a draft of {} block(s)",
                index,
                self.blocks.len()
            )));
        }
        let mut blocks = self.blocks.clone();
        blocks.insert(index, block);
        Ok(Self { blocks })
    }

    pub fn remove_block(&self, index: usize) -> Result<Self> {
        self.block(index)?;
        let mut blocks = self.blocks.clone();
        blocks.remove(index);
        Ok(Self { blocks })
    }

    /// Replaces the text of a `Body` or `ImageBody` block.
    pub fn replace_body(&self, index: usize, text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        let block = match self.block(index)? {
            ContentBlock::Body { title, .. } => ContentBlock::Body {
                title: title.clone(),
                text,
            },
            ContentBlock::ImageBody { title, image, .. } => ContentBlock::ImageBody {
                title: title.clone(),
                text,
                image: image.clone(),
            },
            other => {
                return Err(DeckError::InvalidEdit(format!(
                    "Block {} is a {} block and has no body text",
                    index,
                    other.kind()
                )))
            }
        };
        Ok(self.with_block(index, block))
    }

    /// Attaches an image to a `Body` block, or swaps the image of an `ImageBody`.
    pub fn attach_image(&self, index: usize, image: ImageRef) -> Result<Self> {
        let block = match self.block(index)? {
            ContentBlock::Body { title, text } | ContentBlock::ImageBody { title, text, .. } => {
                ContentBlock::ImageBody {
                    title: title.clone(),
                    text: text.clone(),
                    image,
                }
            }
            other => {
                return Err(DeckError::InvalidEdit(format!(
                    "Cannot attach an image to {} block {}",
                    other.kind(),
                    index
                )))
            }
        };
        Ok(self.with_block(index, block))
    }

    /// Turns an `ImageBody` back into a plain `Body`.
    pub fn detach_image(&self, index: usize) -> Result<Self> {
        let block = match self.block(index)? {
            ContentBlock::ImageBody { title, text, .. } => ContentBlock::Body {
                title: title.clone(),
                text: text.clone(),
            },
            other => {
                return Err(DeckError::InvalidEdit(format!(
                    "Block {} is a {} block and carries no image",
                    index,
                    other.kind()
                )))
            }
        };
        Ok(self.with_block(index, block))
    }
}
