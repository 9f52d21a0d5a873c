//! The drawing surface the composer talks to.
//!
//! The layout engine decides *where* things go; a [`SlideBackend`] knows how to put a
//! text box or a picture at absolute coordinates, read an image's pixel size and write
//! the finished deck. [`ModelBackend`] is the built-in implementation.

mod model;

pub use model::ModelBackend;

use std::path::Path;

use crate::config::{Language, SlideGeometry};
use crate::errors::Result;
use crate::models::colors::RgbColor;
use crate::models::properties::Alignment;

/// An axis-aligned box on a slide, in EMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub left: i64,
    pub top: i64,
    pub width: i64,
    pub height: i64,
}

impl Frame {
    pub fn new(left: i64, top: i64, width: i64, height: i64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> i64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> i64 {
        self.top + self.height
    }
}

/// How the lines of a text box are drawn. Every line becomes its own paragraph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBoxStyle {
    pub font_size: u32,
    pub bold: bool,
    pub alignment: Alignment,
    pub color: Option<RgbColor>,
    pub word_wrap: bool,
}

impl TextBoxStyle {
    pub fn new(font_size: u32) -> Self {
        Self {
            font_size,
            bold: false,
            alignment: Alignment::Start,
            color: None,
            word_wrap: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn aligned(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn colored(mut self, color: RgbColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn wrapped(mut self) -> Self {
        self.word_wrap = true;
        self
    }
}

/// Index of a slide within the presentation it was added to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlideHandle(pub usize);

/// A slide-rendering backend. Implementations own the document format.
pub trait SlideBackend {
    type Presentation;

    fn new_presentation(&self, geometry: SlideGeometry) -> Self::Presentation;

    /// Records deck-level metadata. Backends without metadata can ignore it.
    fn describe(
        &self,
        _presentation: &mut Self::Presentation,
        _title: Option<&str>,
        _language: Language,
    ) {
    }

    fn add_blank_slide(&self, presentation: &mut Self::Presentation) -> SlideHandle;

    fn add_text_box(
        &self,
        presentation: &mut Self::Presentation,
        slide: SlideHandle,
        frame: Frame,
        lines: &[String],
        style: &TextBoxStyle,
    ) -> Result<()>;

    fn add_picture(
        &self,
        presentation: &mut Self::Presentation,
        slide: SlideHandle,
        path: &Path,
        frame: Frame,
    ) -> Result<()>;

    /// Pixel `(width, height)` of the image at `path`.
    fn measure_image_size(&self, path: &Path) -> Result<(u32, u32)>;

    fn save(&self, presentation: &Self::Presentation, path: &Path) -> Result<()>;
}
