use log::{debug, info};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use super::{Frame, SlideBackend, SlideHandle, TextBoxStyle};
use crate::config::{Language, SlideGeometry};
use crate::errors::{DeckError, Result};
use crate::models::{
    common::{AffineTransform, Dimension, Size},
    elements::{PageElement, PageElementKind},
    image::Image,
    page::Slide,
    presentation::Presentation,
    properties::{ParagraphStyle, TextStyle},
    shape::{Shape, ShapeType},
    text::{Paragraph, TextContent},
};

/// Builds [`Presentation`] documents. Image sizes are read with the `image` crate.
#[derive(Debug, Clone)]
pub struct ModelBackend {
    presentation_id: String,
}

impl Default for ModelBackend {
    fn default() -> Self {
        Self::new("deck")
    }
}

impl ModelBackend {
    pub fn new(presentation_id: impl Into<String>) -> Self {
        Self {
            presentation_id: presentation_id.into(),
        }
    }

    /// Reads a deck previously written by [`SlideBackend::save`].
    pub fn load(path: &Path) -> Result<Presentation> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
    }
}

fn slide_mut(presentation: &mut Presentation, slide: SlideHandle) -> Result<&mut Slide> {
    let count = presentation.slides.len();
    presentation.slides.get_mut(slide.0).ok_or_else(|| {
        DeckError::Configuration(format!(
            "Slide handle {} is out of range for a deck of {} slide(s)",
            slide.0, count
        ))
    })
}

fn push_element(slide: &mut Slide, frame: Frame, element_kind: PageElementKind) {
    let object_id = format!("{}_e{}", slide.object_id, slide.page_elements.len() + 1);
    slide.page_elements.push(PageElement {
        object_id,
        size: Size::emu(frame.width, frame.height),
        transform: AffineTransform::translate_emu(frame.left, frame.top),
        element_kind,
    });
}

impl SlideBackend for ModelBackend {
    type Presentation = Presentation;

    fn new_presentation(&self, geometry: SlideGeometry) -> Presentation {
        Presentation {
            presentation_id: self.presentation_id.clone(),
            title: None,
            page_size: Size::emu(geometry.width_emu, geometry.height_emu),
            slides: Vec::new(),
            locale: None,
        }
    }

    fn describe(&self, presentation: &mut Presentation, title: Option<&str>, language: Language) {
        presentation.title = title.map(str::to_string);
        presentation.locale = Some(language.to_string());
    }

    fn add_blank_slide(&self, presentation: &mut Presentation) -> SlideHandle {
        let index = presentation.slides.len();
        presentation.slides.push(Slide {
            object_id: format!("slide_{}", index + 1),
            page_elements: Vec::new(),
        });
        SlideHandle(index)
    }

    fn add_text_box(
        &self,
        presentation: &mut Presentation,
        slide: SlideHandle,
        frame: Frame,
        lines: &[String],
        style: &TextBoxStyle,
    ) -> Result<()> {
        let text_style = TextStyle {
            font_size: Dimension::pt(style.font_size),
            bold: style.bold,
            foreground_color: style.color,
        };
        let paragraph_style = ParagraphStyle {
            alignment: style.alignment,
        };
        let paragraphs = lines
            .iter()
            .map(|line| Paragraph {
                content: line.clone(),
                style: text_style,
                paragraph_style,
            })
            .collect();

        let slide = slide_mut(presentation, slide)?;
        push_element(
            slide,
            frame,
            PageElementKind::Shape(Shape {
                shape_type: ShapeType::TextBox,
                text: TextContent {
                    paragraphs,
                    word_wrap: style.word_wrap,
                },
            }),
        );
        Ok(())
    }

    fn add_picture(
        &self,
        presentation: &mut Presentation,
        slide: SlideHandle,
        path: &Path,
        frame: Frame,
    ) -> Result<()> {
        let slide = slide_mut(presentation, slide)?;
        push_element(
            slide,
            frame,
            PageElementKind::Image(Image {
                source_path: path.to_string_lossy().into_owned(),
            }),
        );
        Ok(())
    }

    fn measure_image_size(&self, path: &Path) -> Result<(u32, u32)> {
        let size = image::image_dimensions(path).map_err(|source| DeckError::ImageProbe {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Image {} is {}x{} px", path.display(), size.0, size.1);
        Ok(size)
    }

    fn save(&self, presentation: &Presentation, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, presentation)?;
        writer.flush()?;
        info!(
            "Saved deck '{}' with {} slide(s) to {}",
            presentation.presentation_id,
            presentation.slides.len(),
            path.display()
        );
        Ok(())
    }
}
