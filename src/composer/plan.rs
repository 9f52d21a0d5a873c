//! Decides how each block is laid out, without drawing anything.
//!
//! Geometry is in EMU and derived from the slide size. Body layouts reserve a
//! heading strip at the top; image layouts carve the rest between text and picture.

use log::debug;
use std::path::PathBuf;

use crate::backend::{Frame, SlideBackend};
use crate::blocks::{ContentBlock, ImageRef};
use crate::config::{DeckConfig, SlideGeometry, TemplateKind};
use crate::errors::{DeckError, Result};
use crate::layout::constants::{pt_to_emu, tenths_of_inch, EMU_PER_PIXEL, TITLE_LINE_SPACING_PT};
use crate::layout::{format_title, paginate_with, Page, PaginationOptions, TitleLayout};

const HALF_INCH: i64 = tenths_of_inch(5);
const ONE_INCH: i64 = tenths_of_inch(10);

// Text-above-image: the picture is capped at 1.5in tall and sits 0.5in above the bottom edge.
const BELOW_IMAGE_MAX_HEIGHT: i64 = tenths_of_inch(15);
const BELOW_IMAGE_RESERVED: i64 = tenths_of_inch(35);
const BELOW_CAPTION_GAP: i64 = tenths_of_inch(1);

// Text-beside-image: text takes 60% of the width, the picture column the rest.
const BESIDE_TEXT_SHARE: f64 = 0.6;
const BESIDE_CAPTION_GAP: i64 = tenths_of_inch(2);

const CAPTION_HEIGHT: i64 = HALF_INCH;

/// A picture positioned on a slide, with its caption box underneath.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedImage {
    pub path: PathBuf,
    pub caption: String,
    pub frame: Frame,
    pub caption_frame: Frame,
}

/// The paginated body shared by every text layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyPlan {
    /// Heading repeated at the top of each page's slide.
    pub heading: Option<String>,
    pub pages: Vec<Page>,
    pub frame: Frame,
    pub font_size: u32,
    pub template_kind: TemplateKind,
}

/// How one block renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideLayoutPlan {
    /// A single centred title slide (deck title or section header).
    TitleOnly { title: TitleLayout, frame: Frame },
    /// One text slide per page.
    TextOnly(BodyPlan),
    /// Text on top, landscape picture below, on every page.
    TextAboveImage(BodyPlan, PlacedImage),
    /// Text on the left, portrait or square picture on the right, on every page.
    TextBesideImage(BodyPlan, PlacedImage),
}

impl SlideLayoutPlan {
    /// Number of slides this plan produces.
    pub fn slide_count(&self) -> usize {
        match self {
            SlideLayoutPlan::TitleOnly { .. } => 1,
            SlideLayoutPlan::TextOnly(body) => body.pages.len(),
            SlideLayoutPlan::TextAboveImage(body, _) | SlideLayoutPlan::TextBesideImage(body, _) => {
                body.pages.len().max(1)
            }
        }
    }
}

/// Centred box holding a wrapped title. Each line is `font_size + 10` points tall.
pub fn title_frame(geometry: SlideGeometry, title: &TitleLayout) -> Frame {
    let line_height = pt_to_emu(title.font_size + TITLE_LINE_SPACING_PT);
    let total_height = line_height * title.lines.len() as i64;
    Frame::new(
        HALF_INCH,
        (geometry.height_emu - total_height) / 2,
        geometry.width_emu - ONE_INCH,
        total_height,
    )
}

/// Heading strip at the top of every body slide.
pub fn heading_frame(geometry: SlideGeometry) -> Frame {
    Frame::new(HALF_INCH, HALF_INCH, geometry.width_emu - ONE_INCH, ONE_INCH)
}

/// Body text box for a template. Fails when the slide leaves it no height.
pub fn body_frame(kind: TemplateKind, geometry: SlideGeometry) -> Result<Frame> {
    let (width, height) = (geometry.width_emu, geometry.height_emu);
    let top = tenths_of_inch(15);
    let frame = match kind {
        TemplateKind::FullText => Frame::new(ONE_INCH, top, width - 2 * ONE_INCH, height - 3 * ONE_INCH),
        TemplateKind::TextAboveImage => Frame::new(
            ONE_INCH,
            top,
            width - 2 * ONE_INCH,
            height - BELOW_IMAGE_MAX_HEIGHT - BELOW_IMAGE_RESERVED,
        ),
        TemplateKind::Custom => Frame::new(
            HALF_INCH,
            top,
            beside_text_width(geometry),
            height - 2 * ONE_INCH,
        ),
    };

    if frame.height <= 0 || frame.width <= 0 {
        return Err(DeckError::Layout {
            template: kind.to_string(),
            text_box_width_emu: frame.width,
            text_box_height_emu: frame.height,
            slide_width_emu: width,
            slide_height_emu: height,
        });
    }
    Ok(frame)
}

fn beside_text_width(geometry: SlideGeometry) -> i64 {
    (geometry.width_emu as f64 * BESIDE_TEXT_SHARE).round() as i64
}

/// Scales a picture to fit `max_width` x `max_height`, keeping its aspect ratio.
/// Pictures are never enlarged beyond their natural 96 DPI size.
pub fn fit_image(pixel_size: (u32, u32), max_width: i64, max_height: i64) -> (i64, i64) {
    let natural_width = pixel_size.0.max(1) as f64 * EMU_PER_PIXEL;
    let natural_height = pixel_size.1.max(1) as f64 * EMU_PER_PIXEL;
    let scale = (max_width.max(0) as f64 / natural_width)
        .min(max_height.max(0) as f64 / natural_height)
        .min(1.0);
    (
        (natural_width * scale).round() as i64,
        (natural_height * scale).round() as i64,
    )
}

/// Landscape images go under the text, everything else beside it.
pub fn template_for_image(pixel_size: (u32, u32)) -> TemplateKind {
    if pixel_size.0 > pixel_size.1 {
        TemplateKind::TextAboveImage
    } else {
        TemplateKind::Custom
    }
}

/// Horizontally centred picture along the bottom edge, caption directly beneath.
pub fn place_image_below(
    geometry: SlideGeometry,
    image: &ImageRef,
    pixel_size: (u32, u32),
) -> PlacedImage {
    let (width, height) = fit_image(
        pixel_size,
        geometry.width_emu - 2 * ONE_INCH,
        BELOW_IMAGE_MAX_HEIGHT,
    );
    let left = (geometry.width_emu - width) / 2;
    let top = geometry.height_emu - height - HALF_INCH;
    PlacedImage {
        path: image.path.clone(),
        caption: image.name.clone(),
        frame: Frame::new(left, top, width, height),
        caption_frame: Frame::new(left, top + height + BELOW_CAPTION_GAP, width, CAPTION_HEIGHT),
    }
}

/// Picture vertically centred in the right-hand column, caption beneath.
pub fn place_image_beside(
    geometry: SlideGeometry,
    image: &ImageRef,
    pixel_size: (u32, u32),
) -> PlacedImage {
    let text_width = beside_text_width(geometry);
    let column_width = geometry.width_emu - text_width;
    let (width, height) = fit_image(
        pixel_size,
        column_width - HALF_INCH,
        geometry.height_emu - 2 * ONE_INCH,
    );
    let left = text_width + HALF_INCH;
    let top = (geometry.height_emu - height) / 2;
    PlacedImage {
        path: image.path.clone(),
        caption: image.name.clone(),
        frame: Frame::new(left, top, width, height),
        caption_frame: Frame::new(left, top + height + BESIDE_CAPTION_GAP, width, CAPTION_HEIGHT),
    }
}

fn plan_body(
    kind: TemplateKind,
    heading: Option<&String>,
    text: &str,
    config: &DeckConfig,
) -> Result<BodyPlan> {
    let frame = body_frame(kind, config.slide)?;
    let options = PaginationOptions::new(kind, config.font_size, config.language)
        .with_line_cap(config.line_cap);
    Ok(BodyPlan {
        heading: heading.cloned(),
        pages: paginate_with(text, &options)?,
        frame,
        font_size: config.font_size,
        template_kind: kind,
    })
}

/// Plans the slides for one block. Image blocks are probed through `backend`.
pub fn plan_block<B: SlideBackend>(
    block: &ContentBlock,
    config: &DeckConfig,
    backend: &B,
) -> Result<SlideLayoutPlan> {
    let plan = match block {
        ContentBlock::Title { text } => {
            let title = format_title(text, config.title_font_size);
            SlideLayoutPlan::TitleOnly {
                frame: title_frame(config.slide, &title),
                title,
            }
        }
        ContentBlock::SectionHeader { text } => {
            let title = format_title(text, Some(config.section_font_size));
            SlideLayoutPlan::TitleOnly {
                frame: title_frame(config.slide, &title),
                title,
            }
        }
        ContentBlock::Body { title, text } => {
            SlideLayoutPlan::TextOnly(plan_body(TemplateKind::FullText, title.as_ref(), text, config)?)
        }
        ContentBlock::ImageBody { title, text, image } => {
            let pixel_size = backend.measure_image_size(&image.path)?;
            let kind = template_for_image(pixel_size);
            let body = plan_body(kind, title.as_ref(), text, config)?;
            match kind {
                TemplateKind::TextAboveImage => SlideLayoutPlan::TextAboveImage(
                    body,
                    place_image_below(config.slide, image, pixel_size),
                ),
                _ => SlideLayoutPlan::TextBesideImage(
                    body,
                    place_image_beside(config.slide, image, pixel_size),
                ),
            }
        }
    };
    debug!(
        "Planned {} block as {} slide(s)",
        block.kind(),
        plan.slide_count()
    );
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::constants::EMU_PER_INCH;

    fn geometry() -> SlideGeometry {
        SlideGeometry::default()
    }

    #[test]
    fn test_title_frame_is_vertically_centred() {
        let title = format_title("一二三四五六七八九十一二三四五六七八九十", None);
        assert_eq!(title.font_size, 36);
        assert_eq!(title.lines.len(), 2);
        let frame = title_frame(geometry(), &title);
        // (36 + 10)pt per line.
        assert_eq!(frame.height, 2 * 46 * 12_700);
        assert_eq!(frame.top, (geometry().height_emu - frame.height) / 2);
        assert_eq!(frame.left, EMU_PER_INCH / 2);
        assert_eq!(frame.width, 9 * EMU_PER_INCH);
    }

    #[test]
    fn test_body_frames_follow_the_template() {
        let full = body_frame(TemplateKind::FullText, geometry()).unwrap();
        assert_eq!(full, Frame::new(EMU_PER_INCH, 3 * EMU_PER_INCH / 2, 8 * EMU_PER_INCH, 9 * EMU_PER_INCH / 2));

        let above = body_frame(TemplateKind::TextAboveImage, geometry()).unwrap();
        assert_eq!(above.height, 5 * EMU_PER_INCH / 2);

        let beside = body_frame(TemplateKind::Custom, geometry()).unwrap();
        assert_eq!(beside.width, 6 * EMU_PER_INCH);
        assert_eq!(beside.height, 11 * EMU_PER_INCH / 2);
    }

    #[test]
    fn test_short_slide_is_a_layout_error() {
        let short = SlideGeometry {
            width_emu: 10 * EMU_PER_INCH,
            height_emu: 5 * EMU_PER_INCH,
        };
        let err = body_frame(TemplateKind::TextAboveImage, short).unwrap_err();
        match &err {
            DeckError::Layout {
                template,
                text_box_height_emu,
                ..
            } => {
                assert_eq!(template, "text_above_image");
                assert_eq!(*text_box_height_emu, 0);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("text_above_image"));
        // The full-text box still fits on the same slide.
        assert!(body_frame(TemplateKind::FullText, short).is_ok());
    }

    #[test]
    fn test_narrow_slide_reports_the_text_box_width() {
        let narrow = SlideGeometry {
            width_emu: 2 * EMU_PER_INCH,
            height_emu: 15 * EMU_PER_INCH / 2,
        };
        let err = body_frame(TemplateKind::FullText, narrow).unwrap_err();
        match &err {
            DeckError::Layout {
                text_box_width_emu,
                text_box_height_emu,
                ..
            } => {
                assert_eq!(*text_box_width_emu, 0);
                assert_eq!(*text_box_height_emu, 9 * EMU_PER_INCH / 2);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("0x4114800 EMU"));
    }

    #[test]
    fn test_fit_image_keeps_aspect_and_never_upscales() {
        // 100x50 px is 952500x476250 EMU, well inside the box.
        assert_eq!(fit_image((100, 50), 10 * EMU_PER_INCH, 10 * EMU_PER_INCH), (952_500, 476_250));

        // 2000x1000 px capped by a 1.5in height.
        let (w, h) = fit_image((2000, 1000), 8 * EMU_PER_INCH, 3 * EMU_PER_INCH / 2);
        assert_eq!(h, 3 * EMU_PER_INCH / 2);
        assert_eq!(w, 3 * EMU_PER_INCH);
    }

    #[test]
    fn test_orientation_picks_template() {
        assert_eq!(template_for_image((1600, 900)), TemplateKind::TextAboveImage);
        assert_eq!(template_for_image((900, 1600)), TemplateKind::Custom);
        assert_eq!(template_for_image((500, 500)), TemplateKind::Custom);
    }

    #[test]
    fn test_image_below_is_centred_with_caption_beneath() {
        let image = ImageRef::new("chart", "chart.png");
        let placed = place_image_below(geometry(), &image, (2000, 1000));
        assert_eq!(placed.frame.left + placed.frame.right(), geometry().width_emu);
        assert_eq!(placed.frame.bottom(), geometry().height_emu - EMU_PER_INCH / 2);
        assert_eq!(placed.caption_frame.top, placed.frame.bottom() + EMU_PER_INCH / 10);
        assert_eq!(placed.caption, "chart");
    }

    #[test]
    fn test_image_beside_sits_in_the_right_column() {
        let image = ImageRef::new("portrait", "p.png");
        let placed = place_image_beside(geometry(), &image, (600, 1200));
        assert_eq!(placed.frame.left, 6 * EMU_PER_INCH + EMU_PER_INCH / 2);
        assert!(placed.frame.right() <= geometry().width_emu);
        assert!(placed.frame.height <= geometry().height_emu - 2 * EMU_PER_INCH);
        assert_eq!(
            placed.frame.top,
            (geometry().height_emu - placed.frame.height) / 2
        );
    }
}
