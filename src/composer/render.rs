use log::{debug, warn};

use super::plan::{heading_frame, BodyPlan, PlacedImage, SlideLayoutPlan};
use crate::backend::{SlideBackend, SlideHandle, TextBoxStyle};
use crate::config::SlideGeometry;
use crate::errors::Result;
use crate::layout::constants::{IMAGE_CAPTION_FONT_SIZE_PT, SLIDE_HEADING_FONT_SIZE_PT};
use crate::models::colors::RgbColor;
use crate::models::properties::Alignment;

fn draw_picture<B: SlideBackend>(
    backend: &B,
    presentation: &mut B::Presentation,
    slide: SlideHandle,
    image: &PlacedImage,
) -> Result<()> {
    backend.add_picture(presentation, slide, &image.path, image.frame)?;
    backend.add_text_box(
        presentation,
        slide,
        image.caption_frame,
        std::slice::from_ref(&image.caption),
        &TextBoxStyle::new(IMAGE_CAPTION_FONT_SIZE_PT)
            .aligned(Alignment::Center)
            .colored(RgbColor::BLACK),
    )
}

fn draw_body<B: SlideBackend>(
    backend: &B,
    presentation: &mut B::Presentation,
    geometry: SlideGeometry,
    body: &BodyPlan,
    image: Option<&PlacedImage>,
) -> Result<usize> {
    let empty: [String; 0] = [];
    let mut pages: Vec<&[String]> = body.pages.iter().map(|p| p.lines.as_slice()).collect();
    if pages.is_empty() {
        match image {
            Some(image) => {
                warn!(
                    "Image '{}' has no accompanying text; rendering it on its own slide",
                    image.caption
                );
                pages.push(&empty);
            }
            None => {
                debug!("Skipping body with no text under {:?}", body.heading);
                return Ok(0);
            }
        }
    }

    let heading_style = TextBoxStyle::new(SLIDE_HEADING_FONT_SIZE_PT)
        .bold()
        .aligned(Alignment::Center);
    let body_style = TextBoxStyle::new(body.font_size).wrapped();

    for lines in &pages {
        let slide = backend.add_blank_slide(presentation);
        if let Some(heading) = &body.heading {
            backend.add_text_box(
                presentation,
                slide,
                heading_frame(geometry),
                std::slice::from_ref(heading),
                &heading_style,
            )?;
        }
        backend.add_text_box(presentation, slide, body.frame, lines, &body_style)?;
        if let Some(image) = image {
            draw_picture(backend, presentation, slide, image)?;
        }
    }
    Ok(pages.len())
}

/// Appends the slides of `plan` to `presentation` and returns how many were added.
pub fn render_plan<B: SlideBackend>(
    plan: &SlideLayoutPlan,
    geometry: SlideGeometry,
    backend: &B,
    presentation: &mut B::Presentation,
) -> Result<usize> {
    match plan {
        SlideLayoutPlan::TitleOnly { title, frame } => {
            let slide = backend.add_blank_slide(presentation);
            backend.add_text_box(
                presentation,
                slide,
                *frame,
                &title.lines,
                &TextBoxStyle::new(title.font_size)
                    .bold()
                    .aligned(Alignment::Center),
            )?;
            Ok(1)
        }
        SlideLayoutPlan::TextOnly(body) => draw_body(backend, presentation, geometry, body, None),
        SlideLayoutPlan::TextAboveImage(body, image)
        | SlideLayoutPlan::TextBesideImage(body, image) => {
            draw_body(backend, presentation, geometry, body, Some(image))
        }
    }
}
