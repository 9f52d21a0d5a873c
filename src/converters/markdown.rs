use crate::models::{
    elements::{PageElement, PageElementKind},
    page::Slide,
    presentation::Presentation,
    shape::{Shape, ShapeType},
};
use std::cmp::Ordering;
use std::fmt::Write;

/// Compares two elements by their vertical position on the slide.
fn compare_elements_by_y(a: &PageElement, b: &PageElement) -> Ordering {
    a.transform
        .translate_y
        .partial_cmp(&b.transform.translate_y)
        .unwrap_or(Ordering::Equal)
}

/// Text of a text box with surrounding whitespace trimmed. Separator lines stay.
fn extract_text_from_shape(shape: &Shape) -> Option<String> {
    if shape.shape_type != ShapeType::TextBox {
        return None;
    }
    let text = shape.text.plain_text();
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn extract_text_from_page_element(element: &PageElement) -> Option<String> {
    match &element.element_kind {
        PageElementKind::Shape(shape) => extract_text_from_shape(shape),
        PageElementKind::Image(image) => Some(format!("![]({})", image.source_path)),
    }
}

/// Text of every element on a slide, top to bottom. Elements at the same height keep
/// their drawing order.
fn extract_text_from_slide(slide: &Slide) -> Option<String> {
    let mut sorted_elements: Vec<&PageElement> = slide.page_elements.iter().collect();
    sorted_elements.sort_by(|a, b| compare_elements_by_y(a, b));

    let parts: Vec<String> = sorted_elements
        .into_iter()
        .filter_map(extract_text_from_page_element)
        .collect();

    (!parts.is_empty()).then(|| parts.join("\n"))
}

/// Renders a built deck as a Markdown outline.
///
/// Slides are headed `## Slide N` (1-based) and separated by `---`. Slides without
/// any text or picture are skipped but keep their number.
pub fn extract_text_from_presentation(presentation: &Presentation) -> String {
    let mut full_text = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(full_text, "# Presentation");
    match &presentation.title {
        Some(title) => {
            let _ = writeln!(full_text, "{}\n", title);
        }
        None => full_text.push('\n'),
    }

    let mut first_slide = true;
    for (index, slide) in presentation.slides.iter().enumerate() {
        let Some(slide_content) = extract_text_from_slide(slide) else {
            continue;
        };
        if !first_slide {
            let _ = writeln!(full_text, "\n---\n");
        }
        first_slide = false;

        let _ = writeln!(full_text, "## Slide {}\n", index + 1);
        let _ = writeln!(full_text, "{}", slide_content);
    }

    full_text
}
