//! Turns content blocks into slides.
//!
//! Each block is first planned ([`plan::plan_block`]) and then drawn
//! ([`render::render_plan`]). [`compose_block`] only appends slides to a presentation it
//! is handed; [`build_deck`] and [`generate_deck`] own the whole request.

pub mod plan;
pub mod render;

pub use plan::{plan_block, BodyPlan, PlacedImage, SlideLayoutPlan};
pub use render::render_plan;

use log::info;
use std::path::Path;

use crate::backend::SlideBackend;
use crate::blocks::{ContentBlock, ImageSet};
use crate::config::DeckConfig;
use crate::errors::Result;
use crate::parser::parse_content;

/// Plans and draws one block, returning the number of slides appended.
pub fn compose_block<B: SlideBackend>(
    block: &ContentBlock,
    config: &DeckConfig,
    backend: &B,
    presentation: &mut B::Presentation,
) -> Result<usize> {
    let plan = plan_block(block, config, backend)?;
    render_plan(&plan, config.slide, backend, presentation)
}

/// Builds a fresh presentation holding the slides of every block, in order.
///
/// The first `Title` block, if any, names the deck.
pub fn build_deck<B: SlideBackend>(
    blocks: &[ContentBlock],
    config: &DeckConfig,
    backend: &B,
) -> Result<B::Presentation> {
    config.validate()?;
    let mut presentation = backend.new_presentation(config.slide);
    let deck_title = blocks.iter().find_map(|block| match block {
        ContentBlock::Title { text } => Some(text.as_str()),
        _ => None,
    });
    backend.describe(&mut presentation, deck_title, config.language);

    let mut slides = 0;
    for block in blocks {
        slides += compose_block(block, config, backend, &mut presentation)?;
    }
    info!(
        "Composed {} slide(s) from {} block(s)",
        slides,
        blocks.len()
    );
    Ok(presentation)
}

/// Parses `raw`, builds the deck and saves it to `output`.
///
/// Nothing is written when parsing or layout fails.
pub fn generate_deck<B: SlideBackend>(
    raw: &str,
    images: &ImageSet,
    config: &DeckConfig,
    backend: &B,
    output: &Path,
) -> Result<B::Presentation> {
    let blocks = parse_content(raw, images)?;
    let presentation = build_deck(&blocks, config, backend)?;
    backend.save(&presentation, output)?;
    Ok(presentation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{Frame, SlideHandle, TextBoxStyle};
    use crate::blocks::ImageRef;
    use crate::config::{Language, SlideGeometry};
    use crate::errors::DeckError;
    use std::cell::RefCell;
    use std::path::{Path, PathBuf};

    #[derive(Debug, Clone, PartialEq)]
    enum Drawn {
        Text { slide: usize, lines: Vec<String>, font_size: u32, bold: bool },
        Picture { slide: usize, path: PathBuf, frame: Frame },
    }

    /// Records draw calls; images are 1600x900 unless their file name starts with "tall".
    #[derive(Default)]
    struct RecordingBackend {
        probes: RefCell<Vec<PathBuf>>,
    }

    #[derive(Debug, Default)]
    struct Recording {
        slides: usize,
        drawn: Vec<Drawn>,
    }

    impl SlideBackend for RecordingBackend {
        type Presentation = Recording;

        fn new_presentation(&self, _geometry: SlideGeometry) -> Recording {
            Recording::default()
        }

        fn add_blank_slide(&self, presentation: &mut Recording) -> SlideHandle {
            presentation.slides += 1;
            SlideHandle(presentation.slides - 1)
        }

        fn add_text_box(
            &self,
            presentation: &mut Recording,
            slide: SlideHandle,
            _frame: Frame,
            lines: &[String],
            style: &TextBoxStyle,
        ) -> Result<()> {
            presentation.drawn.push(Drawn::Text {
                slide: slide.0,
                lines: lines.to_vec(),
                font_size: style.font_size,
                bold: style.bold,
            });
            Ok(())
        }

        fn add_picture(
            &self,
            presentation: &mut Recording,
            slide: SlideHandle,
            path: &Path,
            frame: Frame,
        ) -> Result<()> {
            presentation.drawn.push(Drawn::Picture {
                slide: slide.0,
                path: path.to_path_buf(),
                frame,
            });
            Ok(())
        }

        fn measure_image_size(&self, path: &Path) -> Result<(u32, u32)> {
            self.probes.borrow_mut().push(path.to_path_buf());
            let tall = path
                .file_name()
                .is_some_and(|n| n.to_string_lossy().starts_with("tall"));
            Ok(if tall { (900, 1600) } else { (1600, 900) })
        }

        fn save(&self, _presentation: &Recording, _path: &Path) -> Result<()> {
            Ok(())
        }
    }

    fn compose(block: &ContentBlock, config: &DeckConfig) -> (Recording, usize) {
        let backend = RecordingBackend::default();
        let mut deck = backend.new_presentation(config.slide);
        let count = compose_block(block, config, &backend, &mut deck).unwrap();
        (deck, count)
    }

    #[test]
    fn test_build_deck_renders_blocks_in_order() {
        let blocks = vec![
            ContentBlock::Title {
                text: "Deck".to_string(),
            },
            ContentBlock::SectionHeader {
                text: "1 Intro".to_string(),
            },
            ContentBlock::Body {
                title: Some("1 Intro".to_string()),
                text: String::new(),
            },
            ContentBlock::Body {
                title: Some("1 Intro".to_string()),
                text: "正文".to_string(),
            },
        ];
        let deck = build_deck(&blocks, &DeckConfig::default(), &RecordingBackend::default()).unwrap();
        // The empty body contributes no slide.
        assert_eq!(deck.slides, 3);
        let first_lines: Vec<&Vec<String>> = deck
            .drawn
            .iter()
            .filter_map(|d| match d {
                Drawn::Text { lines, .. } => Some(lines),
                Drawn::Picture { .. } => None,
            })
            .collect();
        assert_eq!(first_lines[0], &vec!["Deck".to_string()]);
        assert_eq!(first_lines[1], &vec!["1 Intro".to_string()]);
    }

    #[test]
    fn test_build_deck_rejects_invalid_config_before_drawing() {
        let config = DeckConfig {
            font_size: 22,
            ..DeckConfig::default()
        };
        let err = build_deck(&[], &config, &RecordingBackend::default()).unwrap_err();
        assert!(matches!(err, DeckError::Configuration(_)));
    }

    #[test]
    fn test_section_header_uses_forced_font_size() {
        let block = ContentBlock::SectionHeader {
            text: "1 Intro".to_string(),
        };
        let (deck, count) = compose(&block, &DeckConfig::default());
        assert_eq!(count, 1);
        assert_eq!(
            deck.drawn,
            vec![Drawn::Text {
                slide: 0,
                lines: vec!["1 Intro".to_string()],
                font_size: 36,
                bold: true
            }]
        );
    }

    #[test]
    fn test_title_font_size_comes_from_length_or_override() {
        let block = ContentBlock::Title {
            text: "Hello".to_string(),
        };
        let (deck, _) = compose(&block, &DeckConfig::default());
        assert!(matches!(&deck.drawn[0], Drawn::Text { font_size: 48, .. }));

        let config = DeckConfig {
            title_font_size: Some(40),
            ..DeckConfig::default()
        };
        let (deck, _) = compose(&block, &config);
        assert!(matches!(&deck.drawn[0], Drawn::Text { font_size: 40, .. }));
    }

    #[test]
    fn test_body_renders_one_slide_per_page_with_repeated_heading() {
        let text = vec!["段落".repeat(10); 12].join("\n");
        let block = ContentBlock::Body {
            title: Some("1.1 Details".to_string()),
            text,
        };
        let (deck, count) = compose(&block, &DeckConfig::default());
        assert_eq!(count, 3);
        assert_eq!(deck.slides, 3);
        let headings = deck
            .drawn
            .iter()
            .filter(|d| matches!(d, Drawn::Text { font_size: 28, bold: true, lines, .. } if lines == &vec!["1.1 Details".to_string()]))
            .count();
        assert_eq!(headings, 3);
    }

    #[test]
    fn test_landscape_image_goes_below_text() {
        let block = ContentBlock::ImageBody {
            title: Some("2 Data".to_string()),
            text: "图表说明".to_string(),
            image: ImageRef::new("wide chart", "wide.png"),
        };
        let config = DeckConfig::default();
        let backend = RecordingBackend::default();
        let plan = plan_block(&block, &config, &backend).unwrap();
        assert!(matches!(plan, SlideLayoutPlan::TextAboveImage(..)));
        assert_eq!(backend.probes.borrow().as_slice(), &[PathBuf::from("wide.png")]);

        let mut deck = backend.new_presentation(config.slide);
        render_plan(&plan, config.slide, &backend, &mut deck).unwrap();
        let caption = Drawn::Text {
            slide: 0,
            lines: vec!["wide chart".to_string()],
            font_size: 14,
            bold: false,
        };
        assert!(deck.drawn.contains(&caption));
        assert!(deck
            .drawn
            .iter()
            .any(|d| matches!(d, Drawn::Picture { slide: 0, .. })));
    }

    #[test]
    fn test_portrait_image_goes_beside_text_on_every_page() {
        let text = vec!["内容"; 8].join("\n");
        let block = ContentBlock::ImageBody {
            title: None,
            text,
            image: ImageRef::new("portrait", "tall.png"),
        };
        let backend = RecordingBackend::default();
        let plan = plan_block(&block, &DeckConfig::default(), &backend).unwrap();
        let SlideLayoutPlan::TextBesideImage(body, _) = &plan else {
            panic!("expected text beside image, got {plan:?}");
        };
        assert_eq!(body.template_kind, crate::config::TemplateKind::Custom);
        assert_eq!(plan.slide_count(), 2);

        let mut deck = backend.new_presentation(SlideGeometry::default());
        render_plan(&plan, SlideGeometry::default(), &backend, &mut deck).unwrap();
        let pictures = deck
            .drawn
            .iter()
            .filter(|d| matches!(d, Drawn::Picture { .. }))
            .count();
        assert_eq!(pictures, 2);
    }

    #[test]
    fn test_image_without_text_still_renders_one_slide() {
        let block = ContentBlock::ImageBody {
            title: Some("3 Gallery".to_string()),
            text: String::new(),
            image: ImageRef::new("photo", "photo.png"),
        };
        let (deck, count) = compose(&block, &DeckConfig::default());
        assert_eq!(count, 1);
        assert_eq!(deck.slides, 1);
    }

    #[test]
    fn test_too_short_slide_fails_with_layout_error() {
        let config = DeckConfig {
            slide: SlideGeometry {
                width_emu: 9_144_000,
                height_emu: 2_000_000,
            },
            ..DeckConfig::default()
        };
        let block = ContentBlock::Body {
            title: None,
            text: "text".to_string(),
        };
        let backend = RecordingBackend::default();
        let mut deck = backend.new_presentation(config.slide);
        let err = compose_block(&block, &config, &backend, &mut deck).unwrap_err();
        assert!(matches!(err, DeckError::Layout { .. }));
        assert_eq!(deck.slides, 0);
    }

    #[test]
    fn test_english_body_uses_latin_budget() {
        let config = DeckConfig {
            language: Language::En,
            ..DeckConfig::default()
        };
        let block = ContentBlock::Body {
            title: None,
            text: "word ".repeat(40),
        };
        let (deck, count) = compose(&block, &config);
        assert_eq!(count, 1);
        let Drawn::Text { lines, .. } = &deck.drawn[0] else {
            panic!("expected body text");
        };
        // Each word plus its gap is 2.5 units, so 25 words fit a 62-unit line.
        assert_eq!(lines.len(), 2);
    }
}
