//! Line-oriented parser turning raw deck text into [`ContentBlock`]s.
//!
//! Grammar, one rule per line (lines are trimmed, blank lines skipped):
//! * `[title]: text` (tag case-insensitive): deck title.
//! * `N text`: top-level section header, emitted as its own slide.
//! * `N.M text`: sub-header; becomes the title of the following body.
//! * any line containing `[image]`: attaches the next unused image to the body so far.
//! * anything else: body text.

use log::{info, warn};
use regex::Regex;
use std::sync::OnceLock;

use crate::blocks::{ContentBlock, ImageRef, ImageSet};
use crate::errors::{DeckError, Result};

pub const TITLE_TAG: &str = "[title]:";
pub const IMAGE_MARKER: &str = "[image]";

fn section_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d+\s+.+").expect("section pattern is valid"))
}

fn sub_section_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d+\.\d+\s+.+").expect("sub-section pattern is valid"))
}

fn strip_title_tag(line: &str) -> Option<&str> {
    let tag = line.get(..TITLE_TAG.len())?;
    tag.eq_ignore_ascii_case(TITLE_TAG)
        .then(|| line[TITLE_TAG.len()..].trim())
}

struct ParserState<'a> {
    images: &'a ImageSet,
    next_image: usize,
    blocks: Vec<ContentBlock>,
    current_title: Option<String>,
    body: Vec<String>,
}

impl<'a> ParserState<'a> {
    fn new(images: &'a ImageSet) -> Self {
        Self {
            images,
            next_image: 0,
            blocks: Vec::new(),
            current_title: None,
            body: Vec::new(),
        }
    }

    fn flush_body(&mut self) {
        if self.body.is_empty() {
            return;
        }
        let text = self.body.join("\n");
        self.body.clear();
        match &self.current_title {
            Some(title) => self.blocks.push(ContentBlock::Body {
                title: Some(title.clone()),
                text,
            }),
            None => warn!(
                "Dropping {} char(s) of body text that appear before any section header",
                text.chars().count()
            ),
        }
    }

    fn take_image(&mut self, line_number: usize, line: &str) -> Result<ImageRef> {
        let (name, path) = self
            .images
            .get_index(self.next_image)
            .ok_or_else(|| DeckError::Resource {
                line_number,
                line: line.to_string(),
            })?;
        self.next_image += 1;
        Ok(ImageRef::new(name.clone(), path.clone()))
    }

    fn feed(&mut self, line_number: usize, line: &str) -> Result<()> {
        if line.is_empty() {
            return Ok(());
        }

        if let Some(title) = strip_title_tag(line) {
            if !self.body.is_empty() {
                warn!(
                    "Discarding {} body line(s) left before the title on line {}",
                    self.body.len(),
                    line_number
                );
            }
            self.blocks.push(ContentBlock::Title {
                text: title.to_string(),
            });
            self.current_title = None;
            self.body.clear();
        } else if section_pattern().is_match(line) {
            self.flush_body();
            self.blocks.push(ContentBlock::SectionHeader {
                text: line.to_string(),
            });
            self.current_title = Some(line.to_string());
        } else if sub_section_pattern().is_match(line) {
            self.flush_body();
            self.current_title = Some(line.to_string());
        } else if line.contains(IMAGE_MARKER) {
            let image = self.take_image(line_number, line)?;
            let remainder = line.replace(IMAGE_MARKER, "");
            let remainder = remainder.trim();
            if !remainder.is_empty() {
                self.body.push(remainder.to_string());
            }
            self.blocks.push(ContentBlock::ImageBody {
                title: self.current_title.clone(),
                text: self.body.join("\n"),
                image,
            });
            self.body.clear();
        } else {
            self.body.push(line.to_string());
        }
        Ok(())
    }

    fn finish(mut self) -> Vec<ContentBlock> {
        self.flush_body();
        if self.next_image < self.images.len() {
            warn!(
                "{} supplied image(s) were not referenced by any [image] marker",
                self.images.len() - self.next_image
            );
        }
        self.blocks
    }
}

/// Parses raw deck text into blocks, consuming images from `images` in order.
///
/// Fails with [`DeckError::Resource`] when an `[image]` marker finds no unused image.
pub fn parse_content(raw: &str, images: &ImageSet) -> Result<Vec<ContentBlock>> {
    let mut state = ParserState::new(images);
    for (index, line) in raw.lines().enumerate() {
        state.feed(index + 1, line.trim())?;
    }
    let blocks = state.finish();
    info!("Parsed {} content block(s)", blocks.len());
    Ok(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn images(names: &[&str]) -> ImageSet {
        names
            .iter()
            .map(|n| (n.to_string(), PathBuf::from(format!("/tmp/{n}.png"))))
            .collect()
    }

    fn body(title: &str, text: &str) -> ContentBlock {
        ContentBlock::Body {
            title: Some(title.to_string()),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_parses_titles_sections_bodies_and_images() {
        let raw = "[title]: Hello\n1 Intro\nSome body text\n1.1 Sub\nMore text [image]\nTrailing";
        let blocks = parse_content(raw, &images(&["fig1"])).unwrap();
        assert_eq!(
            blocks,
            vec![
                ContentBlock::Title {
                    text: "Hello".to_string()
                },
                ContentBlock::SectionHeader {
                    text: "1 Intro".to_string()
                },
                body("1 Intro", "Some body text"),
                ContentBlock::ImageBody {
                    title: Some("1.1 Sub".to_string()),
                    text: "More text".to_string(),
                    image: ImageRef::new("fig1", "/tmp/fig1.png"),
                },
                body("1.1 Sub", "Trailing"),
            ]
        );
    }

    #[test]
    fn test_missing_image_reports_the_marker_line() {
        let raw = "1 Intro\nfirst [image]\nsecond [image]";
        let err = parse_content(raw, &images(&["only"])).unwrap_err();
        match err {
            DeckError::Resource { line_number, line } => {
                assert_eq!(line_number, 3);
                assert_eq!(line, "second [image]");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_images_are_consumed_in_insertion_order() {
        let raw = "1 A\n[image]\n[image]";
        let blocks = parse_content(raw, &images(&["zeta", "alpha"])).unwrap();
        let names: Vec<&str> = blocks
            .iter()
            .filter_map(|b| match b {
                ContentBlock::ImageBody { image, .. } => Some(image.name.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_title_tag_is_case_insensitive_and_resets_section() {
        let raw = "1 Old\nbody\n[TITLE]:  New Deck \nloose";
        let blocks = parse_content(raw, &ImageSet::new()).unwrap();
        assert_eq!(
            blocks[1],
            ContentBlock::Title {
                text: "New Deck".to_string()
            }
        );
        // "loose" has no section to belong to after the title reset.
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn test_body_without_a_section_is_dropped() {
        let raw = "loose intro\n[title]: Deck\nafter title\n1 A\nx";
        let blocks = parse_content(raw, &ImageSet::new()).unwrap();
        assert_eq!(
            blocks,
            vec![
                ContentBlock::Title {
                    text: "Deck".to_string()
                },
                ContentBlock::SectionHeader {
                    text: "1 A".to_string()
                },
                body("1 A", "x"),
            ]
        );
    }

    #[test]
    fn test_body_lines_are_joined_and_blank_lines_skipped() {
        let raw = "2 Results\n\n  line one  \nline two\n\n";
        let blocks = parse_content(raw, &ImageSet::new()).unwrap();
        assert_eq!(blocks[1], body("2 Results", "line one\nline two"));
    }

    #[test]
    fn test_sub_header_does_not_emit_a_slide() {
        let raw = "1 A\n1.1 B\n1.2 C\ntext";
        let blocks = parse_content(raw, &ImageSet::new()).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1], body("1.2 C", "text"));
    }

    #[test]
    fn test_bare_number_is_body_text() {
        // A number needs following text to count as a header.
        let raw = "1 A\n2024";
        let blocks = parse_content(raw, &ImageSet::new()).unwrap();
        assert_eq!(blocks[1], body("1 A", "2024"));
    }
}
